//! Test fixtures and helper data.

use serde_json::{json, Value};

/// A representative generated brand concept, shaped like real API output
pub fn sample_brand_output() -> Value {
    json!({
        "logo": {
            "primary": "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 200 100\"><circle cx=\"50\" cy=\"50\" r=\"40\" fill=\"#D35400\"/></svg>",
            "monochrome": "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 200 100\"><circle cx=\"50\" cy=\"50\" r=\"40\" fill=\"#000000\"/></svg>",
            "reverse": "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 200 100\"><circle cx=\"50\" cy=\"50\" r=\"40\" fill=\"#FFFFFF\"/></svg>"
        },
        "colors": [
            {"name": "Ember", "hex": "#D35400", "type": "primary"},
            {"name": "Slate", "hex": "#2C3E50", "type": "secondary"},
            {"name": "Harvest", "hex": "#F39C12", "type": "accent"},
            {"name": "Fog", "hex": "#ECF0F1", "type": "base"}
        ],
        "typography": {
            "headings": "Archivo",
            "body": "Source Sans Pro"
        },
        "tagline": "Roasted where it matters",
        "logoDescription": "A rising sun over a coffee cup, drawn with a single stroke"
    })
}

/// A well-behaved streamed response: one self-contained JSON object per
/// chunk, ending in a wrapped result
pub fn streamed_chunks() -> Vec<Vec<u8>> {
    let complete = json!({
        "status": "complete",
        "success": true,
        "brandOutput": sample_brand_output(),
    });

    vec![
        br#"{"status":"processing"}"#.to_vec(),
        br#"{"status":"progress","progress":40}"#.to_vec(),
        br#"{"status":"progress","progress":75}"#.to_vec(),
        serde_json::to_vec(&complete).unwrap(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_brand_output_shape() {
        let output = sample_brand_output();
        assert!(output["logo"]["primary"].is_string());
        assert_eq!(output["colors"].as_array().unwrap().len(), 4);
        assert!(output["typography"]["headings"].is_string());
    }

    #[test]
    fn test_streamed_chunks_are_individually_valid_json() {
        for chunk in streamed_chunks() {
            assert!(serde_json::from_slice::<Value>(&chunk).is_ok());
        }
    }
}
