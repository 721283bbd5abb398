//! Request validation for the generation service

use super::types::{BrandInput, RegenerateElementRequest};
use crate::errors::ValidationError;

/// Validate a brand brief before submission
pub fn validate_brand_input(request: &BrandInput) -> Result<(), ValidationError> {
    // Validate brand name
    if request.brand_name.trim().is_empty() {
        return Err(ValidationError::Required {
            field: "brandName".to_string(),
        });
    }

    if request.brand_name.len() > 200 {
        return Err(ValidationError::OutOfRange {
            field: "brandName".to_string(),
            reason: "must be at most 200 characters".to_string(),
        });
    }

    // Validate value entries
    for (i, value) in request.values.iter().enumerate() {
        if value.id.trim().is_empty() {
            return Err(ValidationError::Invalid {
                field: "values".to_string(),
                reason: format!("entry {} has an empty id", i),
            });
        }
        if value.value.trim().is_empty() {
            return Err(ValidationError::Invalid {
                field: "values".to_string(),
                reason: format!("entry {} has an empty value", i),
            });
        }
    }

    // Validate color preferences
    for (i, color) in request.color_preferences.iter().enumerate() {
        if color.trim().is_empty() {
            return Err(ValidationError::Invalid {
                field: "colorPreferences".to_string(),
                reason: format!("entry {} is empty", i),
            });
        }
    }

    Ok(())
}

/// Validate an element regeneration request
pub fn validate_regenerate_request(
    request: &RegenerateElementRequest,
) -> Result<(), ValidationError> {
    if request.concept_id <= 0 {
        return Err(ValidationError::Invalid {
            field: "conceptId".to_string(),
            reason: "must be a positive identifier".to_string(),
        });
    }

    Ok(())
}
