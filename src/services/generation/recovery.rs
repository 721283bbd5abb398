//! End-of-stream recovery over the accumulated response buffer.
//!
//! The generation upstream does not guarantee chunk-aligned JSON: the final
//! result may span many chunks, arrive wrapped in a markdown code fence, or
//! carry small syntax defects. Once the stream ends without a fast-path
//! result, the routines here extract the last complete result object from
//! the full buffer, using an explicit scanner that distinguishes incomplete
//! input from malformed input instead of pattern matching.

use crate::errors::{MindToEyeError, MindToEyeResult};
use crate::observability;
use serde_json::Value;

/// Key under which the upstream wraps the generated concept
const RESULT_KEY: &str = "\"brandOutput\"";

/// Upper bound on the diagnostic preview attached to parse failures
const PREVIEW_LIMIT: usize = 240;

/// Outcome of scanning for a single JSON object at a given offset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Scan {
    /// A balanced object ends at this byte offset (exclusive)
    Complete(usize),
    /// The buffer ended before the object closed; more input was needed
    Incomplete,
    /// No object opens at this offset
    Malformed,
}

/// Scan for one brace-balanced JSON object starting at `start`.
///
/// Tracks string and escape state so braces inside string literals do not
/// affect the depth count. Works on bytes: multi-byte UTF-8 sequences never
/// contain ASCII and cannot be mistaken for structural characters.
pub(crate) fn scan_object(text: &str, start: usize) -> Scan {
    let bytes = text.as_bytes();
    if bytes.get(start) != Some(&b'{') {
        return Scan::Malformed;
    }

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escape = false;

    for (i, &b) in bytes.iter().enumerate().skip(start) {
        if in_string {
            if escape {
                escape = false;
            } else if b == b'\\' {
                escape = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Scan::Complete(i + 1);
                }
            }
            _ => {}
        }
    }

    Scan::Incomplete
}

/// Collect the byte ranges of all balanced top-level object candidates.
fn candidate_ranges(text: &str) -> Vec<std::ops::Range<usize>> {
    let bytes = text.as_bytes();
    let mut ranges = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'{' {
            match scan_object(text, i) {
                Scan::Complete(end) => {
                    ranges.push(i..end);
                    i = end;
                }
                // The tail is a fragment; nothing after it can complete
                Scan::Incomplete => break,
                Scan::Malformed => i += 1,
            }
        } else {
            i += 1;
        }
    }

    ranges
}

/// Extract the generated concept from the full accumulated buffer.
///
/// Strategies, in order: balanced-object scan over the raw text (candidates
/// tried last-to-first), marker-anchored extraction with one textual repair
/// pass, then both again over the interior of a markdown code fence if one
/// is present. Exhaustion is a parse failure carrying a bounded preview of
/// the received text.
pub(crate) fn recover_brand_output(raw: &str) -> MindToEyeResult<Value> {
    if let Some(output) = recover_from(raw) {
        return Ok(output);
    }

    if let Some(inner) = strip_code_fence(raw) {
        observability::log_recovery("code-fence", inner.len());
        if let Some(output) = recover_from(&inner) {
            return Ok(output);
        }
    }

    Err(MindToEyeError::Parse {
        message: "could not extract a generation result from the response stream; \
                  please try again"
            .to_string(),
        preview: bounded_preview(raw),
    })
}

fn recover_from(text: &str) -> Option<Value> {
    // Later candidates are more likely to be the final, complete object
    observability::log_recovery("balanced-scan", text.len());
    let ranges = candidate_ranges(text);
    for range in ranges.iter().rev() {
        if let Ok(value) = serde_json::from_str::<Value>(&text[range.clone()]) {
            if let Some(output) = take_brand_output(value) {
                return Some(output);
            }
        }
    }

    observability::log_recovery("marker-anchored", text.len());
    marker_candidate(text)
}

/// Pull the wrapped concept out of a parsed candidate, if present.
///
/// Candidates without the result key are discarded, never errors.
fn take_brand_output(value: Value) -> Option<Value> {
    match value {
        Value::Object(mut map) => map.remove("brandOutput"),
        _ => None,
    }
}

/// Anchor on the last occurrence of the result key and brace-count forward
/// from the enclosing wrapper object.
fn marker_candidate(text: &str) -> Option<Value> {
    let marker = text.rfind(RESULT_KEY)?;
    let open = text[..marker].rfind('{')?;

    let candidate = match scan_object(text, open) {
        Scan::Complete(end) => &text[open..end],
        // Unterminated wrapper: repair may still salvage the tail
        Scan::Incomplete | Scan::Malformed => &text[open..],
    };

    if let Ok(value) = serde_json::from_str::<Value>(candidate) {
        if let Some(output) = take_brand_output(value) {
            return Some(output);
        }
    }

    // One best-effort textual repair pass, then give up
    let repaired = repair_json(candidate);
    serde_json::from_str::<Value>(&repaired)
        .ok()
        .and_then(take_brand_output)
}

/// Best-effort textual repairs for near-JSON produced by the upstream:
/// smart quotes are normalized and trailing commas before a closing brace
/// or bracket are dropped. String contents are preserved.
pub(crate) fn repair_json(text: &str) -> String {
    let normalized: String = text
        .chars()
        .map(|c| match c {
            '\u{201C}' | '\u{201D}' | '\u{201E}' => '"',
            '\u{2018}' | '\u{2019}' => '\'',
            other => other,
        })
        .collect();

    let chars: Vec<char> = normalized.chars().collect();
    let mut out = String::with_capacity(normalized.len());
    let mut in_string = false;
    let mut escape = false;

    for (i, &c) in chars.iter().enumerate() {
        if in_string {
            out.push(c);
            if escape {
                escape = false;
            } else if c == '\\' {
                escape = true;
            } else if c == '"' {
                in_string = false;
            }
            continue;
        }
        match c {
            '"' => {
                in_string = true;
                out.push(c);
            }
            ',' => {
                let next = chars[i + 1..].iter().copied().find(|c| !c.is_whitespace());
                if !matches!(next, Some('}') | Some(']')) {
                    out.push(c);
                }
            }
            other => out.push(other),
        }
    }

    out
}

/// Return the interior of a markdown code fence, if the buffer carries one.
fn strip_code_fence(text: &str) -> Option<String> {
    let start = text
        .find("```json")
        .map(|p| p + "```json".len())
        .or_else(|| text.find("```").map(|p| p + "```".len()))?;

    let rest = &text[start..];
    let end = rest.rfind("```").unwrap_or(rest.len());
    Some(rest[..end].to_string())
}

/// Truncate raw stream text for inclusion in error payloads.
pub(crate) fn bounded_preview(raw: &str) -> String {
    let mut preview: String = raw.chars().take(PREVIEW_LIMIT).collect();
    if preview.len() < raw.len() {
        preview.push_str("...");
    }
    preview
}
