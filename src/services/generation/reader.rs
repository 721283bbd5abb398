//! Streaming consumption of generation responses.
//!
//! The generation endpoint streams its response as chunked text. Well-behaved
//! upstreams emit one self-contained JSON object per chunk (the fast path),
//! but the final result object routinely spans many chunks and some servers
//! interleave plain-text progress markers. The reader absorbs every chunk
//! into a session buffer, classifies whatever parses in isolation, keeps the
//! caller's progress display moving during silent stretches, and falls back
//! to recovery over the whole buffer once the stream ends.

use super::recovery;
use crate::errors::{MindToEyeError, MindToEyeResult};
use crate::observability;
use bytes::Bytes;
use futures::{Stream, StreamExt};
use serde_json::Value;

/// Callback invoked with progress percentages during stream consumption.
///
/// Values are integers in `0..=100` and never decrease within one call to
/// [`StreamingResultReader::consume`]. A successful resolution is always
/// preceded by a `100`.
pub type ProgressCallback = Box<dyn FnMut(u8) + Send>;

/// Progress reported when the first processing signal arrives
const FIRST_RESPONSE_PROGRESS: u8 = 10;

/// The artificial ramp never climbs past this; only explicit signals and
/// terminal completion may exceed it
const RAMP_CEILING: u8 = 90;

/// One recognized JSON fragment from the stream
enum Fragment {
    /// `{"status":"processing"}` — generation has started
    Processing,
    /// `{"status":"progress","progress":n}` — explicit progress signal
    Progress(f64),
    /// A fragment carrying the final concept, wrapped or bare
    Complete(Value),
    /// `{"status":"error"}` / `{"success":false}` — upstream failure
    Error(String),
    /// Valid JSON of no recognized shape; expected noise, ignored
    Other,
}

/// Consumes a chunked generation response and produces the final concept.
///
/// Owned by exactly one in-flight request: created when the request is
/// issued, mutated chunk by chunk, discarded when the stream ends. Dropping
/// the pending `consume` future cancels consumption and releases the
/// underlying response stream; no further progress callbacks fire.
pub struct StreamingResultReader {
    on_progress: Option<ProgressCallback>,
    buffer: String,
    last_progress: u8,
    first_response_seen: bool,
}

impl StreamingResultReader {
    /// Create a reader, optionally wiring a progress callback
    pub fn new(on_progress: Option<ProgressCallback>) -> Self {
        Self {
            on_progress,
            buffer: String::new(),
            last_progress: 0,
            first_response_seen: false,
        }
    }

    /// Consume the response stream to completion.
    ///
    /// Returns the `brandOutput` payload as soon as a complete fragment
    /// carries one; the remainder of the stream is abandoned. If the stream
    /// ends first, the accumulated buffer goes through recovery. Transport
    /// errors from the stream and upstream-declared failures propagate as
    /// their own error kinds; neither is retried here.
    pub async fn consume<S>(mut self, mut stream: S) -> MindToEyeResult<Value>
    where
        S: Stream<Item = MindToEyeResult<Bytes>> + Unpin,
    {
        while let Some(chunk) = stream.next().await {
            let chunk = chunk?;
            let text = String::from_utf8_lossy(&chunk);
            // Recovery needs the full history, not just the latest chunk
            self.buffer.push_str(&text);

            match serde_json::from_str::<Value>(text.trim()) {
                Ok(value) => match classify(value) {
                    Fragment::Processing => {
                        if !self.first_response_seen {
                            self.first_response_seen = true;
                            self.report(FIRST_RESPONSE_PROGRESS, true);
                        }
                    }
                    Fragment::Progress(value) => {
                        self.report(normalize_percent(value), true);
                    }
                    Fragment::Complete(output) => {
                        self.report(100, true);
                        return Ok(output);
                    }
                    Fragment::Error(message) => {
                        return Err(MindToEyeError::Generation { message });
                    }
                    Fragment::Other => {}
                },
                // Partial JSON is expected mid-stream, not an error
                Err(_) => {
                    if let Some(value) = find_embedded_progress(&text) {
                        self.report(normalize_percent(value), true);
                    } else if self.last_progress < RAMP_CEILING {
                        let next = self.last_progress + 1;
                        self.report(next, false);
                    }
                }
            }
        }

        // Stream ended without a fast-path result
        self.report(100, true);
        observability::log_recovery("stream-end", self.buffer.len());
        recovery::recover_brand_output(&self.buffer)
    }

    /// Report progress, max-ed against the last reported value so the
    /// sequence the caller sees never decreases.
    fn report(&mut self, percent: u8, explicit: bool) {
        let next = percent.min(100).max(self.last_progress);
        self.last_progress = next;
        observability::log_stream_progress(next, explicit);
        if let Some(callback) = self.on_progress.as_mut() {
            callback(next);
        }
    }
}

/// Classify a fragment that parsed as standalone JSON
fn classify(value: Value) -> Fragment {
    let Value::Object(mut map) = value else {
        return Fragment::Other;
    };

    // Explicit upstream failure, in either call shape
    if map.get("success").and_then(Value::as_bool) == Some(false)
        || map.get("status").and_then(Value::as_str) == Some("error")
    {
        let message = map
            .get("message")
            .and_then(Value::as_str)
            .or_else(|| map.get("error").and_then(Value::as_str))
            .unwrap_or("generation failed")
            .to_string();
        return Fragment::Error(message);
    }

    match map.get("status").and_then(Value::as_str) {
        Some("processing") => Fragment::Processing,
        Some("progress") => match map.get("progress").and_then(Value::as_f64) {
            Some(value) => Fragment::Progress(value),
            None => Fragment::Other,
        },
        Some("complete") => {
            if map.get("success").and_then(Value::as_bool) == Some(true) {
                match map.remove("brandOutput") {
                    Some(output) => Fragment::Complete(output),
                    None => Fragment::Other,
                }
            } else {
                Fragment::Other
            }
        }
        Some(_) => Fragment::Other,
        // Both call shapes must be accepted: some upstreams send the
        // result without a status wrapper
        None => match map.remove("brandOutput") {
            Some(output) => Fragment::Complete(output),
            None => Fragment::Other,
        },
    }
}

/// Normalize a progress number to integer percent.
///
/// The Flask backend reports fractions in `(0, 1]`; the Node backend
/// reports integer percentages. Out-of-range values are clamped.
fn normalize_percent(value: f64) -> u8 {
    let scaled = if value > 0.0 && value <= 1.0 {
        value * 100.0
    } else {
        value
    };
    scaled.clamp(0.0, 100.0).round() as u8
}

/// Look for a `progress` numeral embedded in non-JSON chunk text.
///
/// Handles servers that interleave plain progress markers with the result
/// document. Only the latest occurrence in the chunk counts.
fn find_embedded_progress(text: &str) -> Option<f64> {
    let key = text.rfind("\"progress\"")?;
    let rest = text[key + "\"progress\"".len()..].trim_start();
    let rest = rest.strip_prefix(':')?.trim_start();

    let end = rest
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    rest[..end].parse().ok()
}
