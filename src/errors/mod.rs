//! Error types for the MindToEye API client.
//!
//! The taxonomy separates transport failures (the stream could not be opened
//! or broke), upstream-declared generation failures, and parse failures
//! (the stream completed but no result could be extracted).

mod error;

pub use error::{MindToEyeError, MindToEyeResult, ValidationError};
