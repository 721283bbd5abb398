//! Error types for the MindToEye integration

use thiserror::Error;

/// Result type alias for MindToEye operations
pub type MindToEyeResult<T> = Result<T, MindToEyeError>;

/// Main error type for the MindToEye API client.
///
/// All errors are terminal for the call that produced them — the client
/// never retries internally. Retry policy belongs to the caller.
#[derive(Debug, Error)]
pub enum MindToEyeError {
    /// Configuration error (invalid settings, missing required fields)
    #[error("Configuration error: {message}")]
    Configuration {
        /// Description of the configuration issue
        message: String,
    },

    /// Authentication error (missing or malformed access token)
    #[error("Authentication error: {message}")]
    Authentication {
        /// Description of the authentication issue
        message: String,
    },

    /// Validation error (invalid request parameters)
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Non-success HTTP status from the MindToEye API
    #[error("API error: {status} - {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body text
        message: String,
    },

    /// Transport error: the stream could not be opened or broke mid-read
    #[error("Transport error: {message}")]
    Transport {
        /// Description of the transport issue
        message: String,
    },

    /// Request timeout at the transport layer
    #[error("Request timeout")]
    Timeout,

    /// The upstream generation service explicitly signaled failure
    #[error("Generation failed: {message}")]
    Generation {
        /// Human-readable message provided by the upstream, verbatim
        message: String,
    },

    /// The stream completed but no recognizable result could be extracted
    #[error("Parse error: {message}")]
    Parse {
        /// Generic user-facing message advising retry
        message: String,
        /// Bounded preview of the received text, for diagnostics
        preview: String,
    },

    /// Serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization {
        /// Description of the serialization issue
        message: String,
    },

    /// Internal error (unexpected conditions, library bugs)
    #[error("Internal error: {message}")]
    Internal {
        /// Description of the internal issue
        message: String,
    },
}

impl MindToEyeError {
    /// Returns true if retrying the request could plausibly succeed.
    ///
    /// The client never retries on its own; this helps callers decide
    /// whether to surface a retry affordance.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            MindToEyeError::Transport { .. }
                | MindToEyeError::Timeout
                | MindToEyeError::Parse { .. }
                | MindToEyeError::Api {
                    status: 500..=599,
                    ..
                }
        )
    }
}

// Conversions from common error types
impl From<reqwest::Error> for MindToEyeError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            MindToEyeError::Timeout
        } else if err.is_connect() {
            MindToEyeError::Transport {
                message: format!("Connection failed: {}", err),
            }
        } else {
            MindToEyeError::Transport {
                message: format!("Request failed: {}", err),
            }
        }
    }
}

impl From<serde_json::Error> for MindToEyeError {
    fn from(err: serde_json::Error) -> Self {
        MindToEyeError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<url::ParseError> for MindToEyeError {
    fn from(err: url::ParseError) -> Self {
        MindToEyeError::Configuration {
            message: format!("Invalid URL: {}", err),
        }
    }
}

/// Validation error types
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field was missing or empty
    #[error("Field '{field}' is required")]
    Required {
        /// Name of the missing field
        field: String,
    },

    /// A field carried an invalid value
    #[error("Field '{field}' is invalid: {reason}")]
    Invalid {
        /// Name of the invalid field
        field: String,
        /// Why the value was rejected
        reason: String,
    },

    /// A field value fell outside its allowed range
    #[error("Value out of range for '{field}': {reason}")]
    OutOfRange {
        /// Name of the out-of-range field
        field: String,
        /// Description of the allowed range
        reason: String,
    },
}
