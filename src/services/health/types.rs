//! Types for the health check service

use serde::{Deserialize, Serialize};

/// Availability of the upstream providers behind the generation API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct UpstreamAvailability {
    /// Whether the Anthropic client is configured
    #[serde(default)]
    pub anthropic: bool,
    /// Whether the OpenAI client is configured
    #[serde(default)]
    pub openai: bool,
    /// Whether the Replicate client is configured
    #[serde(default)]
    pub replicate: bool,
}

/// Response of the health endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Overall API status ("ok" when healthy)
    pub status: String,
    /// Per-provider availability
    #[serde(default)]
    pub services: UpstreamAvailability,
}

impl HealthStatus {
    /// True if the API reported itself healthy
    pub fn is_ok(&self) -> bool {
        self.status == "ok"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_deserialization() {
        let json = r#"{"status":"ok","services":{"anthropic":true,"openai":false,"replicate":true}}"#;
        let status: HealthStatus = serde_json::from_str(json).unwrap();

        assert!(status.is_ok());
        assert!(status.services.anthropic);
        assert!(!status.services.openai);
        assert!(status.services.replicate);
    }

    #[test]
    fn test_health_status_missing_services_defaults() {
        let status: HealthStatus = serde_json::from_str(r#"{"status":"degraded"}"#).unwrap();
        assert!(!status.is_ok());
        assert!(!status.services.anthropic);
    }
}
