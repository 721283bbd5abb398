//! Configuration types for the MindToEye API client.

use crate::errors::{MindToEyeError, MindToEyeResult};
use crate::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};
use secrecy::SecretString;
use std::time::Duration;

/// Configuration for the MindToEye API client.
#[derive(Clone)]
pub struct MindToEyeConfig {
    /// Supabase access token attached to each request
    pub access_token: SecretString,
    /// Base URL of the MindToEye API
    pub base_url: String,
    /// Request timeout (covers the whole streamed response)
    pub timeout: Duration,
}

impl MindToEyeConfig {
    /// Creates a new configuration builder
    pub fn builder() -> MindToEyeConfigBuilder {
        MindToEyeConfigBuilder::default()
    }

    /// Creates a configuration from environment variables
    pub fn from_env() -> MindToEyeResult<Self> {
        let access_token = std::env::var("MINDTOEYE_ACCESS_TOKEN").map_err(|_| {
            MindToEyeError::Configuration {
                message: "MINDTOEYE_ACCESS_TOKEN environment variable not set".to_string(),
            }
        })?;

        let base_url = std::env::var("MINDTOEYE_BASE_URL")
            .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let timeout_secs = std::env::var("MINDTOEYE_TIMEOUT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        Ok(Self {
            access_token: SecretString::new(access_token),
            base_url,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Builder for MindToEyeConfig
#[derive(Default)]
pub struct MindToEyeConfigBuilder {
    access_token: Option<SecretString>,
    base_url: Option<String>,
    timeout: Option<Duration>,
}

impl MindToEyeConfigBuilder {
    /// Sets the access token
    pub fn access_token(mut self, access_token: SecretString) -> Self {
        self.access_token = Some(access_token);
        self
    }

    /// Sets the base URL
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the configuration
    pub fn build(self) -> MindToEyeResult<MindToEyeConfig> {
        let access_token = self.access_token.ok_or_else(|| MindToEyeError::Configuration {
            message: "Access token is required".to_string(),
        })?;

        Ok(MindToEyeConfig {
            access_token,
            base_url: self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            timeout: self
                .timeout
                .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_defaults() {
        let config = MindToEyeConfig::builder()
            .access_token(SecretString::new("token".to_string()))
            .build()
            .unwrap();

        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_config_builder_custom() {
        let config = MindToEyeConfig::builder()
            .access_token(SecretString::new("token".to_string()))
            .base_url("https://mindtoeye.example.com")
            .timeout(Duration::from_secs(120))
            .build()
            .unwrap();

        assert_eq!(config.base_url, "https://mindtoeye.example.com");
        assert_eq!(config.timeout, Duration::from_secs(120));
    }

    #[test]
    fn test_config_builder_requires_token() {
        let result = MindToEyeConfig::builder().build();
        assert!(matches!(
            result,
            Err(MindToEyeError::Configuration { .. })
        ));
    }
}
