//! Authentication for the MindToEye API.
//!
//! The API sits behind Supabase Auth; this client only attaches the caller's
//! access token as a bearer header. Token acquisition and refresh are the
//! caller's concern.

use http::HeaderMap;
use secrecy::{ExposeSecret, SecretString};

/// Trait for managing authentication headers
pub trait AuthManager: Send + Sync {
    /// Add authentication headers to a request
    fn add_auth_headers(&self, headers: &mut HeaderMap);

    /// Validate the configured credentials
    fn validate_credentials(&self) -> Result<(), String>;
}

/// Bearer token authentication manager
pub struct BearerAuthManager {
    access_token: SecretString,
}

impl BearerAuthManager {
    /// Create a new bearer authentication manager
    pub fn new(access_token: SecretString) -> Self {
        Self { access_token }
    }
}

impl AuthManager for BearerAuthManager {
    fn add_auth_headers(&self, headers: &mut HeaderMap) {
        if let Ok(value) =
            format!("Bearer {}", self.access_token.expose_secret()).parse()
        {
            headers.insert("authorization", value);
        }

        headers.insert("content-type", "application/json".parse().unwrap());
        headers.insert("accept", "application/json".parse().unwrap());
    }

    fn validate_credentials(&self) -> Result<(), String> {
        let token = self.access_token.expose_secret();

        if token.is_empty() {
            return Err("Access token cannot be empty".to_string());
        }

        if token.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err("Access token contains invalid characters".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_auth_manager_headers() {
        let manager = BearerAuthManager::new(SecretString::new("token-123".to_string()));

        let mut headers = HeaderMap::new();
        manager.add_auth_headers(&mut headers);

        assert_eq!(headers.get("authorization").unwrap(), "Bearer token-123");
        assert_eq!(headers.get("content-type").unwrap(), "application/json");
        assert_eq!(headers.get("accept").unwrap(), "application/json");
    }

    #[test]
    fn test_validate_credentials() {
        let manager = BearerAuthManager::new(SecretString::new("token-123".to_string()));
        assert!(manager.validate_credentials().is_ok());

        let empty = BearerAuthManager::new(SecretString::new(String::new()));
        assert!(empty.validate_credentials().is_err());

        let with_space = BearerAuthManager::new(SecretString::new("bad token".to_string()));
        assert!(with_space.validate_credentials().is_err());
    }
}
