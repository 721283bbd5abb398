//! Client interface and implementation for the MindToEye API.

use crate::auth::{AuthManager, BearerAuthManager};
use crate::config::MindToEyeConfig;
use crate::errors::{MindToEyeError, MindToEyeResult};
use crate::services::generation::{GenerationService, GenerationServiceImpl};
use crate::services::health::{HealthService, HealthServiceImpl};
use crate::transport::{HttpTransport, ReqwestHttpTransport};
use std::sync::Arc;
use url::Url;

/// Trait defining the main MindToEye client interface
pub trait MindToEyeClient: Send + Sync {
    /// Access the brand concept generation service
    fn generation(&self) -> Arc<dyn GenerationService>;

    /// Access the health check service
    fn health(&self) -> Arc<dyn HealthService>;
}

/// Implementation of the MindToEye client
pub struct MindToEyeClientImpl {
    config: Arc<MindToEyeConfig>,
    generation: Arc<GenerationServiceImpl>,
    health: Arc<HealthServiceImpl>,
}

impl MindToEyeClientImpl {
    /// Create a new client from configuration
    pub fn new(config: MindToEyeConfig) -> MindToEyeResult<Self> {
        let config = Arc::new(config);

        let transport =
            Arc::new(ReqwestHttpTransport::new(config.timeout)?) as Arc<dyn HttpTransport>;

        let auth_manager = Arc::new(BearerAuthManager::new(config.access_token.clone()))
            as Arc<dyn AuthManager>;

        auth_manager
            .validate_credentials()
            .map_err(|e| MindToEyeError::Configuration {
                message: format!("Invalid credentials: {}", e),
            })?;

        let base_url = Url::parse(&config.base_url)?;

        let generation = Arc::new(GenerationServiceImpl::new(
            transport.clone(),
            auth_manager.clone(),
            base_url.clone(),
        ));

        let health = Arc::new(HealthServiceImpl::new(
            transport,
            auth_manager,
            base_url,
        ));

        Ok(Self {
            config,
            generation,
            health,
        })
    }

    /// Create a new client with custom transport and auth manager (for testing)
    #[cfg(test)]
    pub fn with_dependencies(
        config: MindToEyeConfig,
        transport: Arc<dyn HttpTransport>,
        auth_manager: Arc<dyn AuthManager>,
    ) -> MindToEyeResult<Self> {
        let base_url = Url::parse(&config.base_url)?;

        let generation = Arc::new(GenerationServiceImpl::new(
            transport.clone(),
            auth_manager.clone(),
            base_url.clone(),
        ));

        let health = Arc::new(HealthServiceImpl::new(transport, auth_manager, base_url));

        Ok(Self {
            config: Arc::new(config),
            generation,
            health,
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &MindToEyeConfig {
        &self.config
    }
}

impl MindToEyeClient for MindToEyeClientImpl {
    fn generation(&self) -> Arc<dyn GenerationService> {
        self.generation.clone()
    }

    fn health(&self) -> Arc<dyn HealthService> {
        self.health.clone()
    }
}

/// Create a new MindToEye client from configuration
pub fn create_client(config: MindToEyeConfig) -> MindToEyeResult<MindToEyeClientImpl> {
    MindToEyeClientImpl::new(config)
}

/// Create a new MindToEye client from environment variables
pub fn create_client_from_env() -> MindToEyeResult<MindToEyeClientImpl> {
    let config = MindToEyeConfig::from_env()?;
    create_client(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    #[test]
    fn test_create_client() {
        let config = MindToEyeConfig::builder()
            .access_token(SecretString::new("token-123".to_string()))
            .build()
            .unwrap();

        let client = create_client(config);
        assert!(client.is_ok());
    }

    #[test]
    fn test_create_client_invalid_token() {
        let config = MindToEyeConfig::builder()
            .access_token(SecretString::new(String::new()))
            .build()
            .unwrap();

        let client = create_client(config);
        assert!(matches!(
            client,
            Err(MindToEyeError::Configuration { .. })
        ));
    }

    #[test]
    fn test_create_client_invalid_base_url() {
        let config = MindToEyeConfig::builder()
            .access_token(SecretString::new("token-123".to_string()))
            .base_url("not a url")
            .build()
            .unwrap();

        let client = create_client(config);
        assert!(client.is_err());
    }

    #[tokio::test]
    async fn test_client_service_accessors() {
        let config = MindToEyeConfig::builder()
            .access_token(SecretString::new("token-123".to_string()))
            .build()
            .unwrap();

        let transport = Arc::new(crate::mocks::MockHttpTransport::new());
        let auth_manager = Arc::new(crate::mocks::MockAuthManager::new());
        let client =
            MindToEyeClientImpl::with_dependencies(config, transport, auth_manager).unwrap();

        let _generation = client.generation();
        let _health = client.health();
    }
}
