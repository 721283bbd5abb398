//! Health service implementation

use super::types::HealthStatus;
use crate::auth::AuthManager;
use crate::errors::{MindToEyeError, MindToEyeResult};
use crate::transport::HttpTransport;
use async_trait::async_trait;
use http::{HeaderMap, Method};
use std::sync::Arc;
use url::Url;

/// Health service trait for testability
#[async_trait]
pub trait HealthService: Send + Sync {
    /// Query the API health endpoint
    async fn check(&self) -> MindToEyeResult<HealthStatus>;
}

/// Implementation of the health service
pub struct HealthServiceImpl {
    transport: Arc<dyn HttpTransport>,
    auth_manager: Arc<dyn AuthManager>,
    base_url: Url,
}

impl HealthServiceImpl {
    /// Create a new health service
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        auth_manager: Arc<dyn AuthManager>,
        base_url: Url,
    ) -> Self {
        Self {
            transport,
            auth_manager,
            base_url,
        }
    }

    /// Build headers for a request
    fn build_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        self.auth_manager.add_auth_headers(&mut headers);
        headers
    }
}

#[async_trait]
impl HealthService for HealthServiceImpl {
    async fn check(&self) -> MindToEyeResult<HealthStatus> {
        // Build URL
        let url = self
            .base_url
            .join("/api/health")
            .map_err(|e| MindToEyeError::Configuration {
                message: format!("Invalid URL: {}", e),
            })?;

        // Build headers
        let headers = self.build_headers();

        // Execute request
        let response = self
            .transport
            .execute(Method::GET, url.to_string(), headers, None)
            .await?;

        // Handle response
        if response.status == 200 {
            let status = serde_json::from_slice::<HealthStatus>(&response.body)?;
            Ok(status)
        } else {
            Err(MindToEyeError::Api {
                status: response.status,
                message: String::from_utf8_lossy(&response.body).to_string(),
            })
        }
    }
}
