//! Generation service implementation

use super::reader::{ProgressCallback, StreamingResultReader};
use super::types::{ApiErrorBody, BrandInput, RegenerateElementRequest};
use super::validation::{validate_brand_input, validate_regenerate_request};
use crate::auth::AuthManager;
use crate::errors::{MindToEyeError, MindToEyeResult};
use crate::observability;
use crate::transport::HttpTransport;
use async_trait::async_trait;
use http::{HeaderMap, Method};
use serde_json::Value;
use std::sync::Arc;
use url::Url;

/// Generation service trait for testability
#[async_trait]
pub trait GenerationService: Send + Sync {
    /// Generate a brand concept, buffered.
    ///
    /// Returns the generated concept as an opaque JSON value.
    async fn generate(&self, request: BrandInput) -> MindToEyeResult<Value>;

    /// Generate a brand concept over the streaming endpoint.
    ///
    /// `on_progress` is invoked with non-decreasing percentages while the
    /// response streams in; the final value before return is always 100.
    async fn generate_stream(
        &self,
        request: BrandInput,
        on_progress: Option<ProgressCallback>,
    ) -> MindToEyeResult<Value>;

    /// Regenerate a single element of a stored concept.
    async fn regenerate_element(
        &self,
        request: RegenerateElementRequest,
    ) -> MindToEyeResult<Value>;
}

/// Implementation of the generation service
pub struct GenerationServiceImpl {
    transport: Arc<dyn HttpTransport>,
    auth_manager: Arc<dyn AuthManager>,
    base_url: Url,
}

impl GenerationServiceImpl {
    /// Create a new generation service
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

    /// Parse API error from response
    fn parse_api_error(&self, status: u16, body: &[u8]) -> MindToEyeError {
        if let Ok(error_body) = serde_json::from_slice::<ApiErrorBody>(body) {
            MindToEyeError::Api {
                status,
                message: error_body.error,
            }
        } else {
            MindToEyeError::Api {
                status,
                message: String::from_utf8_lossy(body).to_string(),
            }
        }
    }

    fn join_url(&self, path: &str) -> MindToEyeResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| MindToEyeError::Configuration {
                message: format!("Invalid URL: {}", e),
            })
    }
}

#[async_trait]
impl GenerationService for GenerationServiceImpl {
    async fn generate(&self, request: BrandInput) -> MindToEyeResult<Value> {
        // Validate request
        validate_brand_input(&request)?;

        // Build URL
        let url = self.join_url("/api/generate-concept")?;

        // Build headers
        let headers = self.build_headers();

        // Serialize request body
        let body = serde_json::to_vec(&request)?;

        observability::log_request("POST", "/api/generate-concept", false);

        // Execute request
        let response = self
            .transport
            .execute(Method::POST, url.to_string(), headers, Some(body))
            .await?;

        // Handle response
        if response.status == 200 {
            let output = serde_json::from_slice::<Value>(&response.body)?;
            Ok(output)
        } else {
            Err(self.parse_api_error(response.status, &response.body))
        }
    }

    async fn generate_stream(
        &self,
        request: BrandInput,
        on_progress: Option<ProgressCallback>,
    ) -> MindToEyeResult<Value> {
        // Validate request
        validate_brand_input(&request)?;

        // Build URL with the streaming toggle
        let mut url = self.join_url("/api/generate-concept")?;
        url.set_query(Some("stream=true"));

        // Build headers
        let headers = self.build_headers();

        // Serialize request body
        let body = serde_json::to_vec(&request)?;

        observability::log_request("POST", "/api/generate-concept?stream=true", true);

        // Open the streaming request
        let stream = self
            .transport
            .execute_stream(Method::POST, url.to_string(), headers, Some(body))
            .await?;

        // Hand the byte stream to the reader
        StreamingResultReader::new(on_progress).consume(stream).await
    }

    async fn regenerate_element(
        &self,
        request: RegenerateElementRequest,
    ) -> MindToEyeResult<Value> {
        // Validate request
        validate_regenerate_request(&request)?;

        // Build URL
        let url = self.join_url("/api/regenerate-element")?;

        // Build headers
        let headers = self.build_headers();

        // Serialize request body
        let body = serde_json::to_vec(&request)?;

        observability::log_request("POST", "/api/regenerate-element", false);

        // Execute request
        let response = self
            .transport
            .execute(Method::POST, url.to_string(), headers, Some(body))
            .await?;

        // Handle response
        if response.status == 200 {
            let element = serde_json::from_slice::<Value>(&response.body)?;
            Ok(element)
        } else {
            Err(self.parse_api_error(response.status, &response.body))
        }
    }
}
