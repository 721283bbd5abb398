//! Mock implementations for testing.
//!
//! Hand-rolled mocks of the transport and auth seams so services can be
//! tested without a network.

use crate::auth::AuthManager;
use crate::errors::{MindToEyeError, MindToEyeResult};
use crate::transport::{HttpResponse, HttpTransport};
use async_trait::async_trait;
use bytes::Bytes;
use futures::stream::{self, Stream};
use http::{HeaderMap, Method};
use std::sync::{Arc, Mutex};

/// Mock HTTP transport that replays configured responses and records every
/// request it receives.
pub struct MockHttpTransport {
    responses: Arc<Mutex<Vec<MindToEyeResult<HttpResponse>>>>,
    stream_responses: Arc<Mutex<Vec<MindToEyeResult<Vec<Vec<u8>>>>>>,
    requests: Arc<Mutex<Vec<(Method, String, HeaderMap, Option<Vec<u8>>)>>>,
}

impl MockHttpTransport {
    /// Create a new mock transport with no configured responses
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            stream_responses: Arc::new(Mutex::new(Vec::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a buffered response
    pub fn with_response(self, response: MindToEyeResult<HttpResponse>) -> Self {
        self.responses.lock().unwrap().push(response);
        self
    }

    /// Queue a streaming response delivered as the given chunks
    pub fn with_stream_response(self, chunks: Vec<Vec<u8>>) -> Self {
        self.stream_responses.lock().unwrap().push(Ok(chunks));
        self
    }

    /// Queue a streaming open failure
    pub fn with_stream_error(self, error: MindToEyeError) -> Self {
        self.stream_responses.lock().unwrap().push(Err(error));
        self
    }

    /// All requests executed against this transport, in order
    pub fn requests(&self) -> Vec<(Method, String, HeaderMap, Option<Vec<u8>>)> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockHttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn execute(
        &self,
        method: Method,
        url: String,
        headers: HeaderMap,
        body: Option<Vec<u8>>,
    ) -> MindToEyeResult<HttpResponse> {
        self.requests
            .lock()
            .unwrap()
            .push((method, url, headers, body));

        self.responses.lock().unwrap().pop().unwrap_or_else(|| {
            Err(MindToEyeError::Internal {
                message: "No mock response configured".to_string(),
            })
        })
    }

    async fn execute_stream(
        &self,
        method: Method,
        url: String,
        headers: HeaderMap,
        body: Option<Vec<u8>>,
    ) -> MindToEyeResult<Box<dyn Stream<Item = MindToEyeResult<Bytes>> + Send + Unpin>>
    {
        self.requests
            .lock()
            .unwrap()
            .push((method, url, headers, body));

        let chunks = self
            .stream_responses
            .lock()
            .unwrap()
            .pop()
            .unwrap_or_else(|| Ok(Vec::new()))?;

        let byte_stream = chunks
            .into_iter()
            .map(|c| Ok(Bytes::from(c)))
            .collect::<Vec<_>>();

        Ok(Box::new(Box::pin(stream::iter(byte_stream))))
    }
}

/// Mock auth manager attaching a fixed bearer token
pub struct MockAuthManager;

impl MockAuthManager {
    /// Create a new mock auth manager
    pub fn new() -> Self {
        Self
    }
}

impl Default for MockAuthManager {
    fn default() -> Self {
        Self::new()
    }
}

impl AuthManager for MockAuthManager {
    fn add_auth_headers(&self, headers: &mut HeaderMap) {
        headers.insert("authorization", "Bearer mock-token".parse().unwrap());
        headers.insert("content-type", "application/json".parse().unwrap());
    }

    fn validate_credentials(&self) -> Result<(), String> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_transport_replays_response() {
        let transport = MockHttpTransport::new().with_response(Ok(HttpResponse {
            status: 200,
            headers: HeaderMap::new(),
            body: b"ok".to_vec(),
        }));

        let response = transport
            .execute(
                Method::GET,
                "http://localhost:5001/api/health".to_string(),
                HeaderMap::new(),
                None,
            )
            .await
            .unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body, b"ok");
        assert_eq!(transport.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_mock_transport_unconfigured_is_internal_error() {
        let transport = MockHttpTransport::new();

        let result = transport
            .execute(
                Method::GET,
                "http://localhost:5001/api/health".to_string(),
                HeaderMap::new(),
                None,
            )
            .await;

        assert!(matches!(result, Err(MindToEyeError::Internal { .. })));
    }

    #[test]
    fn test_mock_auth_manager_headers() {
        let manager = MockAuthManager::new();
        let mut headers = HeaderMap::new();
        manager.add_auth_headers(&mut headers);

        assert_eq!(headers.get("authorization").unwrap(), "Bearer mock-token");
        assert_eq!(manager.validate_credentials(), Ok(()));
    }
}
