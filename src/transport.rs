//! HTTP transport layer

use crate::errors::{MindToEyeError, MindToEyeResult};
use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use http::HeaderMap;
use reqwest::Client;
use std::time::Duration;

/// HTTP transport abstraction for testability
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Execute a buffered HTTP request
    async fn execute(
        &self,
        method: http::Method,
        url: String,
        headers: HeaderMap,
        body: Option<Vec<u8>>,
    ) -> MindToEyeResult<HttpResponse>;

    /// Execute a streaming HTTP request, returning the response body as a
    /// sequence of byte chunks in arrival order
    async fn execute_stream(
        &self,
        method: http::Method,
        url: String,
        headers: HeaderMap,
        body: Option<Vec<u8>>,
    ) -> MindToEyeResult<Box<dyn Stream<Item = MindToEyeResult<Bytes>> + Send + Unpin>>;
}

/// HTTP response
pub struct HttpResponse {
    /// HTTP status code
    pub status: u16,
    /// Response headers
    pub headers: HeaderMap,
    /// Response body
    pub body: Vec<u8>,
}

/// Reqwest-based HTTP transport implementation
pub struct ReqwestHttpTransport {
    client: Client,
}

impl ReqwestHttpTransport {
    /// Create a new transport with the given request timeout.
    ///
    /// The timeout covers the whole request, streaming reads included;
    /// there is no separate per-chunk timer.
    pub fn new(timeout: Duration) -> MindToEyeResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(20)
            .build()
            .map_err(|e| MindToEyeError::Configuration {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self { client })
    }

    fn map_http_error(&self, status: u16, body: &[u8]) -> MindToEyeError {
        let body_str = String::from_utf8_lossy(body).to_string();
        match status {
            401 | 403 => MindToEyeError::Authentication {
                message: format!("Authentication failed: {}", body_str),
            },
            _ => MindToEyeError::Api {
                status,
                message: body_str,
            },
        }
    }
}

#[async_trait]
impl HttpTransport for ReqwestHttpTransport {
    async fn execute(
        &self,
        method: http::Method,
        url: String,
        headers: HeaderMap,
        body: Option<Vec<u8>>,
    ) -> MindToEyeResult<HttpResponse> {
        let mut request = self.client.request(
            reqwest::Method::from_bytes(method.as_str().as_bytes()).map_err(|_| {
                MindToEyeError::Internal {
                    message: format!("Unsupported HTTP method: {}", method),
                }
            })?,
            &url,
        );

        for (name, value) in headers.iter() {
            request = request.header(name.as_str(), value.as_bytes());
        }

        if let Some(body_data) = body {
            request = request.body(body_data);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();
        let response_headers = response.headers().clone();
        let body = response.bytes().await?;

        Ok(HttpResponse {
            status,
            headers: response_headers,
            body: body.to_vec(),
        })
    }

    async fn execute_stream(
        &self,
        method: http::Method,
        url: String,
        headers: HeaderMap,
        body: Option<Vec<u8>>,
    ) -> MindToEyeResult<Box<dyn Stream<Item = MindToEyeResult<Bytes>> + Send + Unpin>> {
        let mut request = self.client.request(
            reqwest::Method::from_bytes(method.as_str().as_bytes()).map_err(|_| {
                MindToEyeError::Internal {
                    message: format!("Unsupported HTTP method: {}", method),
                }
            })?,
            &url,
        );

        for (name, value) in headers.iter() {
            request = request.header(name.as_str(), value.as_bytes());
        }

        if let Some(body_data) = body {
            request = request.body(body_data);
        }

        let response = request.send().await?;
        let status = response.status().as_u16();

        // A non-success status is a request failure, not stream data
        if !(200..300).contains(&status) {
            let body = response.bytes().await?;
            return Err(self.map_http_error(status, &body));
        }

        let stream = response.bytes_stream();
        let mapped_stream = futures::stream::StreamExt::map(stream, |result| {
            result.map_err(|e| MindToEyeError::Transport {
                message: format!("Stream read failed: {}", e),
            })
        });

        Ok(Box::new(Box::pin(mapped_stream)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_transport_creation() {
        let transport = ReqwestHttpTransport::new(Duration::from_secs(30));
        assert!(transport.is_ok());
    }

    #[test]
    fn test_map_http_error_authentication() {
        let transport = ReqwestHttpTransport::new(Duration::from_secs(30)).unwrap();
        let err = transport.map_http_error(401, b"invalid token");
        assert!(matches!(err, MindToEyeError::Authentication { .. }));
    }

    #[test]
    fn test_map_http_error_api() {
        let transport = ReqwestHttpTransport::new(Duration::from_secs(30)).unwrap();
        let err = transport.map_http_error(500, b"boom");
        match err {
            MindToEyeError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "boom");
            }
            e => panic!("Expected API error, got: {:?}", e),
        }
    }
}
