//! # MindToEye Brand Generation API Client
//!
//! Production-ready Rust client for the MindToEye brand-generation API.
//!
//! ## Features
//!
//! - Brand concept generation, buffered or streamed
//! - Incremental progress reporting over chunked responses, with recovery
//!   of results from partial, malformed, or fence-wrapped JSON streams
//! - Regeneration of individual concept elements (colors, typography,
//!   logo, tagline)
//! - Comprehensive error taxonomy (transport vs. generation vs. parse)
//! - Structured logging via `tracing`
//! - Secure credential handling with `SecretString`
//! - Type-safe request models with client-side validation
//! - Mock support for transport and auth seams
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use integrations_mindtoeye::{create_client, MindToEyeClient, MindToEyeConfig};
//! use integrations_mindtoeye::services::generation::{BrandInput, GenerationService};
//! use secrecy::SecretString;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = MindToEyeConfig::builder()
//!         .access_token(SecretString::new("eyJhbGciOi...".to_string()))
//!         .build()?;
//!
//!     let client = create_client(config)?;
//!
//!     let brief = BrandInput::new("Solstice Coffee")
//!         .with_industry("Food & Beverage");
//!
//!     let concept = client
//!         .generation()
//!         .generate_stream(brief, Some(Box::new(|pct| println!("{pct}%"))))
//!         .await?;
//!
//!     println!("{}", concept);
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! - `client` - Main client interface and factory functions
//! - `config` - Configuration types and builder
//! - `auth` - Authentication and header management
//! - `transport` - HTTP transport layer and response streaming
//! - `errors` - Error types and taxonomy
//! - `services::generation` - Concept generation, stream reader, recovery
//! - `services::health` - API health checks
//! - `observability` - Logging configuration
//! - `mocks` / `fixtures` - Test support

#![warn(missing_docs)]
#![warn(clippy::all)]

// Public modules
pub mod auth;
pub mod client;
pub mod config;
pub mod errors;
pub mod observability;
pub mod services;
pub mod transport;

// Development/testing modules
#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mocks;

// Re-exports for convenience
pub use auth::{AuthManager, BearerAuthManager};
pub use client::{create_client, create_client_from_env, MindToEyeClient, MindToEyeClientImpl};
pub use config::{MindToEyeConfig, MindToEyeConfigBuilder};
pub use errors::{MindToEyeError, MindToEyeResult, ValidationError};
pub use observability::{LogFormat, LogLevel, LoggingConfig};
pub use transport::{HttpResponse, HttpTransport, ReqwestHttpTransport};

// Service re-exports
pub use services::generation::{
    BrandInput, BrandValue, DesignStyle, ElementType, GenerationService,
    GenerationServiceImpl, ProgressCallback, RegenerateElementRequest,
    StreamingResultReader,
};
pub use services::health::{HealthService, HealthServiceImpl, HealthStatus, UpstreamAvailability};

/// The default MindToEye API base URL (local development server)
pub const DEFAULT_BASE_URL: &str = "http://localhost:5001";

/// The default request timeout (10 minutes; generation runs are long)
pub const DEFAULT_TIMEOUT_SECS: u64 = 600;
