//! Health check service
//!
//! Thin wrapper over the API health endpoint, useful for readiness probes
//! and for surfacing which upstream generation providers are configured.

mod service;
mod types;

pub use service::{HealthService, HealthServiceImpl};
pub use types::{HealthStatus, UpstreamAvailability};
