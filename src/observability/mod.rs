//! Observability support: structured logging configuration and the log
//! helpers used by the services.

mod logging;

pub use logging::{
    log_error, log_recovery, log_request, log_stream_progress, LogFormat, LogLevel,
    LoggingConfig,
};
