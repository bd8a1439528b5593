//! Application error types
//!
//! Top-level errors that end the process. Per-event failures never reach
//! this type: the relay logs and drops them.

use crate::config::ConfigError;

/// Application-wide error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    // Gateway errors
    #[error("Gateway error: {0}")]
    Gateway(String),

    // External service errors
    #[error("External service error: {0}")]
    ExternalService(String),
}

impl AppError {
    /// Get error code for log output
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Config(_) => "CONFIG_ERROR",
            Self::Gateway(_) => "GATEWAY_ERROR",
            Self::ExternalService(_) => "EXTERNAL_SERVICE_ERROR",
        }
    }
}

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;
