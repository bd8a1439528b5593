//! Relay error types
//!
//! Per-event failures. None of them is retried; the relay logs and drops
//! the event.

use relay_core::ResolveError;
use thiserror::Error;

/// Failure delivering a payload to the webhook
#[derive(Debug, Error)]
pub enum DeliveryError {
    /// Webhook answered with a non-success status
    #[error("Webhook responded with status {status}: {body}")]
    Status { status: u16, body: String },

    /// Request never completed (connect, TLS, I/O)
    #[error("Webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Any failure while relaying one event
#[derive(Debug, Error)]
pub enum RelayError {
    /// Fetching a partial object failed
    #[error("Failed to resolve reaction: {0}")]
    Resolve(#[from] ResolveError),

    /// Sending the payload failed
    #[error("Failed to deliver payload: {0}")]
    Delivery(#[from] DeliveryError),
}

impl RelayError {
    /// Get error code for log output
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Resolve(_) => "RESOLVE_ERROR",
            Self::Delivery(_) => "DELIVERY_ERROR",
        }
    }
}

/// Result type for relay operations
pub type RelayResult<T> = Result<T, RelayError>;
