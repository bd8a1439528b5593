//! Errors raised while resolving partial objects

use thiserror::Error;

use crate::value_objects::Snowflake;

/// Failure to fetch the full data behind a partial reference
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("{resource} not found: {id}")]
    NotFound { resource: &'static str, id: Snowflake },

    #[error("Unauthorized: the token was rejected")]
    Unauthorized,

    #[error("Missing access to {resource} {id}")]
    Forbidden { resource: &'static str, id: Snowflake },

    #[error("Unexpected HTTP status {status}")]
    Http { status: u16 },

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl ResolveError {
    /// Check if this is a not found error
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}
