//! Resolver trait for partial objects
//!
//! Gateway notifications only carry references to the message (and, outside
//! guilds, to the user). Implementations fetch the full objects on demand.

use async_trait::async_trait;

use crate::entities::{Message, User};
use crate::error::ResolveError;
use crate::value_objects::Snowflake;

/// Result type for resolver operations
pub type ResolveResult<T> = Result<T, ResolveError>;

#[async_trait]
pub trait EntityResolver: Send + Sync {
    /// Fetch a message by channel and message ID
    async fn fetch_message(&self, channel_id: Snowflake, message_id: Snowflake)
        -> ResolveResult<Message>;

    /// Fetch a user by ID
    async fn fetch_user(&self, user_id: Snowflake) -> ResolveResult<User>;
}
