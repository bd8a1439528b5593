//! # relay-core
//!
//! Domain layer containing platform entities, the reaction-add notification,
//! and the resolver trait used to turn partial references into full objects.
//! This crate has zero dependencies on infrastructure (HTTP clients, sockets, etc.).

pub mod entities;
pub mod error;
pub mod events;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Member, Message, MessageReaction, ReactionEmoji, User};
pub use error::ResolveError;
pub use events::{ReactionAddEvent, ResolvedReaction};
pub use traits::{EntityResolver, ResolveResult};
pub use value_objects::{Snowflake, SnowflakeParseError};
