//! Data transfer objects sent to the webhook

mod payload;

pub use payload::{EmojiPayload, MessagePayload, ReactionPayload, UserPayload};
