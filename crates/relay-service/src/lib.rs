//! # relay-service
//!
//! Application layer: decides whether a reaction is relayed, shapes the
//! webhook payload, and delivers it.

pub mod dto;
pub mod services;

pub use dto::{EmojiPayload, MessagePayload, ReactionPayload, UserPayload};
pub use services::{
    DeliveryError, ReactionFilter, ReactionRelay, RelayError, RelayOutcome, RelayResult,
    SkipReason, WebhookClient,
};
