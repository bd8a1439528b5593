//! Relay services
//!
//! Filtering, webhook delivery, and the per-event relay pipeline that ties
//! them together.

pub mod error;
pub mod filter;
pub mod relay;
pub mod webhook;

pub use error::{DeliveryError, RelayError, RelayResult};
pub use filter::{ReactionFilter, SkipReason};
pub use relay::{ReactionRelay, RelayOutcome};
pub use webhook::WebhookClient;
