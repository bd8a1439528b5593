//! Reaction relay
//!
//! Runs once per reaction-add notification: skip bots, resolve partial
//! objects, apply filters, build the payload, deliver it. Every failure is
//! logged at the handler boundary and never propagates to the gateway.
//!
//! The resolver is passed per event. It wraps whatever HTTP handle the
//! gateway hands the event handler, so lookups share that handle's rate
//! limit buckets.

use relay_common::RelayConfig;
use relay_core::{EntityResolver, ReactionAddEvent};
use tracing::{debug, error, info, instrument};

use super::error::{DeliveryError, RelayError, RelayResult};
use super::filter::{ReactionFilter, SkipReason};
use super::webhook::WebhookClient;
use crate::dto::ReactionPayload;

/// Result of relaying one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelayOutcome {
    /// Payload accepted by the webhook
    Delivered,
    /// Event discarded by a filter
    Skipped(SkipReason),
}

/// Per-event relay pipeline
///
/// Holds only immutable state, so one instance is shared by every event task.
pub struct ReactionRelay {
    webhook: WebhookClient,
    filter: ReactionFilter,
}

impl ReactionRelay {
    pub fn new(webhook: WebhookClient, filter: ReactionFilter) -> Self {
        Self { webhook, filter }
    }

    /// Create a relay for the configured webhook and filters
    pub fn from_config(config: &RelayConfig) -> Result<Self, reqwest::Error> {
        let webhook = WebhookClient::new(config.webhook.url.clone())?;
        Ok(Self::new(webhook, ReactionFilter::new(&config.filters)))
    }

    /// Handle one notification, logging the outcome
    ///
    /// Never fails: errors are logged and the event is dropped.
    #[instrument(
        skip_all,
        fields(message_id = %event.message_id, user_id = %event.user_id, emoji_key = %event.emoji.key())
    )]
    pub async fn handle<R>(&self, resolver: &R, event: ReactionAddEvent)
    where
        R: EntityResolver + ?Sized,
    {
        match self.process(resolver, event).await {
            Ok(RelayOutcome::Delivered) => info!("Triggered webhook"),
            Ok(RelayOutcome::Skipped(reason)) => debug!(reason = %reason, "Reaction skipped"),
            Err(RelayError::Delivery(DeliveryError::Status { status, body })) => {
                error!(status, body = %body, "Webhook failed");
            }
            Err(e) => error!(error = %e, code = e.error_code(), "Reaction handler error"),
        }
    }

    /// Run the pipeline and report what happened
    pub async fn process<R>(&self, resolver: &R, event: ReactionAddEvent) -> RelayResult<RelayOutcome>
    where
        R: EntityResolver + ?Sized,
    {
        let user = event.resolve_user(resolver).await?;
        if user.bot {
            return Ok(RelayOutcome::Skipped(SkipReason::BotUser));
        }

        let reaction = event.resolve(resolver, user).await?;

        if let Err(reason) = self.filter.check(&reaction) {
            return Ok(RelayOutcome::Skipped(reason));
        }

        let payload = ReactionPayload::now(&reaction);
        self.webhook.deliver(&payload).await?;

        Ok(RelayOutcome::Delivered)
    }
}
