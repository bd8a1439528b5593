//! Webhook delivery
//!
//! One POST per relayed reaction. No retry, no backoff.

use reqwest::Client;
use tracing::{debug, instrument};

use super::error::DeliveryError;
use crate::dto::ReactionPayload;

/// Client for the fixed webhook destination
#[derive(Clone)]
pub struct WebhookClient {
    http: Client,
    url: String,
}

impl WebhookClient {
    /// Create a client for the given webhook URL
    pub fn new(url: impl Into<String>) -> Result<Self, reqwest::Error> {
        let http = Client::builder().build()?;
        Ok(Self::with_client(http, url))
    }

    /// Create a client around an existing HTTP client
    pub fn with_client(http: Client, url: impl Into<String>) -> Self {
        Self {
            http,
            url: url.into(),
        }
    }

    /// POST the payload as JSON
    ///
    /// A non-success status becomes [`DeliveryError::Status`] carrying the
    /// response body; a body that cannot be read is reported as empty.
    #[instrument(skip_all, fields(emoji_key = %payload.emoji.key))]
    pub async fn deliver(&self, payload: &ReactionPayload) -> Result<(), DeliveryError> {
        let response = self.http.post(&self.url).json(payload).send().await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                debug!(error = %e, "Failed to read webhook response body");
                String::new()
            }
        };

        Err(DeliveryError::Status {
            status: status.as_u16(),
            body,
        })
    }
}

impl std::fmt::Debug for WebhookClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookClient").finish_non_exhaustive()
    }
}
