//! Partial-object lookups over serenity's HTTP client
//!
//! Requests go through the client's ratelimiter, which waits out `429`
//! responses and per-route buckets before returning.

use async_trait::async_trait;
use relay_core::{EntityResolver, Message, ResolveError, ResolveResult, Snowflake, User};
use serenity::http::Http;
use serenity::model::id::{ChannelId, MessageId, UserId};
use std::sync::Arc;

use crate::convert;

/// [`EntityResolver`] backed by a serenity HTTP handle
#[derive(Clone)]
pub struct HttpResolver {
    http: Arc<Http>,
}

impl HttpResolver {
    pub fn new(http: Arc<Http>) -> Self {
        Self { http }
    }
}

#[async_trait]
impl EntityResolver for HttpResolver {
    async fn fetch_message(
        &self,
        channel_id: Snowflake,
        message_id: Snowflake,
    ) -> ResolveResult<Message> {
        let message = ChannelId::new(channel_id.into_inner())
            .message(&self.http, MessageId::new(message_id.into_inner()))
            .await
            .map_err(|e| resolve_error(e, "Message", message_id))?;
        Ok(convert::message(&message))
    }

    async fn fetch_user(&self, user_id: Snowflake) -> ResolveResult<User> {
        let user = UserId::new(user_id.into_inner())
            .to_user(&self.http)
            .await
            .map_err(|e| resolve_error(e, "User", user_id))?;
        Ok(convert::user(&user))
    }
}

fn resolve_error(err: serenity::Error, resource: &'static str, id: Snowflake) -> ResolveError {
    match err {
        serenity::Error::Http(e) => match e.status_code().map(|status| status.as_u16()) {
            Some(404) => ResolveError::NotFound { resource, id },
            Some(401) => ResolveError::Unauthorized,
            Some(403) => ResolveError::Forbidden { resource, id },
            Some(status) => ResolveError::Http { status },
            None => ResolveError::Transport(e.to_string()),
        },
        serenity::Error::Json(e) => ResolveError::Decode(e.to_string()),
        other => ResolveError::Transport(other.to_string()),
    }
}

impl std::fmt::Debug for HttpResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpResolver").finish_non_exhaustive()
    }
}
