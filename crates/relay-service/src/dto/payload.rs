//! Webhook payload DTOs
//!
//! Field names are camelCase on the wire. Snowflake IDs are serialized as
//! strings for JavaScript compatibility.

use chrono::{DateTime, SecondsFormat, Utc};
use relay_core::{ResolvedReaction, Snowflake};
use serde::Serialize;

/// Event tag carried by every payload
pub const REACTION_ADD_EVENT: &str = "reaction_add";

/// Body of the webhook POST for one reaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionPayload {
    pub event: &'static str,
    pub emoji: EmojiPayload,
    pub reaction_count: Option<u32>,
    pub user: UserPayload,
    pub message: MessagePayload,
    /// Processing time, ISO-8601 with millisecond precision
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmojiPayload {
    pub key: String,
    /// `null` for custom emoji deleted from their guild
    pub name: Option<String>,
    pub id: Option<Snowflake>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserPayload {
    pub id: Snowflake,
    pub username: String,
    pub tag: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessagePayload {
    pub id: Snowflake,
    pub url: String,
    pub channel_id: Snowflake,
    pub guild_id: Option<Snowflake>,
    pub author_id: Option<Snowflake>,
    pub content: Option<String>,
    pub created_timestamp: u64,
}

impl ReactionPayload {
    /// Build a payload stamped with the given processing time
    pub fn new(reaction: &ResolvedReaction, processed_at: DateTime<Utc>) -> Self {
        let message = &reaction.message;

        Self {
            event: REACTION_ADD_EVENT,
            emoji: EmojiPayload {
                key: reaction.emoji_key(),
                name: reaction.emoji.name.clone(),
                id: reaction.emoji.id,
            },
            reaction_count: reaction.count,
            user: UserPayload {
                id: reaction.user.id,
                username: reaction.user.username.clone(),
                tag: reaction.user.tag(),
            },
            message: MessagePayload {
                id: message.id,
                url: message.url(),
                channel_id: message.channel_id,
                guild_id: message.guild_id,
                author_id: message.author_id(),
                content: message.content().map(String::from),
                created_timestamp: message.created_timestamp(),
            },
            timestamp: processed_at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }

    /// Build a payload stamped with the current time
    pub fn now(reaction: &ResolvedReaction) -> Self {
        Self::new(reaction, Utc::now())
    }
}
