//! Message entity - the message a reaction was added to

use super::{ReactionEmoji, User};
use crate::value_objects::Snowflake;

/// Base URL used for message jump links
const MESSAGE_LINK_BASE: &str = "https://discord.com/channels";

/// Message object as fetched over REST
///
/// REST lookups omit `guild_id`; it is filled in from the event that
/// referenced the message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: Snowflake,
    pub channel_id: Snowflake,
    pub guild_id: Option<Snowflake>,
    pub author: Option<User>,
    pub content: String,
    pub reactions: Vec<MessageReaction>,
}

impl Message {
    /// Create a new Message with no author, content or reactions
    pub fn new(id: Snowflake, channel_id: Snowflake) -> Self {
        Self {
            id,
            channel_id,
            guild_id: None,
            author: None,
            content: String::new(),
            reactions: Vec::new(),
        }
    }

    /// Jump link to this message
    ///
    /// Direct messages use `@me` in place of the guild id.
    pub fn url(&self) -> String {
        match self.guild_id {
            Some(guild_id) => format!("{MESSAGE_LINK_BASE}/{guild_id}/{}/{}", self.channel_id, self.id),
            None => format!("{MESSAGE_LINK_BASE}/@me/{}/{}", self.channel_id, self.id),
        }
    }

    /// Creation time in milliseconds since the Unix epoch
    #[inline]
    pub fn created_timestamp(&self) -> u64 {
        self.id.timestamp()
    }

    /// Author ID, if the author is known
    #[inline]
    pub fn author_id(&self) -> Option<Snowflake> {
        self.author.as_ref().map(|author| author.id)
    }

    /// Message content, `None` when empty
    pub fn content(&self) -> Option<&str> {
        if self.content.is_empty() {
            None
        } else {
            Some(&self.content)
        }
    }

    /// Current total count of the given emoji on this message
    pub fn reaction_count(&self, emoji: &ReactionEmoji) -> Option<u32> {
        self.reactions
            .iter()
            .find(|reaction| reaction.emoji.same_as(emoji))
            .map(|reaction| reaction.count)
    }
}

/// Aggregated reaction entry on a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageReaction {
    pub count: u32,
    pub me: bool,
    pub emoji: ReactionEmoji,
}

impl MessageReaction {
    /// Create a new MessageReaction
    pub fn new(emoji: ReactionEmoji, count: u32) -> Self {
        Self {
            count,
            me: false,
            emoji,
        }
    }
}
