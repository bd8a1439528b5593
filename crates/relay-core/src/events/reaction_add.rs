//! MESSAGE_REACTION_ADD notification and its resolved form

use crate::entities::{Member, Message, ReactionEmoji, User};
use crate::traits::{EntityResolver, ResolveResult};
use crate::value_objects::Snowflake;

/// Reaction-add notification as delivered by the gateway
///
/// Only `member.user` is a full object, and only for guild reactions. The
/// message is a bare reference and the reaction count is not included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactionAddEvent {
    pub user_id: Snowflake,
    pub channel_id: Snowflake,
    pub message_id: Snowflake,
    pub guild_id: Option<Snowflake>,
    pub member: Option<Member>,
    pub emoji: ReactionEmoji,
    pub message_author_id: Option<Snowflake>,
    /// Super reaction flag
    pub burst: bool,
}

impl ReactionAddEvent {
    /// Reacting user, if the event carried the full object
    pub fn user(&self) -> Option<&User> {
        self.member.as_ref().and_then(|member| member.user.as_ref())
    }

    /// Resolve the reacting user, fetching it when the event only carried the ID
    pub async fn resolve_user<R>(&self, resolver: &R) -> ResolveResult<User>
    where
        R: EntityResolver + ?Sized,
    {
        match self.user() {
            Some(user) => Ok(user.clone()),
            None => resolver.fetch_user(self.user_id).await,
        }
    }

    /// Resolve the referenced message and the current reaction count
    ///
    /// The message is always fetched: the gateway never delivers its content.
    pub async fn resolve<R>(self, resolver: &R, user: User) -> ResolveResult<ResolvedReaction>
    where
        R: EntityResolver + ?Sized,
    {
        let message = resolver
            .fetch_message(self.channel_id, self.message_id)
            .await?;
        Ok(ResolvedReaction::new(self, user, message))
    }
}

/// A reaction with every field available
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedReaction {
    pub user: User,
    pub emoji: ReactionEmoji,
    /// Count of this emoji on the message; `None` if the reaction is already gone
    pub count: Option<u32>,
    pub message: Message,
}

impl ResolvedReaction {
    /// Combine the notification with the fetched message
    pub fn new(event: ReactionAddEvent, user: User, mut message: Message) -> Self {
        if message.guild_id.is_none() {
            message.guild_id = event.guild_id;
        }
        let count = message.reaction_count(&event.emoji);

        Self {
            user,
            emoji: event.emoji,
            count,
            message,
        }
    }

    /// Matching key of the reaction emoji
    #[inline]
    pub fn emoji_key(&self) -> String {
        self.emoji.key()
    }
}
