//! Conversions from serenity models into relay entities
//!
//! serenity's models are `#[non_exhaustive]`, so the relay works on its own
//! entity types and converts at this boundary.

use relay_core::{
    Member, Message, MessageReaction, ReactionAddEvent, ReactionEmoji, Snowflake, User,
};
use serenity::model::channel::{Message as SerenityMessage, Reaction, ReactionType};
use serenity::model::guild::Member as SerenityMember;
use serenity::model::user::User as SerenityUser;

pub fn user(user: &SerenityUser) -> User {
    User {
        id: Snowflake::new(user.id.get()),
        username: user.name.clone(),
        discriminator: user.discriminator.map(|d| format!("{:04}", d.get())),
        global_name: user.global_name.clone(),
        bot: user.bot,
    }
}

fn member(member: &SerenityMember) -> Member {
    Member {
        user: Some(user(&member.user)),
        nick: member.nick.clone(),
    }
}

pub fn emoji(emoji: &ReactionType) -> ReactionEmoji {
    match emoji {
        ReactionType::Unicode(name) => ReactionEmoji::unicode(name.clone()),
        ReactionType::Custom { animated, id, name, .. } => {
            ReactionEmoji::custom(name.clone(), Snowflake::new(id.get()), *animated)
        }
        _ => ReactionEmoji {
            id: None,
            name: None,
            animated: false,
        },
    }
}

/// Convert a fetched message
///
/// Counts above `u32::MAX` saturate.
pub fn message(message: &SerenityMessage) -> Message {
    Message {
        id: Snowflake::new(message.id.get()),
        channel_id: Snowflake::new(message.channel_id.get()),
        guild_id: message.guild_id.map(|id| Snowflake::new(id.get())),
        author: Some(user(&message.author)),
        content: message.content.clone(),
        reactions: message
            .reactions
            .iter()
            .map(|reaction| {
                MessageReaction::new(
                    emoji(&reaction.reaction_type),
                    u32::try_from(reaction.count).unwrap_or(u32::MAX),
                )
            })
            .collect(),
    }
}

/// Convert a reaction-add notification
///
/// `None` when the notification does not name the reacting user.
pub fn reaction_add(reaction: &Reaction) -> Option<ReactionAddEvent> {
    let user_id = reaction.user_id?;

    Some(ReactionAddEvent {
        user_id: Snowflake::new(user_id.get()),
        channel_id: Snowflake::new(reaction.channel_id.get()),
        message_id: Snowflake::new(reaction.message_id.get()),
        guild_id: reaction.guild_id.map(|id| Snowflake::new(id.get())),
        member: reaction.member.as_ref().map(member),
        emoji: emoji(&reaction.emoji),
        message_author_id: reaction.message_author_id.map(|id| Snowflake::new(id.get())),
        burst: reaction.burst,
    })
}
