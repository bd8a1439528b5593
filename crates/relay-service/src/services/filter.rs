//! Reaction filters
//!
//! Checks applied to a resolved reaction, in order: guild, channel, emoji
//! allow-list, exact count. The first failing check decides the skip reason.

use relay_common::FilterConfig;
use relay_core::{ResolvedReaction, Snowflake};
use std::fmt;

/// Why an event was not relayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Reacting user is a bot account
    BotUser,
    /// Message is outside the target guild
    GuildMismatch,
    /// Message is outside the target channel
    ChannelMismatch,
    /// Emoji is not on the allow-list
    EmojiNotAllowed,
    /// Reaction count differs from the trigger count
    CountMismatch,
}

impl SkipReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BotUser => "bot_user",
            Self::GuildMismatch => "guild_mismatch",
            Self::ChannelMismatch => "channel_mismatch",
            Self::EmojiNotAllowed => "emoji_not_allowed",
            Self::CountMismatch => "count_mismatch",
        }
    }
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Filter built once from configuration
#[derive(Debug, Clone, Default)]
pub struct ReactionFilter {
    target_guild_id: Option<Snowflake>,
    target_channel_id: Option<Snowflake>,
    allowed_emojis: Vec<String>,
    trigger_on_count: Option<u32>,
}

impl ReactionFilter {
    /// Create a filter from configuration
    pub fn new(config: &FilterConfig) -> Self {
        Self {
            target_guild_id: config.target_guild_id,
            target_channel_id: config.target_channel_id,
            allowed_emojis: config.allowed_emojis.clone(),
            trigger_on_count: config.trigger_on_count,
        }
    }

    /// Run every check in order
    pub fn check(&self, reaction: &ResolvedReaction) -> Result<(), SkipReason> {
        self.check_guild(reaction.message.guild_id)?;
        self.check_channel(reaction.message.channel_id)?;
        self.check_emoji(&reaction.emoji_key(), reaction.emoji.name())?;
        self.check_count(reaction.count)
    }

    /// Direct messages carry no guild and never match a target guild
    pub fn check_guild(&self, guild_id: Option<Snowflake>) -> Result<(), SkipReason> {
        match self.target_guild_id {
            Some(target) if guild_id != Some(target) => Err(SkipReason::GuildMismatch),
            _ => Ok(()),
        }
    }

    pub fn check_channel(&self, channel_id: Snowflake) -> Result<(), SkipReason> {
        match self.target_channel_id {
            Some(target) if channel_id != target => Err(SkipReason::ChannelMismatch),
            _ => Ok(()),
        }
    }

    /// Either the full key or the bare name may appear on the allow-list
    ///
    /// A nameless custom emoji can only match by key.
    pub fn check_emoji(&self, key: &str, name: Option<&str>) -> Result<(), SkipReason> {
        if self.allowed_emojis.is_empty() {
            return Ok(());
        }

        let allowed = self
            .allowed_emojis
            .iter()
            .any(|entry| entry == key || Some(entry.as_str()) == name);

        if allowed {
            Ok(())
        } else {
            Err(SkipReason::EmojiNotAllowed)
        }
    }

    /// Exact match only; an unknown count never matches
    pub fn check_count(&self, count: Option<u32>) -> Result<(), SkipReason> {
        match self.trigger_on_count {
            Some(target) if count != Some(target) => Err(SkipReason::CountMismatch),
            _ => Ok(()),
        }
    }
}
