//! Relay configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).
//! The result is immutable and shared for the lifetime of the process.

use relay_core::Snowflake;
use std::env;
use std::fmt;

/// Main relay configuration
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub app: AppSettings,
    pub discord: DiscordConfig,
    pub webhook: WebhookConfig,
    pub filters: FilterConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "production" => Some(Self::Production),
            "staging" => Some(Self::Staging),
            "development" => Some(Self::Development),
            _ => None,
        }
    }
}

/// Chat platform connection settings
///
/// Gateway and REST endpoints, reconnects and rate limits are owned by the
/// client library; the relay only supplies credentials.
#[derive(Clone)]
pub struct DiscordConfig {
    /// Bot token, used for the gateway session and REST lookups
    pub token: String,
}

impl fmt::Debug for DiscordConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscordConfig")
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Webhook destination
#[derive(Clone)]
pub struct WebhookConfig {
    pub url: String,
}

impl fmt::Debug for WebhookConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Webhook URLs usually embed a secret path segment
        f.debug_struct("WebhookConfig")
            .field("url", &"<redacted>")
            .finish()
    }
}

/// Optional event filters
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterConfig {
    /// Only relay reactions from this guild
    pub target_guild_id: Option<Snowflake>,
    /// Only relay reactions from this channel
    pub target_channel_id: Option<Snowflake>,
    /// Allowed emoji keys (`name` or `name:id`); empty allows all
    pub allowed_emojis: Vec<String>,
    /// Only relay when the reaction count equals this value exactly
    pub trigger_on_count: Option<u32>,
}

// Default value functions
fn default_app_name() -> String {
    "reaction-relay".to_string()
}

impl RelayConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a required variable is missing or a value is malformed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    ///
    /// Values are trimmed; empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        Ok(Self {
            app: AppSettings {
                name: var("APP_NAME").unwrap_or_else(default_app_name),
                env: var("APP_ENV")
                    .as_deref()
                    .and_then(Environment::parse)
                    .unwrap_or_default(),
            },
            discord: DiscordConfig {
                token: var("DISCORD_TOKEN").ok_or(ConfigError::MissingVar("DISCORD_TOKEN"))?,
            },
            webhook: WebhookConfig {
                url: var("N8N_WEBHOOK_URL").ok_or(ConfigError::MissingVar("N8N_WEBHOOK_URL"))?,
            },
            filters: FilterConfig {
                target_guild_id: parse_optional("TARGET_GUILD_ID", var("TARGET_GUILD_ID"))?,
                target_channel_id: parse_optional("TARGET_CHANNEL_ID", var("TARGET_CHANNEL_ID"))?,
                allowed_emojis: var("ALLOWED_EMOJIS")
                    .map(|s| parse_emoji_list(&s))
                    .unwrap_or_default(),
                trigger_on_count: parse_optional("TRIGGER_ON_COUNT", var("TRIGGER_ON_COUNT"))?,
            },
        })
    }
}

/// Split a comma-separated emoji list, dropping blank entries
fn parse_emoji_list(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(String::from)
        .collect()
}

fn parse_optional<T>(key: &'static str, value: Option<String>) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
{
    value
        .map(|raw| {
            raw.parse::<T>()
                .map_err(|_| ConfigError::InvalidValue(key, raw))
        })
        .transpose()
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
