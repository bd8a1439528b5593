//! Configuration structs

mod relay_config;

pub use relay_config::{
    AppSettings, ConfigError, DiscordConfig, Environment, FilterConfig, RelayConfig,
    WebhookConfig,
};
