//! Tracing subscriber setup
//!
//! `RUST_LOG` wins when set. Otherwise the relay logs at the environment's
//! level while the Discord client crates stay at `warn`; their per-request
//! spans drown out relay output at `debug`.

use crate::config::Environment;
use tracing::Level;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Crates whose logs are capped unless `RUST_LOG` says otherwise
const NOISY_TARGETS: [&str; 3] = ["serenity", "tungstenite", "hyper"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TracingConfig {
    pub level: Level,
    /// One JSON object per line instead of human-readable text
    pub json: bool,
    pub file_line: bool,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self::for_environment(Environment::default())
    }
}

impl TracingConfig {
    #[must_use]
    pub fn for_environment(env: Environment) -> Self {
        match env {
            Environment::Development => Self {
                level: Level::DEBUG,
                json: false,
                file_line: true,
            },
            Environment::Staging => Self {
                level: Level::INFO,
                json: false,
                file_line: true,
            },
            Environment::Production => Self {
                level: Level::INFO,
                json: true,
                file_line: false,
            },
        }
    }

    fn default_directives(&self) -> String {
        NOISY_TARGETS
            .iter()
            .fold(self.level.to_string().to_lowercase(), |acc, target| {
                format!("{acc},{target}=warn")
            })
    }
}

/// Install the global subscriber
///
/// Returns an error instead of panicking when a subscriber is already set.
pub fn try_init_tracing_with_config(config: TracingConfig) -> Result<(), TracingError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.default_directives()));

    let layer = fmt::layer()
        .with_file(config.file_line)
        .with_line_number(config.file_line);
    let layer = if config.json {
        layer.json().boxed()
    } else {
        layer.boxed()
    };

    tracing_subscriber::registry()
        .with(layer)
        .with(filter)
        .try_init()
        .map_err(|_| TracingError::AlreadyInitialized)
}

#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Tracing subscriber already initialized")]
    AlreadyInitialized,
}
