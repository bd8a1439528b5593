//! Reaction relay entry point
//!
//! Run with:
//! ```bash
//! cargo run -p relay-gateway
//! ```
//!
//! Configuration is loaded from environment variables (and `.env`).

use relay_common::{try_init_tracing_with_config, AppError, RelayConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Configuration decides the log format, so load it first
    let config = RelayConfig::from_env();

    let tracing_config = config
        .as_ref()
        .map(|c| TracingConfig::for_environment(c.app.env))
        .unwrap_or_default();
    if let Err(e) = try_init_tracing_with_config(tracing_config) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    if let Err(e) = run(config).await {
        error!(error = %e, code = e.error_code(), "Reaction relay stopped");
        std::process::exit(1);
    }
}

async fn run(config: Result<RelayConfig, relay_common::ConfigError>) -> Result<(), AppError> {
    let config = config.map_err(|e| {
        error!(error = %e, "Failed to load configuration");
        e
    })?;

    info!(
        name = %config.app.name,
        env = ?config.app.env,
        guild = ?config.filters.target_guild_id,
        channel = ?config.filters.target_channel_id,
        emojis = ?config.filters.allowed_emojis,
        trigger_on_count = ?config.filters.trigger_on_count,
        "Configuration loaded"
    );

    relay_gateway::run(config).await
}
