//! # relay-gateway
//!
//! Discord gateway session that feeds reaction events into the relay, plus
//! the process entry point.

pub mod convert;
pub mod handler;
pub mod resolver;

use relay_common::{AppError, AppResult, RelayConfig};
use relay_service::ReactionRelay;
use serenity::model::gateway::GatewayIntents;
use serenity::Client;
use std::sync::Arc;
use tracing::info;

pub use handler::RelayHandler;
pub use resolver::HttpResolver;

/// Guild metadata, message events, reaction events, and message content
pub fn relay_intents() -> GatewayIntents {
    GatewayIntents::GUILDS
        | GatewayIntents::GUILD_MESSAGES
        | GatewayIntents::GUILD_MESSAGE_REACTIONS
        | GatewayIntents::MESSAGE_CONTENT
}

/// Connect to the gateway and relay reactions until shutdown
///
/// Returns `Ok` on Ctrl-C and an error when the gateway rejects the bot.
pub async fn run(config: RelayConfig) -> AppResult<()> {
    let relay = ReactionRelay::from_config(&config)
        .map_err(|e| AppError::ExternalService(e.to_string()))?;

    let mut client = Client::builder(&config.discord.token, relay_intents())
        .event_handler(RelayHandler::new(Arc::new(relay)))
        .await
        .map_err(|e| AppError::Gateway(e.to_string()))?;

    let shard_manager = Arc::clone(&client.shard_manager);
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("Shutdown signal received");
            shard_manager.shutdown_all().await;
        }
    });

    client
        .start()
        .await
        .map_err(|e| AppError::Gateway(e.to_string()))
}
