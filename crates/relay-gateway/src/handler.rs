use relay_service::ReactionRelay;
use serenity::async_trait;
use serenity::client::{Context, EventHandler};
use serenity::model::channel::Reaction;
use serenity::model::gateway::Ready;
use std::sync::Arc;
use tracing::{info, warn};

use crate::convert;
use crate::resolver::HttpResolver;

/// Gateway event handler feeding reactions into the relay
///
/// serenity runs each dispatch in its own task, so a slow webhook never
/// holds up the shard.
pub struct RelayHandler {
    relay: Arc<ReactionRelay>,
}

impl RelayHandler {
    pub fn new(relay: Arc<ReactionRelay>) -> Self {
        Self { relay }
    }
}

#[async_trait]
impl EventHandler for RelayHandler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        let bot = convert::user(&ready.user);
        info!(
            user_id = %bot.id,
            guilds = ready.guilds.len(),
            "Logged in as {}",
            bot.tag()
        );
    }

    async fn reaction_add(&self, ctx: Context, add_reaction: Reaction) {
        let Some(event) = convert::reaction_add(&add_reaction) else {
            warn!(
                message_id = %add_reaction.message_id,
                "Reaction without a user id ignored"
            );
            return;
        };

        let resolver = HttpResolver::new(Arc::clone(&ctx.http));
        self.relay.handle(&resolver, event).await;
    }
}
