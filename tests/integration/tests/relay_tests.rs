//! End-to-end tests of the relay pipeline against mock REST and webhook servers

use anyhow::Result;
use axum::http::StatusCode;
use integration_tests::*;
use relay_core::ReactionAddEvent;
use relay_gateway::HttpResolver;
use relay_service::{DeliveryError, ReactionRelay, RelayError, RelayOutcome, SkipReason};

struct Harness {
    api: MockDiscordApi,
    webhook: MockWebhook,
    resolver: HttpResolver,
    relay: ReactionRelay,
}

impl Harness {
    async fn process(&self, event: ReactionAddEvent) -> Result<RelayOutcome, RelayError> {
        self.relay.process(&self.resolver, event).await
    }
}

async fn harness(status: StatusCode, filters: &[(&str, &str)]) -> Result<Harness> {
    let api = MockDiscordApi::start().await?;
    let webhook = MockWebhook::start_with_status(status).await?;
    let relay = ReactionRelay::from_config(&test_config(&webhook.url(), filters)?)?;
    let resolver = api.resolver();

    Ok(Harness {
        api,
        webhook,
        resolver,
        relay,
    })
}

fn event(emoji: serde_json::Value, bot: bool) -> Result<ReactionAddEvent> {
    let user = user_json(USER_ID, "dana", bot);
    decode_reaction(reaction_event(emoji, Some(user)))
}

#[tokio::test]
async fn test_unicode_reaction_posts_once() -> Result<()> {
    let h = harness(StatusCode::OK, &[]).await?;
    h.api.add_message(message_json(&[(unicode_emoji("✅"), 1)]));

    let outcome = h.process(event(unicode_emoji("✅"), false)?).await?;
    assert_eq!(outcome, RelayOutcome::Delivered);

    let received = h.webhook.received();
    assert_eq!(received.len(), 1);

    let body = &received[0];
    assert_eq!(body["event"], "reaction_add");
    assert_eq!(body["emoji"]["key"], "✅");
    assert_eq!(body["emoji"]["name"], "✅");
    assert!(body["emoji"]["id"].is_null());
    assert_eq!(body["reactionCount"], 1);
    assert_eq!(body["user"]["id"], USER_ID.to_string());
    assert_eq!(body["user"]["username"], "dana");
    assert_eq!(body["user"]["tag"], "dana");
    assert_eq!(body["message"]["id"], MESSAGE_ID.to_string());
    assert_eq!(body["message"]["channelId"], CHANNEL_ID.to_string());
    assert_eq!(body["message"]["guildId"], GUILD_ID.to_string());
    assert_eq!(body["message"]["authorId"], AUTHOR_ID.to_string());
    assert_eq!(body["message"]["content"], "ship it?");
    assert_eq!(
        body["message"]["url"],
        format!("https://discord.com/channels/{GUILD_ID}/{CHANNEL_ID}/{MESSAGE_ID}")
    );
    assert_eq!(body["message"]["createdTimestamp"], 1_462_015_105_796_u64);

    let timestamp = body["timestamp"].as_str().unwrap_or_default();
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());

    Ok(())
}

#[tokio::test]
async fn test_message_fetched_with_bot_token() -> Result<()> {
    let h = harness(StatusCode::OK, &[]).await?;
    h.api.add_message(message_json(&[(unicode_emoji("✅"), 1)]));

    h.process(event(unicode_emoji("✅"), false)?).await?;

    let requests = h.api.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        requests[0].path,
        format!("{API_PREFIX}/channels/{CHANNEL_ID}/messages/{MESSAGE_ID}")
    );
    assert_eq!(
        requests[0].authorization.as_deref(),
        Some(format!("Bot {TEST_TOKEN}").as_str())
    );
    assert!(requests[0]
        .user_agent
        .as_deref()
        .is_some_and(|ua| ua.starts_with("DiscordBot (")));

    Ok(())
}

#[tokio::test]
async fn test_custom_emoji_key() -> Result<()> {
    let h = harness(StatusCode::OK, &[("ALLOWED_EMOJIS", "party:123")]).await?;
    h.api.add_message(message_json(&[(custom_emoji(Some("party"), 123), 4)]));

    let outcome = h.process(event(custom_emoji(Some("party"), 123), false)?).await?;
    assert_eq!(outcome, RelayOutcome::Delivered);

    let body = &h.webhook.received()[0];
    assert_eq!(body["emoji"]["key"], "party:123");
    assert_eq!(body["emoji"]["id"], "123");
    assert_eq!(body["reactionCount"], 4);

    Ok(())
}

#[tokio::test]
async fn test_deleted_custom_emoji_has_null_name() -> Result<()> {
    let h = harness(StatusCode::OK, &[]).await?;
    h.api.add_message(message_json(&[(custom_emoji(None, 55), 2)]));

    let outcome = h.process(event(custom_emoji(None, 55), false)?).await?;
    assert_eq!(outcome, RelayOutcome::Delivered);

    let body = &h.webhook.received()[0];
    assert_eq!(body["emoji"]["key"], "null:55");
    assert!(body["emoji"]["name"].is_null());
    assert_eq!(body["emoji"]["id"], "55");
    assert_eq!(body["reactionCount"], 2);

    Ok(())
}

#[tokio::test]
async fn test_webhook_failure_is_reported_without_retry() -> Result<()> {
    let h = harness(StatusCode::INTERNAL_SERVER_ERROR, &[]).await?;
    h.api.add_message(message_json(&[(unicode_emoji("✅"), 1)]));

    let err = h
        .process(event(unicode_emoji("✅"), false)?)
        .await
        .unwrap_err();

    match err {
        RelayError::Delivery(DeliveryError::Status { status, ref body }) => {
            assert_eq!(status, 500);
            assert_eq!(body, "workflow failed");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(h.webhook.received().len(), 1);

    // The handler boundary logs the failure and carries on
    h.relay
        .handle(&h.resolver, event(unicode_emoji("✅"), false)?)
        .await;
    assert_eq!(h.webhook.received().len(), 2);

    Ok(())
}

#[tokio::test]
async fn test_bot_reaction_not_forwarded() -> Result<()> {
    let h = harness(StatusCode::OK, &[]).await?;
    h.api.add_message(message_json(&[(unicode_emoji("✅"), 1)]));

    let outcome = h.process(event(unicode_emoji("✅"), true)?).await?;

    assert_eq!(outcome, RelayOutcome::Skipped(SkipReason::BotUser));
    assert!(h.api.requests().is_empty());
    assert!(h.webhook.received().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_guild_filter_mismatch() -> Result<()> {
    let h = harness(StatusCode::OK, &[("TARGET_GUILD_ID", "11")]).await?;
    h.api.add_message(message_json(&[(unicode_emoji("✅"), 1)]));

    let outcome = h.process(event(unicode_emoji("✅"), false)?).await?;

    assert_eq!(outcome, RelayOutcome::Skipped(SkipReason::GuildMismatch));
    assert!(h.webhook.received().is_empty());

    Ok(())
}

#[tokio::test]
async fn test_emoji_allow_list() -> Result<()> {
    let h = harness(StatusCode::OK, &[("ALLOWED_EMOJIS", "1️⃣,2️⃣")]).await?;
    h.api.add_message(message_json(&[
        (unicode_emoji("1️⃣"), 1),
        (unicode_emoji("❌"), 1),
    ]));

    let outcome = h.process(event(unicode_emoji("❌"), false)?).await?;
    assert_eq!(outcome, RelayOutcome::Skipped(SkipReason::EmojiNotAllowed));

    let outcome = h.process(event(unicode_emoji("1️⃣"), false)?).await?;
    assert_eq!(outcome, RelayOutcome::Delivered);
    assert_eq!(h.webhook.received().len(), 1);

    Ok(())
}

#[tokio::test]
async fn test_trigger_on_exact_count() -> Result<()> {
    let h = harness(StatusCode::OK, &[("TRIGGER_ON_COUNT", "3")]).await?;
    h.api.add_message(message_json(&[(unicode_emoji("✅"), 2)]));

    let outcome = h.process(event(unicode_emoji("✅"), false)?).await?;
    assert_eq!(outcome, RelayOutcome::Skipped(SkipReason::CountMismatch));

    h.api.add_message(message_json(&[(unicode_emoji("✅"), 3)]));
    let outcome = h.process(event(unicode_emoji("✅"), false)?).await?;
    assert_eq!(outcome, RelayOutcome::Delivered);
    assert_eq!(h.webhook.received()[0]["reactionCount"], 3);

    Ok(())
}

#[tokio::test]
async fn test_partial_user_is_fetched() -> Result<()> {
    let h = harness(StatusCode::OK, &[]).await?;
    h.api.add_message(message_json(&[(unicode_emoji("✅"), 1)]));
    h.api.add_user(user_json(USER_ID, "dana", false));

    let event = decode_reaction(reaction_event(unicode_emoji("✅"), None))?;
    let outcome = h.process(event).await?;

    assert_eq!(outcome, RelayOutcome::Delivered);
    assert_eq!(h.api.requests()[0].path, format!("{API_PREFIX}/users/{USER_ID}"));
    assert_eq!(h.webhook.received()[0]["user"]["username"], "dana");

    Ok(())
}

#[tokio::test]
async fn test_deleted_message_is_dropped() -> Result<()> {
    let h = harness(StatusCode::OK, &[]).await?;

    let err = h
        .process(event(unicode_emoji("✅"), false)?)
        .await
        .unwrap_err();

    assert!(matches!(err, RelayError::Resolve(ref e) if e.is_not_found()));
    assert!(h.webhook.received().is_empty());

    Ok(())
}
