//! Slack API client module
//!
//! Posts threaded replies through `chat.postMessage`. Calls are made once; a
//! failure is returned to the caller rather than retried.

use async_trait::async_trait;
use slack_morphism::hyper_tokio::{SlackClientHyperConnector, SlackHyperClient};
use slack_morphism::prelude::SlackApiChatPostMessageRequest;
use slack_morphism::{SlackApiToken, SlackApiTokenValue, SlackChannelId, SlackMessageContent, SlackTs};
use tracing::{info, warn};

use crate::errors::BotError;

// Build the Slack client connector safely without panicking.
// If connector construction fails, store None and surface a BotError at call sites.
static SLACK_CLIENT: std::sync::LazyLock<Option<SlackHyperClient>> =
    std::sync::LazyLock::new(|| match SlackClientHyperConnector::new() {
        Ok(connector) => Some(SlackHyperClient::new(connector)),
        Err(e) => {
            warn!("Failed to create Slack HTTP connector: {}", e);
            None
        }
    });

/// Delivers text back into the Slack thread that mentioned the bot.
#[async_trait]
pub trait MessagePoster: Send + Sync {
    /// Post `text` to `channel_id`, threaded under `thread_ts` when given and
    /// broadcast to the channel.
    async fn post_thread_reply(
        &self,
        channel_id: &str,
        thread_ts: Option<&str>,
        text: &str,
    ) -> Result<(), BotError>;
}

/// Slack API client
pub struct SlackClient {
    token: SlackApiToken,
}

impl SlackClient {
    #[must_use]
    pub fn new(token: String) -> Self {
        Self {
            token: SlackApiToken::new(SlackApiTokenValue::new(token)),
        }
    }
}

/// Build the `chat.postMessage` request for a broadcast thread reply.
#[must_use]
pub fn build_thread_reply_request(
    channel_id: &str,
    thread_ts: Option<&str>,
    text: &str,
) -> SlackApiChatPostMessageRequest {
    let request = SlackApiChatPostMessageRequest::new(
        SlackChannelId(channel_id.to_string()),
        SlackMessageContent::new().with_text(text.to_string()),
    );

    match thread_ts {
        Some(ts) => request
            .with_thread_ts(SlackTs(ts.to_string()))
            .with_reply_broadcast(true),
        None => request,
    }
}

#[async_trait]
impl MessagePoster for SlackClient {
    async fn post_thread_reply(
        &self,
        channel_id: &str,
        thread_ts: Option<&str>,
        text: &str,
    ) -> Result<(), BotError> {
        let session = SLACK_CLIENT
            .as_ref()
            .ok_or_else(|| BotError::ApiError("Slack HTTP connector not initialized".to_string()))?
            .open_session(&self.token);

        let post_req = build_thread_reply_request(channel_id, thread_ts, text);
        session.chat_post_message(&post_req).await?;

        info!(channel = %channel_id, thread_ts = ?thread_ts, "Posted thread reply");
        Ok(())
    }
}
