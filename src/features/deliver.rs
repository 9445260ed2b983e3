use tracing::{error, info};

use crate::errors::BotError;
use crate::slack::MessagePoster;

/// Post the reply into the mention's thread.
///
/// Slack expects the webhook to be acknowledged regardless of whether the reply
/// lands, so the outcome is logged and handed back for the caller to inspect
/// rather than propagated into the HTTP response.
pub async fn deliver_reply(
    poster: &dyn MessagePoster,
    channel_id: &str,
    thread_ts: Option<&str>,
    text: &str,
) -> Result<(), BotError> {
    match poster.post_thread_reply(channel_id, thread_ts, text).await {
        Ok(()) => {
            info!(channel = %channel_id, "Reply delivered");
            Ok(())
        }
        Err(e) => {
            error!(channel = %channel_id, "Slack API error: {}", e);
            Err(e)
        }
    }
}
