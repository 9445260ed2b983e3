//! Handler for authenticated Slack Events API payloads.
//!
//! Runs after the signature and retry-header checks:
//! - duplicate `event_id` suppression
//! - `url_verification` handshake
//! - `app_mention` filtering, the summary pipeline, and the threaded reply

use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

use super::helpers::{
    MSG_DUPLICATE_IGNORED, MSG_NO_ACTION, MSG_PROCESSED, ok_challenge, ok_message,
};
use crate::ai::SummaryGenerator;
use crate::arxiv::PaperSource;
use crate::core::dedupe::RecentEvents;
use crate::core::models::{EventEnvelope, SlackEvent};
use crate::features::{deliver_reply, handle_arxiv_request};
use crate::slack::MessagePoster;
use crate::slack::message_formatter::SUMMARY_ERROR_MESSAGE;

/// Outbound collaborators used while handling a mention.
#[derive(Clone)]
pub struct MentionServices {
    pub papers: Arc<dyn PaperSource>,
    pub summarizer: Arc<dyn SummaryGenerator>,
    pub poster: Arc<dyn MessagePoster>,
}

/// Handle a verified Events API payload and return the webhook response.
pub async fn handle_event_callback(
    services: &MentionServices,
    recent_events: &RecentEvents,
    envelope: &EventEnvelope,
) -> Value {
    if let Some(event_id) = envelope.event_id.as_deref().filter(|id| !id.is_empty())
        && recent_events.check_and_record(event_id)
    {
        info!(event_id = %event_id, "Duplicate event ignored");
        return ok_message(MSG_DUPLICATE_IGNORED);
    }

    if envelope.is_url_verification() {
        return ok_challenge(envelope.challenge.as_deref().unwrap_or(""));
    }

    let Some(event) = envelope.app_mention() else {
        return ok_message(MSG_NO_ACTION);
    };

    handle_app_mention(services, event).await;
    ok_message(MSG_PROCESSED)
}

async fn handle_app_mention(services: &MentionServices, event: &SlackEvent) {
    info!(
        channel = %event.channel,
        thread_ts = ?event.ts,
        "Processing app_mention"
    );

    let reply = match handle_arxiv_request(
        &event.text,
        services.papers.as_ref(),
        services.summarizer.as_ref(),
    )
    .await
    {
        Ok(text) => text,
        Err(e) => {
            error!(channel = %event.channel, "Failed to generate summary: {}", e);
            SUMMARY_ERROR_MESSAGE.to_string()
        }
    };

    // Delivery errors are already logged; the webhook is acknowledged either way.
    let _ = deliver_reply(
        services.poster.as_ref(),
        &event.channel,
        event.ts.as_deref(),
        &reply,
    )
    .await;
}
