//! API Lambda handler - verifies Slack requests and routes them.
//!
//! This module handles:
//! - Request validation (headers, body, signature)
//! - Retry-header suppression
//! - Event callbacks (delegated to `event_handler` module)

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use std::sync::Arc;
use tracing::{Instrument, error, info, info_span};
use uuid::Uuid;

use super::event_handler::{self, MentionServices};
use super::helpers::{self, MSG_RETRY_IGNORED};
use super::{parsing, signature};
use crate::ai::LlmClient;
use crate::arxiv::ArxivClient;
use crate::core::config::AppConfig;
use crate::core::dedupe::RecentEvents;
use crate::core::models::EventEnvelope;
use crate::errors::BotError;
use crate::slack::SlackClient;

pub const HEADER_TIMESTAMP: &str = "X-Slack-Request-Timestamp";
pub const HEADER_SIGNATURE: &str = "X-Slack-Signature";
pub const HEADER_RETRY_NUM: &str = "X-Slack-Retry-Num";

/// Routes one webhook request through verification, suppression and the
/// mention pipeline. Built once per Lambda container.
pub struct WebhookDispatcher {
    signing_secret: String,
    services: MentionServices,
    recent_events: RecentEvents,
}

impl WebhookDispatcher {
    #[must_use]
    pub fn new(
        signing_secret: String,
        services: MentionServices,
        recent_events: RecentEvents,
    ) -> Self {
        Self {
            signing_secret,
            services,
            recent_events,
        }
    }

    /// Wire the production arXiv, `OpenAI` and Slack clients from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client cannot be constructed.
    pub fn from_config(config: &AppConfig) -> Result<Self, BotError> {
        let papers = ArxivClient::new(config.arxiv_base_url())?;
        let summarizer = LlmClient::new(
            config.openai_api_key.clone(),
            config.openai_org_id.clone(),
            config.model().to_string(),
            config.openai_base_url(),
        )?;
        let poster = SlackClient::new(config.slack_bot_token.clone());

        Ok(Self::new(
            config.slack_signing_secret.clone(),
            MentionServices {
                papers: Arc::new(papers),
                summarizer: Arc::new(summarizer),
                poster: Arc::new(poster),
            },
            RecentEvents::new(config.dedupe_ttl(), config.dedupe_capacity),
        ))
    }

    /// Handle an API Gateway proxy payload using the current wall clock.
    pub async fn handle(&self, payload: &Value) -> Value {
        self.handle_at(payload, chrono::Utc::now().timestamp()).await
    }

    /// Handle an API Gateway proxy payload as if the current time were `now_secs`.
    pub async fn handle_at(&self, payload: &Value, now_secs: i64) -> Value {
        let headers = payload.get("headers").unwrap_or(&Value::Null);

        let body = match parsing::extract_body(payload) {
            Ok(b) => b,
            Err(e) => {
                error!("Unreadable request body: {}", e);
                return helpers::unauthorized();
            }
        };

        // ====================================================================
        // Verify Slack signature
        // ====================================================================

        if !signature::verify_slack_signature(
            parsing::get_header_value(headers, HEADER_TIMESTAMP),
            parsing::get_header_value(headers, HEADER_SIGNATURE),
            &body,
            &self.signing_secret,
            now_secs,
        ) {
            return helpers::unauthorized();
        }

        // ====================================================================
        // Slack redeliveries
        // ====================================================================

        if let Some(retry_num) = parsing::get_header_value(headers, HEADER_RETRY_NUM) {
            info!(retry_num = %retry_num, "Retry request ignored");
            return helpers::ok_message(MSG_RETRY_IGNORED);
        }

        let envelope: EventEnvelope = match serde_json::from_str(&body) {
            Ok(v) => v,
            Err(e) => {
                error!("Invalid JSON payload: {}", e);
                return helpers::err_response(400, "Invalid JSON payload");
            }
        };

        info!(
            envelope_type = %envelope.kind,
            event_id = ?envelope.event_id,
            "Slack signature verified"
        );

        event_handler::handle_event_callback(&self.services, &self.recent_events, &envelope).await
    }
}

pub use self::function_handler as handler;

/// Lambda handler for the webhook entrypoint.
///
/// # Errors
///
/// Never fails for a well-formed Lambda invocation; every outcome is encoded in
/// the returned proxy response.
pub async fn function_handler(
    dispatcher: &WebhookDispatcher,
    event: LambdaEvent<Value>,
) -> Result<Value, Error> {
    let correlation_id = Uuid::new_v4().to_string();
    let span = info_span!(
        "webhook",
        correlation_id = %correlation_id,
        request_id = %event.context.request_id
    );

    let response = dispatcher.handle(&event.payload).instrument(span).await;
    Ok(response)
}
