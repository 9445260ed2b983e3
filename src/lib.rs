/// arxiv-bot - A Slack app that summarizes arXiv papers mentioned to it.
///
/// When someone mentions the bot with an arXiv abstract link, the webhook
/// Lambda verifies the Slack signature, fetches the paper's title and abstract
/// from the arXiv API, asks an LLM for a structured Japanese summary, and
/// replies in the mention's thread.
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda (behind API Gateway) for the Events API webhook
/// - the arXiv Atom API for paper metadata
/// - the `OpenAI` Responses API with a strict JSON schema for summaries
/// - slack-morphism for posting replies
///
/// # Example
///
/// ```no_run
/// use arxiv_bot::api::WebhookDispatcher;
/// use arxiv_bot::core::config::AppConfig;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     arxiv_bot::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let dispatcher = WebhookDispatcher::from_config(&config)?;
///
///     // An API Gateway proxy payload, as the Lambda runtime would deliver it.
///     let payload = serde_json::json!({ "headers": {}, "body": "{}" });
///     let response = dispatcher.handle(&payload).await;
///     println!("{}", response["statusCode"]);
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod api;
pub mod arxiv;
pub mod core;
pub mod errors;
pub mod features;
pub mod slack;
pub mod utils;

pub use errors::BotError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It is safe to call more than once; later
/// calls leave the first subscriber in place.
///
/// # Example
///
/// ```
/// arxiv_bot::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
