use std::sync::Arc;

use arxiv_bot::api::{WebhookDispatcher, handler};
use arxiv_bot::core::config::AppConfig;
use lambda_runtime::{LambdaEvent, service_fn};
use serde_json::Value;
use tracing::error;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    arxiv_bot::setup_logging();

    let config = AppConfig::from_env().inspect_err(|e| error!("Config error: {}", e))?;
    let dispatcher = Arc::new(WebhookDispatcher::from_config(&config)?);

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| {
        let dispatcher = Arc::clone(&dispatcher);
        async move { handler(&dispatcher, event).await }
    }))
    .await
}
