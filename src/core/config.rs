use std::env;
use std::time::Duration;

use crate::errors::BotError;

pub const DEFAULT_OPENAI_MODEL: &str = "gpt-4o";
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";
pub const DEFAULT_ARXIV_BASE_URL: &str = "http://export.arxiv.org";
pub const DEFAULT_DEDUPE_TTL_SECS: u64 = 600;
pub const DEFAULT_DEDUPE_CAPACITY: usize = 10_000;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub slack_signing_secret: String,
    pub slack_bot_token: String,
    pub openai_api_key: String,
    pub openai_org_id: Option<String>,
    pub openai_model: Option<String>,
    pub openai_base_url: Option<String>,
    pub arxiv_base_url: Option<String>,
    pub dedupe_ttl_secs: u64,
    pub dedupe_capacity: usize,
}

impl AppConfig {
    /// Load configuration from the Lambda environment.
    ///
    /// # Errors
    ///
    /// Returns `BotError::ConfigError` naming the first required variable that is
    /// missing, or an optional numeric variable that does not parse.
    pub fn from_env() -> Result<Self, BotError> {
        Ok(Self {
            slack_signing_secret: required("SLACK_SIGNING_SECRET")?,
            slack_bot_token: required("SLACK_BOT_TOKEN")?,
            openai_api_key: required("OPENAI_API_KEY")?,
            openai_org_id: env::var("OPENAI_ORG_ID").ok(),
            openai_model: env::var("OPENAI_MODEL").ok(),
            openai_base_url: env::var("OPENAI_BASE_URL").ok(),
            arxiv_base_url: env::var("ARXIV_API_BASE_URL").ok(),
            dedupe_ttl_secs: numeric("EVENT_DEDUPE_TTL_SECS", DEFAULT_DEDUPE_TTL_SECS)?,
            dedupe_capacity: numeric("EVENT_DEDUPE_CAPACITY", DEFAULT_DEDUPE_CAPACITY)?,
        })
    }

    #[must_use]
    pub fn model(&self) -> &str {
        self.openai_model.as_deref().unwrap_or(DEFAULT_OPENAI_MODEL)
    }

    #[must_use]
    pub fn openai_base_url(&self) -> &str {
        self.openai_base_url
            .as_deref()
            .unwrap_or(DEFAULT_OPENAI_BASE_URL)
    }

    #[must_use]
    pub fn arxiv_base_url(&self) -> &str {
        self.arxiv_base_url.as_deref().unwrap_or(DEFAULT_ARXIV_BASE_URL)
    }

    #[must_use]
    pub fn dedupe_ttl(&self) -> Duration {
        Duration::from_secs(self.dedupe_ttl_secs)
    }
}

fn required(name: &str) -> Result<String, BotError> {
    env::var(name).map_err(|e| BotError::ConfigError(format!("{name}: {e}")))
}

fn numeric<T: std::str::FromStr>(name: &str, default: T) -> Result<T, BotError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| BotError::ConfigError(format!("{name}: not a number: {raw}"))),
        Err(_) => Ok(default),
    }
}
