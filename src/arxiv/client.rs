//! arXiv metadata client
//!
//! One GET per mention; results are never cached.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{info, warn};
use url::Url;

use super::feed::parse_feed;
use crate::core::models::PaperMetadata;
use crate::errors::BotError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Source of paper title/abstract pairs.
///
/// `None` means the paper could not be fetched at all; `Some` with empty fields
/// means the source answered but had nothing usable.
#[async_trait]
pub trait PaperSource: Send + Sync {
    async fn fetch_paper(&self, arxiv_id: &str) -> Option<PaperMetadata>;
}

pub struct ArxivClient {
    http: Client,
    base_url: String,
}

impl ArxivClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, BotError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| BotError::HttpError(format!("Failed to build arXiv HTTP client: {e}")))?;
        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build `{base}/api/query?id_list={id}`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configured base URL is not a valid URL.
    pub fn query_url(&self, arxiv_id: &str) -> Result<Url, BotError> {
        let mut url = Url::parse(&format!("{}/api/query", self.base_url))
            .map_err(|e| BotError::ConfigError(format!("ARXIV_API_BASE_URL: {e}")))?;
        url.query_pairs_mut().append_pair("id_list", arxiv_id);
        Ok(url)
    }

    /// # Errors
    ///
    /// Returns an error when the request cannot be sent or the body cannot be read.
    /// A non-200 status is not an error; it yields `Ok(None)`.
    pub async fn get_paper(&self, arxiv_id: &str) -> Result<Option<PaperMetadata>, BotError> {
        let url = self.query_url(arxiv_id)?;
        info!(arxiv_id = %arxiv_id, "Fetching arXiv metadata");

        let response = self.http.get(url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            warn!(arxiv_id = %arxiv_id, status = %status, "arXiv API returned non-200");
            return Ok(None);
        }

        let body = response.text().await?;
        Ok(Some(parse_feed(&body)))
    }
}

#[async_trait]
impl PaperSource for ArxivClient {
    async fn fetch_paper(&self, arxiv_id: &str) -> Option<PaperMetadata> {
        match self.get_paper(arxiv_id).await {
            Ok(meta) => meta,
            Err(e) => {
                warn!(arxiv_id = %arxiv_id, "arXiv request failed: {}", e);
                None
            }
        }
    }
}
