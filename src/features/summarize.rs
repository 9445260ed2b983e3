use tracing::{info, warn};

use crate::ai::SummaryGenerator;
use crate::arxiv::PaperSource;
use crate::errors::BotError;
use crate::slack::message_formatter::{
    FETCH_ERROR_MESSAGE, FORMAT_ERROR_MESSAGE, format_summary_message,
};
use crate::utils::links::extract_arxiv_id;

/// Turn a mention's text into the reply text.
///
/// A missing link and an unfetchable paper are ordinary replies, not errors.
///
/// # Errors
///
/// Returns the summarizer's error unchanged when the model call fails or its
/// output does not match the summary schema.
pub async fn handle_arxiv_request(
    text: &str,
    papers: &dyn PaperSource,
    summarizer: &dyn SummaryGenerator,
) -> Result<String, BotError> {
    let Some(arxiv_id) = extract_arxiv_id(text) else {
        info!("No arXiv link in mention");
        return Ok(FORMAT_ERROR_MESSAGE.to_string());
    };

    let Some(meta) = papers.fetch_paper(&arxiv_id).await else {
        warn!(arxiv_id = %arxiv_id, "Paper not found");
        return Ok(FETCH_ERROR_MESSAGE.to_string());
    };

    if !meta.is_complete() {
        warn!(arxiv_id = %arxiv_id, "arXiv feed had no title or abstract");
        return Ok(FETCH_ERROR_MESSAGE.to_string());
    }

    let summary = summarizer.summarize(&meta.title, &meta.abstract_text).await?;
    info!(arxiv_id = %arxiv_id, "Summary generated");

    Ok(format_summary_message(&meta.title, &summary))
}
