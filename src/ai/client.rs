//! LLM (`OpenAI`) API client module
//!
//! Sends the paper to the Responses API with a strict JSON schema and parses the
//! result into a [`PaperSummary`].

use async_trait::async_trait;
use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use reqwest::Client;
use serde_json::{Value, json};
use std::time::Duration;
use tracing::info;

use super::prompt_builder::{SUMMARY_SCHEMA_NAME, build_prompt, summary_schema};
use crate::core::models::PaperSummary;
use crate::errors::BotError;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);
const MAX_OUTPUT_TOKENS: usize = 2_000;

/// Produces a structured summary for a paper.
#[async_trait]
pub trait SummaryGenerator: Send + Sync {
    async fn summarize(&self, title: &str, abstract_text: &str) -> Result<PaperSummary, BotError>;
}

/// LLM API client for generating summaries
pub struct LlmClient {
    http: Client,
    api_key: String,
    org_id: Option<String>,
    model_name: String,
    base_url: String,
}

impl LlmClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be built.
    pub fn new(
        api_key: String,
        org_id: Option<String>,
        model_name: String,
        base_url: &str,
    ) -> Result<Self, BotError> {
        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| {
                BotError::HttpError(format!("Failed to build OpenAI HTTP client: {e}"))
            })?;

        Ok(Self {
            http,
            api_key,
            org_id,
            model_name,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[must_use]
    pub fn build_request_body(&self, prompt: &[ChatCompletionMessage]) -> Value {
        json!({
            "model": self.model_name,
            "input": build_responses_input_from_prompt(prompt),
            "max_output_tokens": MAX_OUTPUT_TOKENS,
            "text": {
                "format": {
                    "type": "json_schema",
                    "name": SUMMARY_SCHEMA_NAME,
                    "strict": true,
                    "schema": summary_schema()
                }
            }
        })
    }

    /// # Errors
    ///
    /// Returns an error if the HTTP request to `OpenAI` fails, the API answers with a
    /// non-success status, the response carries no output text, or the text does not
    /// satisfy the summary schema.
    pub async fn generate_summary(
        &self,
        prompt: Vec<ChatCompletionMessage>,
    ) -> Result<PaperSummary, BotError> {
        #[cfg(feature = "debug-logs")]
        info!("Using summary prompt:\n{:?}", prompt);

        #[cfg(not(feature = "debug-logs"))]
        info!(
            model = %self.model_name,
            "Requesting structured summary with {} messages in prompt",
            prompt.len()
        );

        let mut headers = reqwest::header::HeaderMap::new();
        let auth_value = format!("Bearer {}", self.api_key)
            .parse()
            .map_err(|e| BotError::HttpError(format!("Invalid Authorization header: {e}")))?;
        headers.insert("Authorization", auth_value);

        if let Some(org) = &self.org_id {
            let org_value = org.parse().map_err(|e| {
                BotError::HttpError(format!("Invalid OpenAI-Organization header: {e}"))
            })?;
            headers.insert("OpenAI-Organization", org_value);
        }

        let response = self
            .http
            .post(format!("{}/responses", self.base_url))
            .headers(headers)
            .json(&self.build_request_body(&prompt))
            .send()
            .await
            .map_err(|e| BotError::HttpError(format!("OpenAI API request failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_else(|e| {
                format!("Failed to read error response body (status {status}): {e}")
            });
            return Err(BotError::OpenAIError(format!(
                "OpenAI API error (status {status}): {error_text}"
            )));
        }

        let response_json: Value = response.json().await.map_err(|e| {
            BotError::OpenAIError(format!("Failed to parse OpenAI response: {e}"))
        })?;

        let text = extract_output_text(&response_json)?;
        parse_summary(&text)
    }
}

#[async_trait]
impl SummaryGenerator for LlmClient {
    async fn summarize(&self, title: &str, abstract_text: &str) -> Result<PaperSummary, BotError> {
        self.generate_summary(build_prompt(title, abstract_text)).await
    }
}

/// Decode the model's JSON text into a [`PaperSummary`].
///
/// # Errors
///
/// Returns `BotError::SchemaError` if the text is not JSON or a field is missing.
pub fn parse_summary(text: &str) -> Result<PaperSummary, BotError> {
    serde_json::from_str(text).map_err(|e| BotError::SchemaError(e.to_string()))
}

/// Pull the generated text out of a Responses API payload.
///
/// # Errors
///
/// Returns an error if the model refused or produced no `output_text` part.
pub fn extract_output_text(response_json: &Value) -> Result<String, BotError> {
    if let Some(text) = response_json.get("output_text").and_then(|v| v.as_str()) {
        return Ok(text.to_string());
    }

    let mut collected: Vec<String> = Vec::new();
    let items = response_json
        .get("output")
        .and_then(|o| o.as_array())
        .map(Vec::as_slice)
        .unwrap_or_default();

    for part in items
        .iter()
        .filter_map(|item| item.get("content").and_then(|c| c.as_array()))
        .flatten()
    {
        match part.get("type").and_then(|t| t.as_str()) {
            Some("output_text") => {
                if let Some(s) = part.get("text").and_then(|t| t.as_str()) {
                    collected.push(s.to_string());
                }
            }
            Some("refusal") => {
                let reason = part
                    .get("refusal")
                    .and_then(|r| r.as_str())
                    .unwrap_or("no reason given");
                return Err(BotError::OpenAIError(format!("Model refused: {reason}")));
            }
            _ => {}
        }
    }

    if collected.is_empty() {
        Err(BotError::OpenAIError("No text in response".to_string()))
    } else {
        Ok(collected.join(""))
    }
}

pub(crate) fn build_responses_input_from_prompt(prompt: &[ChatCompletionMessage]) -> Vec<Value> {
    prompt
        .iter()
        .map(|m| {
            let role_str = match m.role {
                MessageRole::system => "system",
                MessageRole::assistant => "assistant",
                MessageRole::user | MessageRole::function | MessageRole::tool => "user",
            };

            let parts: Vec<Value> = match &m.content {
                Content::Text(t) => vec![json!({ "type": "input_text", "text": t })],
                Content::ImageUrl(imgs) => imgs
                    .iter()
                    .filter_map(|img| img.image_url.as_ref())
                    .map(|iu| json!({ "type": "input_image", "image_url": iu.url }))
                    .collect(),
            };

            json!({
                "role": role_str,
                "content": parts
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_body_uses_strict_schema() {
        let client = LlmClient::new(
            "test_key".to_string(),
            None,
            "gpt-4o".to_string(),
            "https://api.openai.com/v1",
        )
        .unwrap();
        let body = client.build_request_body(&build_prompt("T", "A"));

        assert_eq!(body["model"], "gpt-4o");
        assert_eq!(body["text"]["format"]["type"], "json_schema");
        assert_eq!(body["text"]["format"]["strict"], true);
        assert_eq!(body["input"][0]["role"], "system");
        assert_eq!(body["input"][1]["content"][0]["type"], "input_text");
    }

    #[test]
    fn test_extract_output_text_from_output_items() {
        let payload = json!({
            "output": [
                { "type": "reasoning", "content": [] },
                { "type": "message", "content": [
                    { "type": "output_text", "text": "{\"overview\":" },
                    { "type": "output_text", "text": "\"O\"}" }
                ]}
            ]
        });
        assert_eq!(extract_output_text(&payload).unwrap(), "{\"overview\":\"O\"}");
    }

    #[test]
    fn test_extract_output_text_reports_refusal() {
        let payload = json!({
            "output": [{ "type": "message", "content": [
                { "type": "refusal", "refusal": "cannot help" }
            ]}]
        });
        let err = extract_output_text(&payload).unwrap_err();
        assert!(err.to_string().contains("cannot help"));
    }

    #[test]
    fn test_missing_field_is_a_schema_error() {
        let err = parse_summary(r#"{"overview":"O","problem":"P","contribution":"C"}"#)
            .unwrap_err();
        assert!(matches!(err, BotError::SchemaError(ref m) if m.contains("conclusion")));
    }

    #[test]
    fn test_complete_summary_parses() {
        let summary = parse_summary(
            r#"{"overview":"O","problem":"P","contribution":"C","conclusion":"L"}"#,
        )
        .unwrap();
        assert_eq!(summary.conclusion, "L");
    }
}
