#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use arxiv_bot::BotError;
use arxiv_bot::ai::SummaryGenerator;
use arxiv_bot::api::WebhookDispatcher;
use arxiv_bot::api::event_handler::MentionServices;
use arxiv_bot::api::signature::compute_signature;
use arxiv_bot::arxiv::PaperSource;
use arxiv_bot::core::dedupe::RecentEvents;
use arxiv_bot::core::models::{PaperMetadata, PaperSummary};
use arxiv_bot::slack::MessagePoster;
use async_trait::async_trait;
use serde_json::{Value, json};
use std::time::Duration;

pub const SIGNING_SECRET: &str = "test_slack_signing_secret";
pub const NOW: i64 = 1_700_000_000;

/// Paper source returning a canned answer and recording requested ids.
pub struct FakePapers {
    pub answer: Option<PaperMetadata>,
    pub requested: Mutex<Vec<String>>,
}

impl FakePapers {
    pub fn found(title: &str, abstract_text: &str) -> Self {
        Self {
            answer: Some(PaperMetadata {
                title: title.to_string(),
                abstract_text: abstract_text.to_string(),
            }),
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn missing() -> Self {
        Self {
            answer: None,
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl PaperSource for FakePapers {
    async fn fetch_paper(&self, arxiv_id: &str) -> Option<PaperMetadata> {
        self.requested.lock().unwrap().push(arxiv_id.to_string());
        self.answer.clone()
    }
}

/// Summarizer returning a fixed summary, or failing when `summary` is `None`.
pub struct FakeSummarizer {
    pub summary: Option<PaperSummary>,
    pub calls: Mutex<Vec<(String, String)>>,
}

impl FakeSummarizer {
    pub fn ok(overview: &str, problem: &str, contribution: &str, conclusion: &str) -> Self {
        Self {
            summary: Some(PaperSummary {
                overview: overview.to_string(),
                problem: problem.to_string(),
                contribution: contribution.to_string(),
                conclusion: conclusion.to_string(),
            }),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            summary: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl SummaryGenerator for FakeSummarizer {
    async fn summarize(&self, title: &str, abstract_text: &str) -> Result<PaperSummary, BotError> {
        self.calls
            .lock()
            .unwrap()
            .push((title.to_string(), abstract_text.to_string()));
        self.summary
            .clone()
            .ok_or_else(|| BotError::OpenAIError("API Error".to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Posted {
    pub channel: String,
    pub thread_ts: Option<String>,
    pub text: String,
}

/// Slack poster recording every reply; optionally fails each call.
#[derive(Default)]
pub struct FakePoster {
    pub fail: bool,
    pub posts: Mutex<Vec<Posted>>,
}

impl FakePoster {
    pub fn failing() -> Self {
        Self {
            fail: true,
            posts: Mutex::new(Vec::new()),
        }
    }

    pub fn posts(&self) -> Vec<Posted> {
        self.posts.lock().unwrap().clone()
    }
}

#[async_trait]
impl MessagePoster for FakePoster {
    async fn post_thread_reply(
        &self,
        channel_id: &str,
        thread_ts: Option<&str>,
        text: &str,
    ) -> Result<(), BotError> {
        self.posts.lock().unwrap().push(Posted {
            channel: channel_id.to_string(),
            thread_ts: thread_ts.map(ToString::to_string),
            text: text.to_string(),
        });
        if self.fail {
            Err(BotError::ApiError("channel_not_found".to_string()))
        } else {
            Ok(())
        }
    }
}

pub struct Harness {
    pub papers: Arc<FakePapers>,
    pub summarizer: Arc<FakeSummarizer>,
    pub poster: Arc<FakePoster>,
    pub dispatcher: WebhookDispatcher,
}

impl Harness {
    pub fn new(papers: FakePapers, summarizer: FakeSummarizer, poster: FakePoster) -> Self {
        let papers = Arc::new(papers);
        let summarizer = Arc::new(summarizer);
        let poster = Arc::new(poster);
        let dispatcher = WebhookDispatcher::new(
            SIGNING_SECRET.to_string(),
            MentionServices {
                papers: papers.clone(),
                summarizer: summarizer.clone(),
                poster: poster.clone(),
            },
            RecentEvents::new(Duration::from_secs(600), 100),
        );
        Self {
            papers,
            summarizer,
            poster,
            dispatcher,
        }
    }

    pub fn happy() -> Self {
        Self::new(
            FakePapers::found("Test Paper Title", "This is a test abstract."),
            FakeSummarizer::ok("O", "P", "C", "L"),
            FakePoster::default(),
        )
    }

    pub fn no_downstream_calls(&self) -> bool {
        self.papers.requested().is_empty()
            && self.summarizer.call_count() == 0
            && self.poster.posts().is_empty()
    }
}

/// API Gateway proxy payload signed the way Slack signs it.
pub fn signed_request(body: &Value, extra_headers: &[(&str, &str)]) -> Value {
    let body = body.to_string();
    let timestamp = NOW.to_string();
    let mut headers = json!({
        "content-type": "application/json",
        "x-slack-request-timestamp": timestamp,
        "x-slack-signature": compute_signature(&timestamp, &body, SIGNING_SECRET),
    });
    for (name, value) in extra_headers {
        headers[*name] = json!(value);
    }
    json!({
        "headers": headers,
        "body": body,
        "isBase64Encoded": false
    })
}

pub fn app_mention(event_id: &str, text: &str) -> Value {
    json!({
        "type": "event_callback",
        "team_id": "T1234567890",
        "api_app_id": "A1234567890",
        "event_id": event_id,
        "event": {
            "type": "app_mention",
            "channel": "C1234567890",
            "user": "U123456789",
            "text": text,
            "ts": "1234567890.123456"
        }
    })
}

pub fn status(response: &Value) -> u64 {
    response["statusCode"].as_u64().unwrap()
}

pub fn body(response: &Value) -> Value {
    serde_json::from_str(response["body"].as_str().unwrap()).unwrap()
}
