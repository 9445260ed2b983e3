use serde::{Deserialize, Serialize};

/// Top-level Events API envelope as Slack posts it to the webhook.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventEnvelope {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub challenge: Option<String>,
    #[serde(default)]
    pub event_id: Option<String>,
    #[serde(default)]
    pub event: Option<SlackEvent>,
}

impl EventEnvelope {
    #[must_use]
    pub fn is_url_verification(&self) -> bool {
        self.kind == "url_verification"
    }

    /// The inner event when it is an `app_mention`, the only type this bot acts on.
    #[must_use]
    pub fn app_mention(&self) -> Option<&SlackEvent> {
        self.event.as_ref().filter(|e| e.kind == "app_mention")
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SlackEvent {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub channel: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub ts: Option<String>,
}

/// Title and abstract as returned by the arXiv API. Empty strings mean the feed
/// was reachable but carried nothing usable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PaperMetadata {
    pub title: String,
    pub abstract_text: String,
}

impl PaperMetadata {
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.title.is_empty() && !self.abstract_text.is_empty()
    }
}

/// Structured model output. Every field is required; deserialization fails on a
/// missing field instead of defaulting it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PaperSummary {
    pub overview: String,
    pub problem: String,
    pub contribution: String,
    pub conclusion: String,
}
