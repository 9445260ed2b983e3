//! Prompt and output schema for paper summaries.

use openai_api_rs::v1::chat_completion::{ChatCompletionMessage, Content, MessageRole};
use serde_json::{Value, json};

/// Name of the structured-output schema sent with every request.
pub const SUMMARY_SCHEMA_NAME: &str = "paper_summary";

/// Fields the model must return, in display order after the title.
pub const SUMMARY_FIELDS: [&str; 4] = ["overview", "problem", "contribution", "conclusion"];

pub const SYSTEM_PROMPT: &str = "あなたは優秀な博士課程の研究員です。研究に関する深い洞察ができ、それを平易な言葉で表現することができます。\
与えられた論文の概要に基づいて、文中に書かれている内容から概要・課題・貢献・結論について簡潔かつ正確に述べてください。\
概要は、どのような課題に対してどんな手段で解決したかについて150文字程度で記載してください。\
英語で表記するところのみ英語のままにしつつ、**日本語**に翻訳して回答してください。\
「ですます調」ではなく「である調」にして回答してください。";

fn message(role: MessageRole, text: String) -> ChatCompletionMessage {
    ChatCompletionMessage {
        role,
        content: Content::Text(text),
        name: None,
        tool_calls: None,
        tool_call_id: None,
    }
}

/// System instruction followed by the paper as user content.
#[must_use]
pub fn build_prompt(title: &str, abstract_text: &str) -> Vec<ChatCompletionMessage> {
    vec![
        message(MessageRole::system, SYSTEM_PROMPT.to_string()),
        message(
            MessageRole::user,
            format!("タイトル: {title}\n概要: {abstract_text}"),
        ),
    ]
}

/// Strict JSON schema: four required string fields, nothing else allowed.
#[must_use]
pub fn summary_schema() -> Value {
    let properties: serde_json::Map<String, Value> = SUMMARY_FIELDS
        .iter()
        .map(|field| ((*field).to_string(), json!({ "type": "string" })))
        .collect();

    json!({
        "type": "object",
        "properties": properties,
        "required": SUMMARY_FIELDS,
        "additionalProperties": false
    })
}
