use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

use crate::errors::BotError;

/// Case-insensitive header lookup on an API Gateway `headers` object.
pub fn get_header_value<'a>(headers: &'a Value, name: &str) -> Option<&'a str> {
    if let Some(v) = headers.get(name).and_then(|s| s.as_str()) {
        return Some(v);
    }
    headers.as_object().and_then(|map| {
        map.iter().find_map(|(k, v)| {
            if k.eq_ignore_ascii_case(name) {
                v.as_str()
            } else {
                None
            }
        })
    })
}

/// Raw request body exactly as Slack signed it.
///
/// A missing body is treated as empty, which then fails signature verification.
///
/// # Errors
///
/// Returns `BotError::ParseError` when API Gateway flagged the body as base64 and it
/// does not decode to UTF-8 text.
pub fn extract_body(payload: &Value) -> Result<String, BotError> {
    let body = payload.get("body").and_then(|b| b.as_str()).unwrap_or("");

    let is_base64 = payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false);

    if !is_base64 {
        return Ok(body.to_string());
    }

    let bytes = STANDARD
        .decode(body)
        .map_err(|e| BotError::ParseError(format!("Invalid base64 body: {e}")))?;
    String::from_utf8(bytes).map_err(|e| BotError::ParseError(format!("Body is not UTF-8: {e}")))
}
