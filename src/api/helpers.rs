//! Response builders for the API Gateway proxy format.

use serde_json::{Value, json};

pub const MSG_RETRY_IGNORED: &str = "Retry ignored";
pub const MSG_DUPLICATE_IGNORED: &str = "Duplicate event ignored";
pub const MSG_NO_ACTION: &str = "No action taken";
pub const MSG_PROCESSED: &str = "Processed";

/// Returns a 200 OK response with `{"message": message}`.
#[must_use]
pub fn ok_message(message: &str) -> Value {
    json!({
        "statusCode": 200,
        "body": json!({ "message": message }).to_string()
    })
}

/// Returns the URL-verification handshake response.
#[must_use]
pub fn ok_challenge(challenge: &str) -> Value {
    json!({
        "statusCode": 200,
        "body": json!({ "challenge": challenge }).to_string()
    })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "body": json!({ "error": message }).to_string()
    })
}

#[must_use]
pub fn unauthorized() -> Value {
    err_response(401, "unauthorized")
}
