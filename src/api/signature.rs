use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::error;

/// Requests older (or newer) than this many seconds are rejected as replays.
pub const MAX_REQUEST_AGE_SECS: i64 = 300;

type HmacSha256 = Hmac<Sha256>;

/// Verify Slack's `v0` request signature.
///
/// Both headers must be present, the timestamp must lie within
/// [`MAX_REQUEST_AGE_SECS`] of `now_secs`, and `signature` must equal
/// `v0=` + hex(HMAC-SHA256(secret, "v0:{timestamp}:{body}")). The digest
/// comparison is constant-time.
#[must_use]
pub fn verify_slack_signature(
    timestamp: Option<&str>,
    signature: Option<&str>,
    request_body: &str,
    signing_secret: &str,
    now_secs: i64,
) -> bool {
    let (Some(timestamp), Some(signature)) = (timestamp, signature) else {
        error!("Missing Slack signature headers");
        return false;
    };

    let Ok(ts) = timestamp.trim().parse::<i64>() else {
        error!("Non-numeric X-Slack-Request-Timestamp: {}", timestamp);
        return false;
    };

    if now_secs.abs_diff(ts) > MAX_REQUEST_AGE_SECS.unsigned_abs() {
        error!("Timestamp out of range, potential replay attack");
        return false;
    }

    let Some(received) = signature
        .strip_prefix("v0=")
        .and_then(|hex_part| hex::decode(hex_part).ok())
    else {
        error!("Malformed X-Slack-Signature header");
        return false;
    };

    let Some(mut mac) = new_mac(signing_secret) else {
        return false;
    };
    mac.update(format!("v0:{timestamp}:{request_body}").as_bytes());

    if mac.verify_slice(&received).is_ok() {
        true
    } else {
        error!("Signature verification failed");
        false
    }
}

/// Compute the `v0=` signature Slack would send for this body and timestamp.
#[must_use]
pub fn compute_signature(timestamp: &str, request_body: &str, signing_secret: &str) -> String {
    let Some(mut mac) = new_mac(signing_secret) else {
        return String::new();
    };
    mac.update(format!("v0:{timestamp}:{request_body}").as_bytes());
    format!("v0={}", hex::encode(mac.finalize().into_bytes()))
}

fn new_mac(signing_secret: &str) -> Option<HmacSha256> {
    match HmacSha256::new_from_slice(signing_secret.as_bytes()) {
        Ok(mac) => Some(mac),
        Err(e) => {
            error!("Failed to create HMAC: {}", e);
            None
        }
    }
}
