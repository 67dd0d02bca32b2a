//! Response classification for the validation exchange
//!
//! The terminal outcomes of a received response are represented as an explicit
//! tagged type produced by a single classification step, so the branches are
//! exhaustive and testable without a network call. Transport failures never
//! reach this step; with no response there is nothing to classify.

use reqwest::StatusCode;
use serde_json::Value;

/// Classification of a received HTTP response
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseClass {
    /// Transport and semantics both succeeded; payload passed through verbatim
    Accepted(Value),

    /// The body explicitly carried `success: false`
    Rejected,

    /// Error status with a readable body or status line
    RemoteReported { message: String },
}

/// Classify a received response by status and raw body
///
/// Priority: an explicit `success: false` in the body wins regardless of
/// status. Otherwise a non-2xx status is a remote-reported failure carrying
/// the body's `message` field, falling back to the raw body text and then to
/// the status line when the body is empty. Anything else is accepted; the
/// payload is returned unchanged, and a non-JSON 2xx body is carried as a
/// JSON string.
pub fn classify_response(status: StatusCode, body: &[u8]) -> ResponseClass {
    let text = String::from_utf8_lossy(body);
    let parsed: Option<Value> = serde_json::from_slice(body).ok();

    if let Some(Value::Object(map)) = &parsed {
        if map.get("success") == Some(&Value::Bool(false)) {
            return ResponseClass::Rejected;
        }
    }

    if !status.is_success() {
        let message = parsed
            .as_ref()
            .and_then(|v| v.get("message"))
            .and_then(|m| m.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    status.to_string()
                } else {
                    trimmed.to_string()
                }
            });
        return ResponseClass::RemoteReported { message };
    }

    ResponseClass::Accepted(parsed.unwrap_or_else(|| Value::String(text.into_owned())))
}
