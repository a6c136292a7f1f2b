// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Extracting a human-readable message from a failed backend response.
//!
//! The backend does not return structured errors on every failure path
//! (proxy timeouts, infrastructure 5xx pages), so messages are resolved by
//! an ordered chain of strategies. The first strategy that produces a
//! message wins; the chain's fallback always produces one.

use axum::http::StatusCode;
use serde_json::Value;

/// Longest raw body we are willing to echo back as a message.
const MAX_TEXT_MESSAGE_LEN: usize = 512;

/// A non-2xx response whose body has already been read.
#[derive(Debug, Clone, Copy)]
pub struct FailedResponse<'a> {
    pub status: StatusCode,
    pub body: &'a [u8],
}

/// One attempt at producing a message.
pub type Strategy = fn(&FailedResponse<'_>) -> Option<String>;

/// Ordered strategies plus an infallible fallback.
#[derive(Clone, Copy)]
pub struct MessageChain {
    strategies: &'static [Strategy],
    fallback: fn(&FailedResponse<'_>) -> String,
}

impl MessageChain {
    /// JSON message field, then raw text, then a generic status message.
    pub const DEFAULT: MessageChain = MessageChain {
        strategies: &[json_message, raw_text],
        fallback: generic_status,
    };

    /// JSON `detail` verbatim, then a login-flavored text or status message.
    pub const LOGIN: MessageChain = MessageChain {
        strategies: &[json_detail, login_text],
        fallback: login_status,
    };

    pub fn resolve(&self, response: &FailedResponse<'_>) -> String {
        self.strategies
            .iter()
            .find_map(|strategy| strategy(response))
            .unwrap_or_else(|| (self.fallback)(response))
    }
}

impl std::fmt::Debug for MessageChain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageChain")
            .field("strategies", &self.strategies.len())
            .finish()
    }
}

/// `detail` as a string, or FastAPI-style `detail: [{msg}]`.
pub fn json_detail(response: &FailedResponse<'_>) -> Option<String> {
    let body: Value = serde_json::from_slice(response.body).ok()?;
    detail_of(&body)
}

/// `detail`, then `message`, then `error`.
pub fn json_message(response: &FailedResponse<'_>) -> Option<String> {
    let body: Value = serde_json::from_slice(response.body).ok()?;
    detail_of(&body)
        .or_else(|| non_empty_str(body.get("message")))
        .or_else(|| non_empty_str(body.get("error")))
}

/// The raw body text, when there is any.
pub fn raw_text(response: &FailedResponse<'_>) -> Option<String> {
    body_text(response.body)
}

pub fn generic_status(response: &FailedResponse<'_>) -> String {
    format!("request failed with status {}", response.status.as_u16())
}

/// Non-JSON body text. A JSON body without `detail` falls through to the
/// status message instead of being echoed.
fn login_text(response: &FailedResponse<'_>) -> Option<String> {
    if serde_json::from_slice::<Value>(response.body).is_ok() {
        return None;
    }
    body_text(response.body)
        .map(|text| format!("Login failed ({}): {}", response.status.as_u16(), text))
}

fn login_status(response: &FailedResponse<'_>) -> String {
    format!(
        "Login failed ({} {})",
        response.status.as_u16(),
        response.status.canonical_reason().unwrap_or("Unknown")
    )
}

fn detail_of(body: &Value) -> Option<String> {
    match body.get("detail")? {
        Value::String(detail) if !detail.is_empty() => Some(detail.clone()),
        Value::Array(items) => {
            let messages: Vec<&str> = items
                .iter()
                .filter_map(|item| item.get("msg").and_then(Value::as_str))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

fn non_empty_str(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

fn body_text(body: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(body);
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    Some(text.chars().take(MAX_TEXT_MESSAGE_LEN).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failed(status: u16, body: &str) -> FailedResponse<'_> {
        FailedResponse {
            status: StatusCode::from_u16(status).unwrap(),
            body: body.as_bytes(),
        }
    }

    #[test]
    fn test_json_detail_wins() {
        let response = failed(400, r#"{"detail":"Incorrect credentials"}"#);
        assert_eq!(
            MessageChain::DEFAULT.resolve(&response),
            "Incorrect credentials"
        );
        assert_eq!(
            MessageChain::LOGIN.resolve(&response),
            "Incorrect credentials"
        );
    }

    #[test]
    fn test_validation_detail_list() {
        let response = failed(
            422,
            r#"{"detail":[{"loc":["body","email"],"msg":"field required"},{"msg":"too short"}]}"#,
        );
        assert_eq!(json_detail(&response).unwrap(), "field required; too short");
    }

    #[test]
    fn test_message_and_error_fields() {
        assert_eq!(
            json_message(&failed(409, r#"{"message":"Email taken"}"#)).unwrap(),
            "Email taken"
        );
        assert_eq!(
            json_message(&failed(500, r#"{"error":"boom"}"#)).unwrap(),
            "boom"
        );
        assert_eq!(json_message(&failed(500, r#"{"other":1}"#)), None);
    }

    #[test]
    fn test_falls_back_to_text() {
        let response = failed(502, "<html>Bad Gateway</html>");
        assert_eq!(json_message(&response), None);
        assert_eq!(
            MessageChain::DEFAULT.resolve(&response),
            "<html>Bad Gateway</html>"
        );
    }

    #[test]
    fn test_falls_back_to_generic() {
        let response = failed(503, "   ");
        assert_eq!(
            MessageChain::DEFAULT.resolve(&response),
            "request failed with status 503"
        );
    }

    #[test]
    fn test_login_chain_formats() {
        assert_eq!(
            MessageChain::LOGIN.resolve(&failed(500, "upstream exploded")),
            "Login failed (500): upstream exploded"
        );
        assert_eq!(
            MessageChain::LOGIN.resolve(&failed(401, "")),
            "Login failed (401 Unauthorized)"
        );
    }

    #[test]
    fn test_login_chain_skips_json_without_detail() {
        assert_eq!(
            MessageChain::LOGIN.resolve(&failed(400, r#"{"error":"bad form"}"#)),
            "Login failed (400 Bad Request)"
        );
    }

    #[test]
    fn test_long_text_is_truncated() {
        let body = "x".repeat(MAX_TEXT_MESSAGE_LEN * 2);
        let message = raw_text(&failed(500, &body)).unwrap();
        assert_eq!(message.len(), MAX_TEXT_MESSAGE_LEN);
    }
}
