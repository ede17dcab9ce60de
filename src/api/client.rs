//! Blocking HTTP client for the shorten endpoint
//!
//! One POST per submission, no retry, no request-level cancellation. The
//! response body is always read as text first so non-JSON error bodies can
//! still be inspected.

use tracing::{debug, warn};
use ureq::Agent;

use crate::config::Config;
use crate::errors::{Result, SnaplinkError};

use super::types::{ShortenRequest, ShortenResponse};

pub struct ShortenClient {
    agent: Agent,
    endpoint: String,
}

impl ShortenClient {
    pub fn new(config: &Config) -> Self {
        // 非 2xx 状态不转成传输错误，保留响应体供错误分类使用
        let agent: Agent = Agent::config_builder()
            .timeout_global(config.timeout)
            .http_status_as_error(false)
            .build()
            .into();

        Self {
            agent,
            endpoint: config.shorten_endpoint(),
        }
    }

    /// Submit a URL for shortening.
    ///
    /// Outcome classification:
    /// - transport failure -> `Network`
    /// - non-2xx status -> `Server` (message from the body when possible)
    /// - 2xx with an unusable body -> `MalformedResponse`
    pub fn shorten(&self, url: &str) -> Result<ShortenResponse> {
        let payload = ShortenRequest {
            url: url.to_string(),
        };

        debug!("POST {} url={}", self.endpoint, payload.url);

        let resp = self
            .agent
            .post(&self.endpoint)
            .send_json(&payload)
            .map_err(|e| {
                warn!("request to {} failed: {}", self.endpoint, e);
                SnaplinkError::network(e.to_string())
            })?;

        let status = resp.status().as_u16();
        let body = resp.into_body().read_to_string().map_err(|e| {
            warn!("failed to read response body: {}", e);
            SnaplinkError::network(e.to_string())
        })?;

        interpret_response(status, &body)
    }
}

/// Decision tree over status code and body text (kept free of any socket
/// so it is directly testable).
pub fn interpret_response(status: u16, body: &str) -> Result<ShortenResponse> {
    if !(200..300).contains(&status) {
        return Err(SnaplinkError::server(
            status,
            server_error_message(status, body),
        ));
    }

    let value: serde_json::Value = serde_json::from_str(body).map_err(|e| {
        warn!("success status but body is not JSON: {}", e);
        SnaplinkError::malformed_response("response body is not valid JSON")
    })?;

    // Strict check: a 2xx response without a usable short_url is invalid.
    match value.get("short_url").and_then(|v| v.as_str()) {
        Some(s) if !s.is_empty() => {}
        _ => {
            warn!("success status but no usable short_url in response");
            return Err(SnaplinkError::malformed_response(
                "response is missing a short_url",
            ));
        }
    }

    serde_json::from_value(value)
        .map_err(|_| SnaplinkError::malformed_response("unexpected response shape"))
}

/// Derive the user-visible message for a non-2xx response.
///
/// JSON bodies may carry `error` or `message`; anything else is synthesized
/// from the status code, with 500 pointed at the server logs.
fn server_error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        let field = value
            .get("error")
            .or_else(|| value.get("message"))
            .and_then(|v| v.as_str());
        if let Some(msg) = field
            && !msg.is_empty()
        {
            return msg.to_string();
        }
    }

    if status == 500 {
        "Server error (500). Check the server logs.".to_string()
    } else {
        format!("HTTP {}", status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpret_success() {
        let body = r#"{"original_url":"https://example.com","short_url":"http://x/abc"}"#;
        let resp = interpret_response(200, body).unwrap();
        assert_eq!(resp.original_url, "https://example.com");
        assert_eq!(resp.short_url, "http://x/abc");
    }

    #[test]
    fn test_interpret_success_with_extra_fields() {
        let body = r#"{"original_url":"https://example.com","short_url":"http://x/abc","clicks":0}"#;
        assert!(interpret_response(201, body).is_ok());
    }

    #[test]
    fn test_interpret_non_json_success_body() {
        let err = interpret_response(200, "<html>oops</html>").unwrap_err();
        assert!(matches!(err, SnaplinkError::MalformedResponse(_)));
    }

    #[test]
    fn test_interpret_missing_short_url() {
        let err = interpret_response(200, r#"{"original_url":"https://example.com"}"#).unwrap_err();
        assert!(matches!(err, SnaplinkError::MalformedResponse(_)));

        let err = interpret_response(
            200,
            r#"{"original_url":"https://example.com","short_url":""}"#,
        )
        .unwrap_err();
        assert!(matches!(err, SnaplinkError::MalformedResponse(_)));
    }

    #[test]
    fn test_interpret_error_with_json_error_field() {
        let err = interpret_response(400, r#"{"error":"URL is required"}"#).unwrap_err();
        match err {
            SnaplinkError::Server { status, message } => {
                assert_eq!(status, 400);
                assert_eq!(message, "URL is required");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_interpret_error_with_message_field() {
        let err = interpret_response(429, r#"{"message":"slow down"}"#).unwrap_err();
        match err {
            SnaplinkError::Server { message, .. } => assert_eq!(message, "slow down"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_interpret_500_with_non_json_body() {
        let err = interpret_response(500, "Internal Server Error").unwrap_err();
        match err {
            SnaplinkError::Server { status, message } => {
                assert_eq!(status, 500);
                assert!(message.contains("500"));
                assert!(message.contains("server logs"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_interpret_other_status_fallback() {
        let err = interpret_response(404, "not found").unwrap_err();
        match err {
            SnaplinkError::Server { message, .. } => assert_eq!(message, "HTTP 404"),
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_empty_error_field_falls_back_to_status() {
        let err = interpret_response(502, r#"{"error":""}"#).unwrap_err();
        match err {
            SnaplinkError::Server { message, .. } => assert_eq!(message, "HTTP 502"),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
