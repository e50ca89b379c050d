//! API error taxonomy.

use serde::Deserialize;
use thiserror::Error;

/// Failure of a request against the API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server could not be reached or the connection broke.
    #[error("could not reach the server: {0}")]
    Network(String),

    /// The credentials were missing, invalid or expired (401/403).
    #[error("{}", detail.as_deref().unwrap_or("not authorised"))]
    AuthRejected { status: u16, detail: Option<String> },

    /// The server refused the request as invalid (other 4xx).
    #[error("{}", detail.as_deref().unwrap_or("request rejected"))]
    Validation { status: u16, detail: Option<String> },

    /// The server failed to handle the request (5xx).
    #[error("{}", detail.as_deref().unwrap_or("server error"))]
    Server { status: u16, detail: Option<String> },

    /// The request could not be built.
    #[error("invalid request: {0}")]
    Request(String),

    /// A JSON body could not be encoded.
    #[error("failed to encode request body")]
    Encode(#[source] serde_json::Error),

    /// A successful response carried an unexpected body.
    #[error("unexpected response body")]
    Decode(#[source] serde_json::Error),
}

impl ApiError {
    /// Classify a non-2xx response, extracting the server's `detail` message.
    #[must_use]
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let detail = extract_detail(body);

        match status {
            401 | 403 => Self::AuthRejected { status, detail },
            400..=499 => Self::Validation { status, detail },
            _ => Self::Server { status, detail },
        }
    }

    /// HTTP status, when the server answered.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::AuthRejected { status, .. }
            | Self::Validation { status, .. }
            | Self::Server { status, .. } => Some(*status),
            Self::Network(_) | Self::Request(_) | Self::Encode(_) | Self::Decode(_) => None,
        }
    }

    /// Human-readable message supplied by the server.
    #[must_use]
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::AuthRejected { detail, .. }
            | Self::Validation { detail, .. }
            | Self::Server { detail, .. } => detail.as_deref(),
            Self::Network(_) | Self::Request(_) | Self::Encode(_) | Self::Decode(_) => None,
        }
    }

    /// The server's message, or `fallback` when it sent none.
    #[must_use]
    pub fn display_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }

    /// Whether the server refused the request outright (any 4xx).
    ///
    /// A stored credential that draws a rejection will never become valid again.
    #[must_use]
    pub const fn is_rejection(&self) -> bool {
        matches!(self, Self::AuthRejected { .. } | Self::Validation { .. })
    }

    pub(crate) fn network(error: &reqwest::Error) -> Self {
        Self::Network(error.to_string())
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// Pull `detail` out of a FastAPI-style error body.
///
/// `detail` is either a string or a list of validation issues with a `msg` each.
fn extract_detail(body: &[u8]) -> Option<String> {
    let ErrorBody { detail } = serde_json::from_slice(body).ok()?;

    match detail {
        serde_json::Value::String(message) if !message.is_empty() => Some(message),
        serde_json::Value::Array(issues) => {
            let messages: Vec<&str> = issues
                .iter()
                .filter_map(|issue| issue.get("msg")?.as_str())
                .collect();

            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorised_statuses_are_auth_rejections() {
        for status in [401, 403] {
            let error = ApiError::from_response(status, br#"{"detail":"Could not validate credentials"}"#);

            assert!(matches!(error, ApiError::AuthRejected { .. }));
            assert_eq!(error.detail(), Some("Could not validate credentials"));
            assert!(error.is_rejection());
        }
    }

    #[test]
    fn bad_credentials_are_validation_errors() {
        let error = ApiError::from_response(400, br#"{"detail":"Incorrect email or password"}"#);

        assert!(matches!(error, ApiError::Validation { status: 400, .. }));
        assert_eq!(error.to_string(), "Incorrect email or password");
    }

    #[test]
    fn validation_issue_lists_are_joined() {
        let body = br#"{"detail":[{"loc":["body","email"],"msg":"field required"},{"msg":"value is not a valid email"}]}"#;
        let error = ApiError::from_response(422, body);

        assert_eq!(
            error.detail(),
            Some("field required; value is not a valid email")
        );
    }

    #[test]
    fn server_errors_without_detail_use_fallback() {
        let error = ApiError::from_response(502, b"<html>Bad Gateway</html>");

        assert!(matches!(error, ApiError::Server { status: 502, .. }));
        assert!(!error.is_rejection());
        assert_eq!(error.display_message("Error de autenticación"), "Error de autenticación");
    }

    #[test]
    fn network_errors_carry_no_status() {
        let error = ApiError::Network("connection refused".to_string());

        assert_eq!(error.status(), None);
        assert!(!error.is_rejection());
    }
}
