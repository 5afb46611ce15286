//! Error types for API operations.

use thiserror::Error;

use crate::http::{HttpError, HttpHeaders, HttpResponse, header_get};
use crate::retry::is_retryable_status;

/// Errors that can occur when calling the API.
#[derive(Debug, Error)]
pub enum MergeError {
    /// The request never produced a response.
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    /// The API answered with a non-2xx status.
    #[error("API error ({status}): {body}")]
    Api {
        status: u16,
        body: String,
        headers: HttpHeaders,
    },

    /// Response or request body could not be (de)serialized.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The request URL could not be built.
    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl MergeError {
    /// Build an [`MergeError::Api`] from a failed response.
    pub fn from_response(response: HttpResponse) -> Self {
        Self::Api {
            status: response.status,
            body: String::from_utf8_lossy(&response.body).into_owned(),
            headers: response.headers,
        }
    }

    #[inline]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// HTTP status of an API error.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw response body of an API error.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Api { body, .. } => Some(body.as_str()),
            _ => None,
        }
    }

    /// Response body of an API error parsed as JSON, when it is JSON.
    #[must_use]
    pub fn json_body(&self) -> Option<serde_json::Value> {
        self.body().and_then(|b| serde_json::from_str(b).ok())
    }

    /// A response header of an API error.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        match self {
            Self::Api { headers, .. } => header_get(headers, name),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_bad_request(&self) -> bool {
        self.status() == Some(400)
    }

    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    #[must_use]
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Whether another attempt may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http(HttpError::Transport(_) | HttpError::Timeout(_)) => true,
            Self::Api { status, .. } => is_retryable_status(*status),
            _ => false,
        }
    }
}

/// Result type for API operations.
pub type Result<T> = std::result::Result<T, MergeError>;

/// Get a short error message suitable for display.
pub fn short_error_message(err: &MergeError) -> String {
    match err {
        MergeError::Http(HttpError::Timeout(_)) => "Request timed out".to_string(),
        MergeError::Http(_) => "Network error".to_string(),
        MergeError::Api { status, body, .. } => {
            if body.chars().count() > 50 {
                let truncated: String = body.chars().take(47).collect();
                format!("HTTP {}: {}...", status, truncated)
            } else if body.is_empty() {
                format!("HTTP {}", status)
            } else {
                format!("HTTP {}: {}", status, body)
            }
        }
        MergeError::Json(_) => "JSON parse error".to_string(),
        MergeError::Url(e) => format!("Invalid URL: {}", e),
        MergeError::Config(msg) => format!("Config: {}", msg),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(status: u16, body: &str) -> MergeError {
        MergeError::from_response(HttpResponse {
            status,
            headers: vec![("X-Request-Id".to_string(), "req-1".to_string())],
            body: body.as_bytes().to_vec(),
        })
    }

    #[test]
    fn test_status_helpers() {
        assert!(api(400, "bad").is_bad_request());
        assert!(api(401, "nope").is_unauthorized());
        assert!(api(404, "gone").is_not_found());
        assert_eq!(api(418, "").status(), Some(418));
        assert_eq!(MergeError::config("x").status(), None);
    }

    #[test]
    fn test_api_error_exposes_raw_response() {
        let err = api(401, r#"{"detail":"Invalid API key."}"#);
        assert_eq!(err.body(), Some(r#"{"detail":"Invalid API key."}"#));
        assert_eq!(err.header("x-request-id"), Some("req-1"));
        assert_eq!(
            err.json_body().and_then(|v| v["detail"].as_str().map(String::from)),
            Some("Invalid API key.".to_string())
        );
        assert!(err.to_string().contains("401"));
    }

    #[test]
    fn test_is_retryable() {
        assert!(api(429, "").is_retryable());
        assert!(api(503, "").is_retryable());
        assert!(!api(400, "").is_retryable());
        assert!(!api(404, "").is_retryable());
        assert!(MergeError::Http(HttpError::Timeout("t".to_string())).is_retryable());
        assert!(MergeError::Http(HttpError::Transport("reset".to_string())).is_retryable());
        assert!(!MergeError::config("missing key").is_retryable());
    }

    #[test]
    fn test_short_error_message() {
        assert_eq!(short_error_message(&api(500, "")), "HTTP 500");
        assert_eq!(short_error_message(&api(404, "Not found")), "HTTP 404: Not found");

        let long = "x".repeat(80);
        let msg = short_error_message(&api(400, &long));
        assert!(msg.ends_with("..."));
        assert_eq!(msg, format!("HTTP 400: {}...", "x".repeat(47)));

        assert_eq!(
            short_error_message(&MergeError::Http(HttpError::Timeout("t".to_string()))),
            "Request timed out"
        );
    }
}
