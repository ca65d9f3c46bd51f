//! Error types for the Backend.AI client core.

use std::fmt;

/// Configuration error raised at client construction time.
///
/// These are fatal: a client is never constructed with incomplete
/// credentials, and later code may rely on that invariant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The access key is absent or empty.
    #[error("access key is missing or empty")]
    MissingAccessKey,

    /// The secret key is absent or empty.
    #[error("secret key is missing or empty")]
    MissingSecretKey,

    /// The endpoint URL could not be interpreted.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// The API version string does not follow the `v<major>.<date>` form.
    #[error("invalid API version string: {0}")]
    InvalidApiVersion(String),
}

/// The pipeline phase in which a call failed.
///
/// Exactly one phase applies per call. The phase is tracked explicitly as
/// the pipeline advances (send, then body decode, then status check), never
/// inferred from the shape of a caught error after the fact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Transport-level send failure (DNS, connection refused, timeout).
    Request,
    /// Failure while reading or decoding the response body.
    Response,
    /// The server returned a non-2xx status.
    Server,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Request => "request",
            Self::Response => "response",
            Self::Server => "server",
        })
    }
}

/// A classified call failure: the only expected runtime error.
///
/// The core performs no recovery; every failure is surfaced to the caller
/// with enough structure to decide whether a retry is sensible
/// ([`Phase::Request`] failures are plausibly transient, [`Phase::Server`]
/// failures generally are not).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{phase} error: {message}")]
pub struct CallError {
    /// The pipeline phase that failed.
    pub phase: Phase,
    /// Human-readable failure summary.
    pub message: String,
    /// HTTP status code, set for [`Phase::Server`] errors.
    pub status: Option<http::StatusCode>,
    /// Canonical status text, set for [`Phase::Server`] errors.
    pub status_text: Option<String>,
    /// The server-provided `title` field from a JSON error body, if present.
    pub title: Option<String>,
}

impl CallError {
    /// A transport-send failure.
    #[must_use]
    pub fn request(message: impl Into<String>) -> Self {
        Self {
            phase: Phase::Request,
            message: message.into(),
            status: None,
            status_text: None,
            title: None,
        }
    }

    /// A body-read or decode failure.
    #[must_use]
    pub fn response(message: impl Into<String>) -> Self {
        Self {
            phase: Phase::Response,
            message: message.into(),
            status: None,
            status_text: None,
            title: None,
        }
    }

    /// A non-2xx server response, carrying the status and the server's
    /// `title` summary when its error body provided one.
    #[must_use]
    pub fn server(status: http::StatusCode, title: Option<String>) -> Self {
        let status_text = status.canonical_reason().map(ToOwned::to_owned);
        let message = match (&title, &status_text) {
            (Some(t), _) => format!("{} {t}", status.as_u16()),
            (None, Some(s)) => format!("{} {s}", status.as_u16()),
            (None, None) => status.as_u16().to_string(),
        };
        Self {
            phase: Phase::Server,
            message,
            status: Some(status),
            status_text,
            title,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_tag_request_errors_with_request_phase() {
        let err = CallError::request("connection refused");
        assert_eq!(err.phase, Phase::Request);
        assert!(err.status.is_none());
        assert_eq!(err.to_string(), "request error: connection refused");
    }

    #[test]
    fn test_should_carry_status_and_title_for_server_errors() {
        let err = CallError::server(
            http::StatusCode::NOT_FOUND,
            Some("Kernel not found".to_owned()),
        );
        assert_eq!(err.phase, Phase::Server);
        assert_eq!(err.status, Some(http::StatusCode::NOT_FOUND));
        assert_eq!(err.status_text.as_deref(), Some("Not Found"));
        assert_eq!(err.title.as_deref(), Some("Kernel not found"));
        assert_eq!(err.to_string(), "server error: 404 Kernel not found");
    }

    #[test]
    fn test_should_fall_back_to_status_text_without_title() {
        let err = CallError::server(http::StatusCode::BAD_GATEWAY, None);
        assert_eq!(err.message, "502 Bad Gateway");
    }
}
