//! Closed type unions for request bodies, response content, and transport mode.

use std::fmt;

use bytes::Bytes;

/// How the client reaches the manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConnectionMode {
    /// Direct signed API calls.
    #[default]
    Api,
    /// Proxied, cookie-authenticated calls through a cooperating web
    /// front-end. Requests are never signed in this mode.
    Session,
}

impl ConnectionMode {
    /// Parse a mode name as found in environment configuration.
    /// Unrecognized values fall back to [`ConnectionMode::Api`].
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("session") {
            Self::Session
        } else {
            Self::Api
        }
    }
}

/// One field of a multipart form body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipartField {
    /// Form field name.
    pub name: String,
    /// Optional file name for file parts.
    pub filename: Option<String>,
    /// Optional content type of this part.
    pub content_type: Option<String>,
    /// Raw part payload.
    pub data: Bytes,
}

/// The request body as selected by the caller.
///
/// This is a closed union: the assembler never probes a body value's shape
/// to decide how to encode it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BodyKind {
    /// No body.
    #[default]
    Empty,
    /// A JSON document, serialized once by the assembler.
    Json(serde_json::Value),
    /// A multipart form. The boundary is assigned by the transport, so the
    /// payload is excluded from the request signature; the content-type
    /// label alone anchors multipart requests into the canonical string.
    Multipart(Vec<MultipartField>),
}

impl BodyKind {
    /// The content-type label used in headers and in the canonical request
    /// string. For multipart bodies this is the bare label without the
    /// boundary parameter, which is not known until send time.
    #[must_use]
    pub fn content_type_label(&self) -> &'static str {
        match self {
            Self::Empty | Self::Json(_) => "application/json",
            Self::Multipart(_) => "multipart/form-data",
        }
    }
}

/// Response content classification, derived once from the `Content-Type`
/// header and dispatched exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentKind {
    /// No `Content-Type` header was present; treated as raw binary.
    Missing,
    /// `application/json` or `application/problem+json`.
    Json,
    /// Any `text/*` type.
    Text,
    /// Everything else; returned as raw bytes.
    Binary,
}

impl ContentKind {
    /// Classify a response from its `Content-Type` header value.
    #[must_use]
    pub fn from_header(value: Option<&str>) -> Self {
        let Some(value) = value else {
            return Self::Missing;
        };
        let Ok(mime) = value.parse::<mime::Mime>() else {
            return Self::Binary;
        };
        match mime.essence_str() {
            "application/json" | "application/problem+json" => Self::Json,
            _ if mime.type_() == mime::TEXT => Self::Text,
            _ => Self::Binary,
        }
    }
}

/// A successfully decoded response value.
///
/// Error responses are never represented here; they are converted into a
/// [`crate::CallError`] by the response processor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecodedResponse {
    /// An empty body.
    Empty,
    /// A parsed JSON document.
    Json(serde_json::Value),
    /// A decoded text body.
    Text(String),
    /// Raw binary payload.
    Binary(Bytes),
}

impl DecodedResponse {
    /// The parsed JSON document, if this response was JSON.
    #[must_use]
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            _ => None,
        }
    }

    /// The decoded text, if this response was text.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl fmt::Display for DecodedResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("<empty>"),
            Self::Json(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
            Self::Binary(bytes) => write!(f, "<{} bytes>", bytes.len()),
        }
    }
}
