//! The response processor: send, decode, status-check.
//!
//! Execution is an explicit three-step pipeline. Each step either produces
//! the next step's input or a terminal [`CallError`] tagged with the phase
//! in which processing stopped; the phase is never inferred from the shape
//! of an error after the fact.

use backendai_core::{CallError, ContentKind, DecodedResponse, MultipartField};
use http::header;
use tracing::debug;

use crate::assemble::{AssembledRequest, RequestBody};

/// Execute an assembled request and decode the response.
///
/// # Errors
///
/// Returns a [`CallError`] classified as:
/// - [`Phase::Request`](backendai_core::Phase::Request) for transport-level
///   send failures,
/// - [`Phase::Response`](backendai_core::Phase::Response) for body read or
///   decode failures,
/// - [`Phase::Server`](backendai_core::Phase::Server) for non-2xx statuses,
///   carrying the status and the JSON body's `title` field when present.
pub(crate) async fn execute(
    http: &reqwest::Client,
    request: AssembledRequest,
) -> Result<DecodedResponse, CallError> {
    let response = send(http, request).await?;
    let status = response.status();
    let decoded = read_body(response).await?;
    check_status(status, decoded)
}

async fn send(
    http: &reqwest::Client,
    request: AssembledRequest,
) -> Result<reqwest::Response, CallError> {
    debug!(method = %request.method, uri = %request.uri, "sending request");
    let mut builder = http
        .request(request.method, &request.uri)
        .headers(request.headers);
    builder = match request.body {
        RequestBody::Empty => builder,
        RequestBody::Bytes(bytes) => builder.body(bytes),
        RequestBody::Multipart(fields) => builder.multipart(multipart_form(fields)?),
    };
    builder
        .send()
        .await
        .map_err(|e| CallError::request(e.to_string()))
}

async fn read_body(response: reqwest::Response) -> Result<DecodedResponse, CallError> {
    let kind = ContentKind::from_header(
        response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok()),
    );
    let bytes = response
        .bytes()
        .await
        .map_err(|e| CallError::response(e.to_string()))?;

    if bytes.is_empty() {
        return Ok(DecodedResponse::Empty);
    }

    match kind {
        ContentKind::Json => serde_json::from_slice(&bytes)
            .map(DecodedResponse::Json)
            .map_err(|e| CallError::response(format!("invalid JSON body: {e}"))),
        ContentKind::Text => String::from_utf8(bytes.to_vec())
            .map(DecodedResponse::Text)
            .map_err(|e| CallError::response(format!("invalid text body: {e}"))),
        ContentKind::Missing | ContentKind::Binary => Ok(DecodedResponse::Binary(bytes)),
    }
}

/// Non-2xx statuses become server-phase errors; the decoded value is
/// otherwise returned unchanged, with no envelope unwrapping.
fn check_status(
    status: http::StatusCode,
    decoded: DecodedResponse,
) -> Result<DecodedResponse, CallError> {
    if status.is_success() {
        return Ok(decoded);
    }
    let title = decoded
        .as_json()
        .and_then(|value| value.get("title"))
        .and_then(serde_json::Value::as_str)
        .map(ToOwned::to_owned);
    debug!(status = %status, title = ?title, "server returned an error status");
    Err(CallError::server(status, title))
}

fn multipart_form(fields: Vec<MultipartField>) -> Result<reqwest::multipart::Form, CallError> {
    let mut form = reqwest::multipart::Form::new();
    for field in fields {
        let mut part = reqwest::multipart::Part::bytes(field.data.to_vec());
        if let Some(filename) = field.filename {
            part = part.file_name(filename);
        }
        if let Some(content_type) = field.content_type {
            part = part
                .mime_str(&content_type)
                .map_err(|e| CallError::request(e.to_string()))?;
        }
        form = form.part(field.name, part);
    }
    Ok(form)
}

#[cfg(test)]
mod tests {
    use backendai_core::Phase;

    use super::*;

    #[test]
    fn test_should_pass_through_successful_decoded_values() {
        let decoded = DecodedResponse::Text("ok".to_owned());
        let result = check_status(http::StatusCode::OK, decoded.clone()).unwrap();
        assert_eq!(result, decoded);
    }

    #[test]
    fn test_should_extract_title_from_json_error_bodies() {
        let body = DecodedResponse::Json(serde_json::json!({"title": "Kernel not found"}));
        let err = check_status(http::StatusCode::NOT_FOUND, body).unwrap_err();
        assert_eq!(err.phase, Phase::Server);
        assert_eq!(err.status, Some(http::StatusCode::NOT_FOUND));
        assert_eq!(err.title.as_deref(), Some("Kernel not found"));
    }

    #[test]
    fn test_should_classify_non_json_error_bodies_without_title() {
        let err =
            check_status(http::StatusCode::BAD_GATEWAY, DecodedResponse::Empty).unwrap_err();
        assert_eq!(err.phase, Phase::Server);
        assert!(err.title.is_none());
        assert_eq!(err.status_text.as_deref(), Some("Bad Gateway"));
    }
}
