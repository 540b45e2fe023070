use axum::{
    body::{to_bytes, Body, Bytes, HttpBody},
    http::{header::CONTENT_LENGTH, Request},
    middleware::Next,
    response::Response,
    Error as AxumError,
};
use std::time::Instant;

use super::request_id::RequestId;

const MAX_BUFFERED_BODY_BYTES: usize = 64 * 1024;
const MAX_LOGGED_BODY_BYTES: usize = 2048;
const UNBUFFERED_PREVIEW: &str = "<body not buffered: too large or unknown length>";

struct ErrorEvent<'a> {
    status: u16,
    method: &'a str,
    uri: &'a str,
    request_id: &'a str,
    latency_ms: u64,
}

/// Logs every 4xx/5xx response with a preview of its body.
///
/// Bodies of known size up to 64 KiB are buffered for the preview and
/// forwarded unchanged; larger or unsized bodies are passed through without a
/// preview. Client errors go out at `warn`, server and upstream errors at
/// `error`.
pub async fn log_error_responses(req: Request<Body>, next: Next) -> Response {
    let method = req.method().to_string();
    let uri = req.uri().to_string();
    let request_id = req
        .extensions()
        .get::<RequestId>()
        .map(|id| id.0.clone())
        .unwrap_or_default();
    let start = Instant::now();

    let response = next.run(req).await;
    let status = response.status();

    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    let event = ErrorEvent {
        status: status.as_u16(),
        method: &method,
        uri: &uri,
        request_id: &request_id,
        latency_ms: start.elapsed().as_millis() as u64,
    };

    let (mut parts, body) = response.into_parts();
    if !fits_buffer(&body) {
        log_error_event(&event, Ok(UNBUFFERED_PREVIEW));
        return Response::from_parts(parts, body);
    }

    match buffer_body(body).await {
        Ok((bytes, preview)) => {
            log_error_event(&event, Ok(preview.as_str()));
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(err) => {
            parts.headers.remove(CONTENT_LENGTH);
            log_error_event(&event, Err(err));
            Response::from_parts(parts, Body::empty())
        }
    }
}

fn fits_buffer(body: &Body) -> bool {
    body.size_hint()
        .upper()
        .is_some_and(|len| len <= MAX_BUFFERED_BODY_BYTES as u64)
}

async fn buffer_body(body: Body) -> Result<(Bytes, String), AxumError> {
    let bytes = to_bytes(body, MAX_BUFFERED_BODY_BYTES).await?;
    let preview = body_preview(&bytes);
    Ok((bytes, preview))
}

fn body_preview(bytes: &Bytes) -> String {
    if bytes.len() > MAX_LOGGED_BODY_BYTES {
        format!(
            "{}... (truncated, {} bytes total)",
            String::from_utf8_lossy(&bytes[..MAX_LOGGED_BODY_BYTES]),
            bytes.len()
        )
    } else {
        String::from_utf8_lossy(bytes).to_string()
    }
}

fn log_error_event(event: &ErrorEvent<'_>, body: Result<&str, AxumError>) {
    let ErrorEvent {
        status,
        method,
        uri,
        request_id,
        latency_ms,
    } = *event;

    match body {
        Ok(preview) if status >= 500 => tracing::error!(
            status,
            method,
            uri,
            request_id,
            latency_ms,
            body = preview,
            "Request completed with error status"
        ),
        Ok(preview) => tracing::warn!(
            status,
            method,
            uri,
            request_id,
            latency_ms,
            body = preview,
            "Request completed with error status"
        ),
        Err(err) if status >= 500 => tracing::error!(
            status,
            method,
            uri,
            request_id,
            latency_ms,
            error = ?err,
            "Failed to read error response body"
        ),
        Err(err) => tracing::warn!(
            status,
            method,
            uri,
            request_id,
            latency_ms,
            error = ?err,
            "Failed to read error response body"
        ),
    }
}
