//! Client identification for per-client moderation context.
//!
//! Clients name themselves with the [`CLIENT_HEADER`] header. The value
//! is opaque; it only keys the client's moderation context.

use axum::http::HeaderMap;

use crate::error::WebError;

/// Header carrying the client id.
pub const CLIENT_HEADER: &str = "x-forum-client";

/// The client id sent with a request, if any.
///
/// Missing, empty, or non-ASCII values count as anonymous.
pub fn client_id(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(CLIENT_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty())
}

/// The client id, required for requests that change moderation state.
pub fn require_client_id(headers: &HeaderMap) -> Result<&str, WebError> {
    client_id(headers).ok_or(WebError::MissingClient)
}
