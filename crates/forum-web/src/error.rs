//! Error types for the forum web layer.
//!
//! [`WebError`] unifies all failure modes into a single enum that can be
//! converted into an Axum HTTP response via its
//! [`IntoResponse`](axum::response::IntoResponse) implementation.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use forum_routing::RoutingError;

use crate::moderation::ModerationError;

/// Errors that can occur in the web layer.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// An invalid or missing query parameter was provided.
    #[error("invalid query: {0}")]
    InvalidQuery(String),

    /// A moderation request did not identify its client.
    #[error("missing `x-forum-client` header")]
    MissingClient,

    /// The route table could not be built.
    #[error("routing error: {0}")]
    Routing(#[from] RoutingError),

    /// A moderation-modal transition was not allowed.
    #[error("moderation error: {0}")]
    Moderation(#[from] ModerationError),

    /// The page template failed to compile or render.
    #[error("template error: {0}")]
    Template(String),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidQuery(_) | Self::MissingClient => StatusCode::BAD_REQUEST,
            Self::Moderation(_) => StatusCode::CONFLICT,
            Self::Routing(_) | Self::Template(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = serde_json::json!({
            "error": self.to_string(),
            "status": status.as_u16(),
        });

        (status, axum::Json(body)).into_response()
    }
}
