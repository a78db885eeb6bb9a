//! Moderation-modal REST handlers.
//!
//! These endpoints drive the calling client's [`ModerationHandle`], the
//! one that client's rendered thread pages observe. Every request names
//! its client with the `x-forum-client` header; requests without one are
//! rejected with 400.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | `/api/moderation` | Current modal state |
//! | `POST` | `/api/moderation/open` | Show options for a thread |
//! | `POST` | `/api/moderation/close` | Hide the modal |
//! | `POST` | `/api/moderation/delete` | Show the delete confirmation |
//! | `POST` | `/api/moderation/move` | Show the move form |
//!
//! [`ModerationHandle`]: crate::moderation::ModerationHandle

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::response::IntoResponse;
use forum_types::ThreadId;

use crate::client::require_client_id;
use crate::error::WebError;
use crate::moderation::ModalState;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /api/moderation/open`.
#[derive(Debug, serde::Deserialize)]
pub struct OpenRequest {
    /// Thread to moderate.
    pub thread_id: ThreadId,
}

/// Response carrying the modal state after the request.
#[derive(Debug, serde::Serialize)]
struct ModerationResponse {
    /// Whether the operation succeeded.
    ok: bool,
    /// Modal state after the operation.
    state: ModalState,
}

const fn respond(state: ModalState) -> Json<ModerationResponse> {
    Json(ModerationResponse { ok: true, state })
}

// ---------------------------------------------------------------------------
// GET /api/moderation
// ---------------------------------------------------------------------------

/// Current modal state. Clients that never opened the modal see it closed.
pub async fn status(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, WebError> {
    let client = require_client_id(&headers)?;
    let handle = state.moderation.get(client).await.unwrap_or_default();
    Ok(respond(handle.state()))
}

// ---------------------------------------------------------------------------
// POST /api/moderation/open
// ---------------------------------------------------------------------------

/// Open the moderation options for a thread.
pub async fn open(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(req): Json<OpenRequest>,
) -> Result<impl IntoResponse, WebError> {
    let client = require_client_id(&headers)?;
    let handle = state.moderation.get_or_create(client).await;
    Ok(respond(handle.open(req.thread_id)))
}

// ---------------------------------------------------------------------------
// POST /api/moderation/close
// ---------------------------------------------------------------------------

/// Close the modal.
pub async fn close(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, WebError> {
    let client = require_client_id(&headers)?;
    let modal = match state.moderation.get(client).await {
        Some(handle) => handle.close(),
        None => ModalState::Closed,
    };
    Ok(respond(modal))
}

// ---------------------------------------------------------------------------
// POST /api/moderation/delete
// ---------------------------------------------------------------------------

/// Switch the open modal to the delete confirmation.
pub async fn delete(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, WebError> {
    let client = require_client_id(&headers)?;
    let handle = state.moderation.get(client).await.unwrap_or_default();
    Ok(respond(handle.delete()?))
}

// ---------------------------------------------------------------------------
// POST /api/moderation/move
// ---------------------------------------------------------------------------

/// Switch the open modal to the move form.
pub async fn move_thread(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, WebError> {
    let client = require_client_id(&headers)?;
    let handle = state.moderation.get(client).await.unwrap_or_default();
    Ok(respond(handle.move_thread()?))
}
