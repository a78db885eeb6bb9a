//! Axum router construction for the forum web server.
//!
//! Assembles the API routes and mounts the thread page as the fallback,
//! so every other path is routed by [`ThreadPage`].
//!
//! [`ThreadPage`]: crate::thread_page::ThreadPage

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::moderation_api;
use crate::state::AppState;

/// Build the complete Axum router.
///
/// The router includes:
/// - `GET /api/thread-page` -- view tree for a location
/// - `GET /api/moderation` -- moderation modal state
/// - `POST /api/moderation/{open,close,delete,move}` -- modal transitions
/// - `GET` fallback -- thread page HTML or redirect; other methods get 405
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        // View tree
        .route("/api/thread-page", get(handlers::thread_page_tree))
        // Moderation modal
        .route("/api/moderation", get(moderation_api::status))
        .route("/api/moderation/open", post(moderation_api::open))
        .route("/api/moderation/close", post(moderation_api::close))
        .route("/api/moderation/delete", post(moderation_api::delete))
        .route("/api/moderation/move", post(moderation_api::move_thread))
        // Thread pages
        .fallback(get(handlers::thread_page))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
