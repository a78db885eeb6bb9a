//! Page and view-tree handlers.
//!
//! # Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | `GET` | any unrouted path | Thread page as HTML, or a redirect |
//! | `GET` | `/api/thread-page?path=` | Thread page view tree as JSON |

use std::sync::Arc;

use axum::Json;
use axum::extract::{Query, State};
use axum::http::{HeaderMap, StatusCode, Uri};
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::client::client_id;
use crate::error::WebError;
use crate::state::AppState;
use crate::view::View;

/// Query parameters for `GET /api/thread-page`.
#[derive(Debug, Deserialize)]
pub struct ThreadPageQuery {
    /// Location to route, e.g. `/t/hello/42/2/`.
    pub path: Option<String>,
}

/// Response body for `GET /api/thread-page`.
#[derive(Debug, Serialize)]
pub struct ThreadPageResponse {
    /// The location that was routed.
    pub path: String,
    /// Name of the route that matched.
    pub matched: Option<&'static str>,
    /// Redirect target, when the route redirects.
    pub redirect: Option<String>,
    /// Canonical URL of the thread shown, when its id and slug are valid.
    pub canonical: Option<String>,
    /// The full view tree.
    pub view: View,
}

// ---------------------------------------------------------------------------
// GET <fallback> -- thread page
// ---------------------------------------------------------------------------

/// Route the request path through the thread page and answer with HTML.
///
/// A redirect in the view tree becomes a permanent redirect response. A
/// path no route matches still renders the page shell, with status 404.
/// The moderation controls reflect the requesting client's context only.
pub async fn thread_page(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    uri: Uri,
) -> Result<Response, WebError> {
    let path = uri.path();
    let moderation = state.moderation.for_render(client_id(&headers)).await;
    let view = state.thread_page.render(path, &moderation);

    if let Some(target) = view.redirect_target() {
        info!(from = path, to = target, "redirecting to canonical thread url");
        return Ok(Redirect::permanent(target).into_response());
    }

    let status = if view.matched_route().is_some() {
        StatusCode::OK
    } else {
        StatusCode::NOT_FOUND
    };
    let html = state.renderer.render(path, &view)?;
    Ok((status, Html(html)).into_response())
}

// ---------------------------------------------------------------------------
// GET /api/thread-page
// ---------------------------------------------------------------------------

/// Route `path` and return the resulting view tree.
pub async fn thread_page_tree(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Query(query): Query<ThreadPageQuery>,
) -> Result<Json<ThreadPageResponse>, WebError> {
    let path = query
        .path
        .ok_or_else(|| WebError::InvalidQuery("missing `path` parameter".to_owned()))?;
    let moderation = state.moderation.for_render(client_id(&headers)).await;
    let view = state.thread_page.render(&path, &moderation);

    Ok(Json(ThreadPageResponse {
        matched: view.matched_route(),
        redirect: view.redirect_target().map(str::to_owned),
        canonical: view.canonical_url(),
        path,
        view,
    }))
}
