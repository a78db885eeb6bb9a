//! Integration tests for the forum web endpoints.
//!
//! Tests use Axum's `Router` directly via `tower::ServiceExt` without
//! starting a TCP server.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use forum_web::CLIENT_HEADER;
use forum_web::router::build_router;
use forum_web::state::AppState;
use serde_json::Value;
use tower::ServiceExt;

fn make_router() -> Router {
    build_router(Arc::new(AppState::new().unwrap()))
}

async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get(router: &Router, uri: &str) -> axum::response::Response {
    router
        .clone()
        .oneshot(Request::get(uri).body(Body::empty()).unwrap())
        .await
        .unwrap()
}

async fn get_as(router: &Router, client: &str, uri: &str) -> axum::response::Response {
    router
        .clone()
        .oneshot(
            Request::get(uri)
                .header(CLIENT_HEADER, client)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn post_json(
    router: &Router,
    client: &str,
    uri: &str,
    body: Value,
) -> axum::response::Response {
    router
        .clone()
        .oneshot(
            Request::post(uri)
                .header(CLIENT_HEADER, client)
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap()
}

async fn post_empty(router: &Router, client: &str, uri: &str) -> axum::response::Response {
    router
        .clone()
        .oneshot(
            Request::post(uri)
                .header(CLIENT_HEADER, client)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

// =========================================================================
// Thread pages
// =========================================================================

#[tokio::test]
async fn test_canonical_thread_returns_html() {
    let router = make_router();
    let response = get(&router, "/t/hello-world/42/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(content_type.contains("text/html"));

    let html = body_to_string(response.into_body()).await;
    assert!(html.contains("Thread 42"));
    assert!(html.contains("Page 1"));
}

#[tokio::test]
async fn test_first_page_redirects_to_canonical() {
    let router = make_router();
    let response = get(&router, "/t/hello-world/42/1/").await;

    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap();
    assert_eq!(location, "/t/hello-world/42/");
}

#[tokio::test]
async fn test_numbered_page_renders_page() {
    let router = make_router();
    let response = get(&router, "/t/hello-world/42/2/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_to_string(response.into_body()).await;
    assert!(html.contains("Page 2"));
}

#[tokio::test]
async fn test_last_reply_renders_placeholder() {
    let router = make_router();
    let response = get(&router, "/t/hello-world/42/last/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_to_string(response.into_body()).await;
    assert!(html.contains("Thread last reply"));
    assert!(!html.contains("Thread 42"));
}

#[tokio::test]
async fn test_first_page_redirect_drops_query_string() {
    let router = make_router();
    let response = get(&router, "/t/a/1/1/?x=y").await;

    assert_eq!(response.status(), StatusCode::PERMANENT_REDIRECT);
    let location = response.headers().get(header::LOCATION).unwrap();
    assert_eq!(location.to_str().unwrap(), "/t/a/1/");
}

#[tokio::test]
async fn test_canonical_without_trailing_slash_renders_thread() {
    let router = make_router();
    let response = get(&router, "/t/a/1").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_to_string(response.into_body()).await;
    assert!(html.contains("Thread 1"));
    assert!(html.contains(r#"data-route="thread""#));
}

#[tokio::test]
async fn test_canonical_with_query_string_renders_thread() {
    let router = make_router();
    let response = get(&router, "/t/a/1/?sort=new").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_to_string(response.into_body()).await;
    assert!(html.contains("Thread 1"));
}

#[tokio::test]
async fn test_uppercase_last_segment_renders_placeholder() {
    let router = make_router();
    let response = get(&router, "/t/a/1/LAST/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_to_string(response.into_body()).await;
    assert!(html.contains("Thread last reply"));
}

#[tokio::test]
async fn test_thread_page_rejects_non_get_methods() {
    let router = make_router();
    let response = router
        .clone()
        .oneshot(Request::post("/t/a/1/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn test_unmatched_path_returns_404_with_page_shell() {
    let router = make_router();
    let response = get(&router, "/c/general/").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let html = body_to_string(response.into_body()).await;
    assert!(html.contains("thread-moderation"));
}

// =========================================================================
// View tree API
// =========================================================================

#[tokio::test]
async fn test_thread_page_tree_for_paged_url() {
    let router = make_router();
    let response = get(&router, "/api/thread-page?path=/t/a/7/2/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["matched"], "thread_page");
    assert!(json["redirect"].is_null());
    assert_eq!(json["view"]["kind"], "provider");

    let children = json["view"]["children"].as_array().unwrap();
    assert_eq!(children.len(), 5);
    let switch = &children[4];
    assert_eq!(switch["kind"], "switch");
    assert_eq!(switch["children"][0]["kind"], "thread");
    assert_eq!(switch["children"][0]["props"]["page"], "2");
}

#[tokio::test]
async fn test_thread_page_tree_reports_redirect() {
    let router = make_router();
    let response = get(&router, "/api/thread-page?path=/t/a/7/1/").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["matched"], "thread_first_page");
    assert_eq!(json["redirect"], "/t/a/7/");
    assert!(json["canonical"].is_null());
}

#[tokio::test]
async fn test_thread_page_tree_reports_canonical_url() {
    let router = make_router();
    let response = get(&router, "/api/thread-page?path=/t/intro/7/3/").await;

    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["canonical"], "/t/intro/7/");
}

#[tokio::test]
async fn test_thread_page_tree_requires_path() {
    let router = make_router();
    let response = get(&router, "/api/thread-page").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], 400);
}

// =========================================================================
// Moderation modal
// =========================================================================

#[tokio::test]
async fn test_moderation_starts_closed() {
    let router = make_router();
    let response = get_as(&router, "alice", "/api/moderation").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["state"]["modal"], "closed");
}

#[tokio::test]
async fn test_moderation_flow_is_visible_on_thread_page() {
    let router = make_router();

    let response = post_json(
        &router,
        "alice",
        "/api/moderation/open",
        serde_json::json!({ "thread_id": 42 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["state"]["modal"], "options");
    assert_eq!(json["state"]["thread"], 42);

    let response = get_as(&router, "alice", "/t/a/42/").await;
    let html = body_to_string(response.into_body()).await;
    assert!(html.contains("Moderate thread 42"));

    let response = post_empty(&router, "alice", "/api/moderation/move").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["state"]["modal"], "move");

    let response = post_empty(&router, "alice", "/api/moderation/close").await;
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["state"]["modal"], "closed");
}

#[tokio::test]
async fn test_open_modal_is_private_to_its_client() {
    let router = make_router();
    let response = post_json(
        &router,
        "alice",
        "/api/moderation/open",
        serde_json::json!({ "thread_id": 42 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_as(&router, "bob", "/t/other/7/").await;
    let html = body_to_string(response.into_body()).await;
    assert!(!html.contains("Moderate thread 42"));

    let html = body_to_string(get(&router, "/t/other/7/").await.into_body()).await;
    assert!(!html.contains("Moderate thread 42"));

    let response = get_as(&router, "bob", "/api/moderation").await;
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["state"]["modal"], "closed");

    let response = post_empty(&router, "bob", "/api/moderation/delete").await;
    assert_eq!(response.status(), StatusCode::CONFLICT);

    let response = get_as(&router, "alice", "/api/moderation").await;
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["state"]["modal"], "options");
}

#[tokio::test]
async fn test_moderation_requires_client_header() {
    let router = make_router();
    let response = router
        .clone()
        .oneshot(
            Request::post("/api/moderation/open")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"thread_id":42}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], 400);
}

#[tokio::test]
async fn test_delete_without_open_modal_conflicts() {
    let router = make_router();
    let response = post_empty(&router, "alice", "/api/moderation/delete").await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_to_json(response.into_body()).await;
    assert_eq!(json["status"], 409);
}
