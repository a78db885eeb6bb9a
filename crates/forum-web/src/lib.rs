//! Thread page routing and the HTTP server that serves it.
//!
//! This crate provides:
//!
//! - **`ThreadPage`** -- the routing component mapping thread URLs to
//!   views inside a moderation-modal provider
//! - **Moderation modal context** -- an injected handle shared by the four
//!   modal controls, kept per client, plus REST endpoints that drive it
//! - **Rendering** -- view trees as JSON or server-rendered HTML
//! - **Server** -- Axum router, lifecycle, and YAML configuration
//!
//! # Architecture
//!
//! Routing is a pure function of the request path and the current modal
//! state: [`ThreadPage::render`] walks an ordered first-match switch from
//! `forum-routing` and returns a [`View`] tree. The HTTP layer only
//! decides how to deliver that tree (HTML, JSON, or a redirect response).

pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod moderation;
pub mod moderation_api;
pub mod render;
pub mod router;
pub mod server;
pub mod state;
pub mod thread_page;
pub mod thread_route;
pub mod view;

// Re-export primary types for convenience.
pub use client::CLIENT_HEADER;
pub use config::{ConfigError, ForumConfig, LogFormat, LoggingConfig};
pub use error::WebError;
pub use moderation::{
    ModalState, ModerationControl, ModerationError, ModerationHandle, ModerationSessions,
};
pub use router::build_router;
pub use server::{ServerConfig, ServerError, start_server};
pub use state::AppState;
pub use thread_page::{LAST_REPLY_PLACEHOLDER, ThreadPage};
pub use view::View;
