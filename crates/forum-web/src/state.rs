//! Shared application state for the forum web server.

use std::sync::Arc;

use crate::error::WebError;
use crate::moderation::ModerationSessions;
use crate::render::PageRenderer;
use crate::thread_page::ThreadPage;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor. The
/// route table and template are built once and shared by every request;
/// moderation context is kept per client.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The thread routing component.
    pub thread_page: Arc<ThreadPage>,
    /// Compiled page template.
    pub renderer: Arc<PageRenderer>,
    /// Moderation-modal contexts, one per client.
    pub moderation: Arc<ModerationSessions>,
}

impl AppState {
    /// Build the state with no moderation contexts yet.
    pub fn new() -> Result<Self, WebError> {
        Ok(Self {
            thread_page: Arc::new(ThreadPage::new()?),
            renderer: Arc::new(PageRenderer::new()?),
            moderation: Arc::new(ModerationSessions::new()),
        })
    }
}
