//! `ThreadRoute`: the render target for matched thread URLs.
//!
//! It receives the route match of the current location and passes the
//! bound id, slug, and page through unvalidated. Resolving the thread and
//! rejecting bad page numbers belongs to whatever consumes the view.

use forum_routing::RouteMatch;
use forum_routing::urls::{self, ID_PARAM, PAGE_PARAM, SLUG_PARAM};
use forum_types::{Slug, ThreadId, ThreadRef};
use serde::Serialize;

use crate::view::View;

/// Parameters a thread view is rendered with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadRouteProps {
    /// Raw id segment.
    pub id: String,
    /// Raw slug segment.
    pub slug: String,
    /// Raw page segment; absent on the canonical URL.
    pub page: Option<String>,
}

impl ThreadRouteProps {
    /// Read the props out of a route match.
    pub fn from_match(route_match: &RouteMatch) -> Self {
        Self {
            id: route_match.param(ID_PARAM).unwrap_or_default().to_owned(),
            slug: route_match.param(SLUG_PARAM).unwrap_or_default().to_owned(),
            page: route_match.param(PAGE_PARAM).map(str::to_owned),
        }
    }

    /// The id as a typed identifier, if it is numeric.
    pub fn thread_id(&self) -> Option<ThreadId> {
        self.id.parse().ok()
    }

    /// The thread addressed, if the id is numeric and the slug well formed.
    pub fn thread_ref(&self) -> Option<ThreadRef> {
        let slug = Slug::parse(&self.slug).ok()?;
        Some(ThreadRef::new(self.thread_id()?, slug))
    }

    /// Canonical URL of the thread addressed, built from the typed ref.
    pub fn canonical_url(&self) -> Option<String> {
        self.thread_ref().map(|thread| urls::thread_ref(&thread))
    }

    /// Page to display: 1 when absent, `None` when not a positive number.
    pub fn page_number(&self) -> Option<u32> {
        match self.page.as_deref() {
            None => Some(1),
            Some(page) => page.parse().ok().filter(|n| *n > 0),
        }
    }
}

/// Render the thread view for a route match.
pub fn thread_route(route_match: &RouteMatch) -> View {
    View::Thread {
        props: ThreadRouteProps::from_match(route_match),
    }
}
