//! `ThreadPage`: picks the thread view for the current location.
//!
//! The moderation-modal provider and its four controls are mounted on
//! every render. Inside it a first-match switch tries, in order:
//!
//! | Route | Template | Output |
//! |-------|----------|--------|
//! | `thread` | `/t/:slug/:id/` | thread view, page 1 |
//! | `thread_last_reply` | `/t/:slug/:id/last/` | placeholder text |
//! | `thread_first_page` | `/t/:slug/:id/1/` | redirect to canonical |
//! | `thread_page` | `/t/:slug/:id/:page/` | thread view, given page |
//!
//! Both `last` and `1` must be tried before `:page`, which would
//! otherwise bind them as page numbers.

use forum_routing::urls::{self, ID, ID_PARAM, PAGE, SLUG, SLUG_PARAM};
use forum_routing::{PathPattern, RouteMatch, RoutingError, Switch};
use tracing::debug;

use crate::moderation::{self, ModerationHandle};
use crate::thread_route::thread_route;
use crate::view::View;

/// Content rendered for the last-reply URL.
pub const LAST_REPLY_PLACEHOLDER: &str = "Thread last reply";

/// Routing component for thread URLs.
#[derive(Debug)]
pub struct ThreadPage {
    switch: Switch<View>,
}

impl ThreadPage {
    /// Build the route switch and check its ordering.
    pub fn new() -> Result<Self, RoutingError> {
        let switch = Switch::new()
            .route("thread", PathPattern::parse(&urls::thread(ID, SLUG))?, thread_route)
            .route(
                "thread_last_reply",
                PathPattern::parse(&urls::thread_last_reply(ID, SLUG))?,
                |_| View::text(LAST_REPLY_PLACEHOLDER),
            )
            .route(
                "thread_first_page",
                PathPattern::parse(&urls::thread_page(ID, SLUG, 1))?,
                redirect_to_canonical,
            )
            .route(
                "thread_page",
                PathPattern::parse(&urls::thread_page(ID, SLUG, PAGE))?,
                thread_route,
            );
        switch.validate()?;
        debug!(routes = ?switch, "thread page routes ready");
        Ok(Self { switch })
    }

    /// Route names in evaluation order.
    pub fn routes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.switch.names()
    }

    /// Render the page for `location` with the given moderation context.
    pub fn render(&self, location: &str, moderation: &ModerationHandle) -> View {
        let content = match self.switch.resolve(location) {
            Some(resolved) => View::Switch {
                route: Some(resolved.name),
                children: vec![resolved.output],
            },
            None => View::Switch {
                route: None,
                children: Vec::new(),
            },
        };
        moderation::provider(moderation, content)
    }
}

/// Send the legacy page-1 URL to the canonical thread URL.
fn redirect_to_canonical(route_match: &RouteMatch) -> View {
    match (route_match.param(ID_PARAM), route_match.param(SLUG_PARAM)) {
        (Some(id), Some(slug)) => View::Redirect {
            to: urls::thread(id, slug),
        },
        _ => View::Empty,
    }
}
