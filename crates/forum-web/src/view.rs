//! The view tree produced by thread page rendering.
//!
//! A [`View`] is plain data: it can be serialized to JSON for the client,
//! rendered to HTML by [`crate::render::PageRenderer`], or inspected by
//! tests through the traversal helpers.

use serde::Serialize;

use crate::moderation::ModerationControl;
use crate::thread_route::ThreadRouteProps;

/// A node of the rendered view tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum View {
    /// Renders nothing.
    Empty,

    /// Literal text.
    Text {
        /// The text content.
        text: String,
    },

    /// The thread view, rendered by `ThreadRoute`.
    Thread {
        /// Route parameters the thread view was given.
        props: ThreadRouteProps,
    },

    /// Replace the current location with `to`.
    Redirect {
        /// Target URL.
        to: String,
    },

    /// Moderation-modal context provider.
    Provider {
        /// Controls followed by the routed content.
        children: Vec<View>,
    },

    /// One moderation-modal control, mounted whether or not it is active.
    Control {
        /// Which control this is.
        control: ModerationControl,
        /// Content; empty when the control is inactive.
        children: Vec<View>,
    },

    /// Result of a first-match switch.
    Switch {
        /// Name of the route that matched, if any.
        route: Option<&'static str>,
        /// Output of the matched route; empty when nothing matched.
        children: Vec<View>,
    },
}

impl View {
    /// Shorthand for a text node.
    pub fn text(text: impl Into<String>) -> Self {
        Self::Text { text: text.into() }
    }

    /// Direct children of this node.
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Provider { children }
            | Self::Control { children, .. }
            | Self::Switch { children, .. } => children.as_slice(),
            Self::Empty | Self::Text { .. } | Self::Thread { .. } | Self::Redirect { .. } => &[],
        }
    }

    /// Depth-first, pre-order iterator over this node and its descendants.
    pub fn walk(&self) -> Walk<'_> {
        Walk { stack: vec![self] }
    }

    /// Target of the first redirect in the tree.
    pub fn redirect_target(&self) -> Option<&str> {
        self.walk().find_map(|node| match node {
            Self::Redirect { to } => Some(to.as_str()),
            _ => None,
        })
    }

    /// Every thread view in the tree.
    pub fn thread_routes(&self) -> Vec<&ThreadRouteProps> {
        self.walk()
            .filter_map(|node| match node {
                Self::Thread { props } => Some(props),
                _ => None,
            })
            .collect()
    }

    /// Canonical URL of the first thread view in the tree.
    pub fn canonical_url(&self) -> Option<String> {
        self.thread_routes()
            .first()
            .and_then(|props| props.canonical_url())
    }

    /// How many times `control` is mounted in the tree.
    pub fn count_controls(&self, control: ModerationControl) -> usize {
        self.walk()
            .filter(|node| matches!(node, Self::Control { control: c, .. } if *c == control))
            .count()
    }

    /// The first switch node in the tree, as `(route, children)`.
    pub fn switch(&self) -> Option<(Option<&'static str>, &[Self])> {
        self.walk().find_map(|node| match node {
            Self::Switch { route, children } => Some((*route, children.as_slice())),
            _ => None,
        })
    }

    /// Name of the route the switch matched.
    pub fn matched_route(&self) -> Option<&'static str> {
        self.switch().and_then(|(route, _)| route)
    }
}

/// Iterator returned by [`View::walk`].
#[derive(Debug)]
pub struct Walk<'a> {
    stack: Vec<&'a View>,
}

impl<'a> Iterator for Walk<'a> {
    type Item = &'a View;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.stack.extend(node.children().iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> View {
        View::Provider {
            children: vec![
                View::Control {
                    control: ModerationControl::Close,
                    children: vec![],
                },
                View::Switch {
                    route: Some("thread_first_page"),
                    children: vec![View::Redirect {
                        to: "/t/a/1/".to_owned(),
                    }],
                },
            ],
        }
    }

    #[test]
    fn walk_is_preorder() {
        let kinds: Vec<_> = sample()
            .walk()
            .map(|v| match v {
                View::Provider { .. } => "provider",
                View::Control { .. } => "control",
                View::Switch { .. } => "switch",
                View::Redirect { .. } => "redirect",
                _ => "other",
            })
            .collect();
        assert_eq!(kinds, ["provider", "control", "switch", "redirect"]);
    }

    #[test]
    fn helpers_find_nested_nodes() {
        let view = sample();
        assert_eq!(view.redirect_target(), Some("/t/a/1/"));
        assert_eq!(view.matched_route(), Some("thread_first_page"));
        assert_eq!(view.count_controls(ModerationControl::Close), 1);
        assert_eq!(view.count_controls(ModerationControl::Move), 0);
        assert!(view.thread_routes().is_empty());
    }

    #[test]
    fn serializes_with_kind_tag() {
        let json = serde_json::to_value(View::text("hi")).ok();
        assert_eq!(
            json,
            Some(serde_json::json!({ "kind": "text", "text": "hi" }))
        );
    }
}
