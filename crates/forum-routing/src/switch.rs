//! Ordered first-match switch.
//!
//! A [`Switch`] is a list of `(name, pattern, handler)` entries evaluated
//! top to bottom. The first pattern that matches wins and its handler
//! produces the output; later entries are never consulted. Entry order is
//! therefore significant: a specific pattern such as `/t/:slug/:id/1/` must
//! come before the general `/t/:slug/:id/:page/` or it is unreachable.
//! [`Switch::validate`] detects that mistake.

use core::fmt;

use tracing::debug;

use crate::error::RoutingError;
use crate::pattern::{PathPattern, RouteMatch};

/// Produces a switch output from the parameters of a match.
pub type Handler<V> = Box<dyn Fn(&RouteMatch) -> V + Send + Sync>;

struct Entry<V> {
    name: &'static str,
    pattern: PathPattern,
    handler: Handler<V>,
}

/// The winning entry of a resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved<V> {
    /// Name of the entry that matched.
    pub name: &'static str,
    /// Parameters bound by the entry's pattern.
    pub route_match: RouteMatch,
    /// What the entry's handler produced.
    pub output: V,
}

/// Ordered list of patterns with their handlers.
pub struct Switch<V> {
    entries: Vec<Entry<V>>,
}

impl<V> Switch<V> {
    /// Create an empty switch.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an entry. It is evaluated after every entry added before it.
    #[must_use]
    pub fn route<F>(mut self, name: &'static str, pattern: PathPattern, handler: F) -> Self
    where
        F: Fn(&RouteMatch) -> V + Send + Sync + 'static,
    {
        self.entries.push(Entry {
            name,
            pattern,
            handler: Box::new(handler),
        });
        self
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the switch has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry names in evaluation order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.name)
    }

    /// Reject entries that an earlier entry fully shadows.
    pub fn validate(&self) -> Result<(), RoutingError> {
        for (i, later) in self.entries.iter().enumerate() {
            if let Some(earlier) = self
                .entries
                .iter()
                .take(i)
                .find(|earlier| earlier.pattern.shadows(&later.pattern))
            {
                return Err(RoutingError::Shadowed {
                    route: later.name.to_owned(),
                    by: earlier.name.to_owned(),
                });
            }
        }
        Ok(())
    }

    /// Evaluate entries in order and run the handler of the first match.
    pub fn resolve(&self, path: &str) -> Option<Resolved<V>> {
        let resolved = self.entries.iter().find_map(|entry| {
            entry.pattern.matches(path).map(|route_match| {
                let output = (entry.handler)(&route_match);
                Resolved {
                    name: entry.name,
                    route_match,
                    output,
                }
            })
        });

        match &resolved {
            Some(r) => debug!(path, route = r.name, params = ?r.route_match.params, "route matched"),
            None => debug!(path, "no route matched"),
        }

        resolved
    }
}

impl<V> Default for Switch<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> fmt::Debug for Switch<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list()
            .entries(
                self.entries
                    .iter()
                    .map(|e| (e.name, e.pattern.template())),
            )
            .finish()
    }
}
