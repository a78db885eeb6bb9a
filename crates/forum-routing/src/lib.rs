//! Routing primitives for forum thread pages.
//!
//! - [`urls`] -- Builders for thread URLs and their path templates
//! - [`pattern`] -- Path templates with `:param` placeholders and exact matching
//! - [`switch`] -- Ordered first-match switch over patterns
//! - [`error`] -- Routing error type
//!
//! Everything here is pure: no I/O and no shared state. Matching a path
//! never fails, it either binds parameters or it does not.

pub mod error;
pub mod pattern;
pub mod switch;
pub mod urls;

pub use error::RoutingError;
pub use pattern::{PathPattern, RouteMatch};
pub use switch::{Resolved, Switch};
