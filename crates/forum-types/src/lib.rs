//! Shared type definitions for forum thread routing.
//!
//! Types defined here are used by the routing library and the web
//! service, and flow downstream to `TypeScript` via `ts-rs` for the
//! forum client.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe numeric identifiers
//! - [`slug`] -- Validated human-readable URL slugs
//! - [`thread`] -- Thread references (id + slug)

pub mod ids;
pub mod slug;
pub mod thread;

pub use ids::ThreadId;
pub use slug::{Slug, SlugError};
pub use thread::ThreadRef;
