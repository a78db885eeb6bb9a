//! Thread references.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::ids::ThreadId;
use crate::slug::Slug;

/// The pair that addresses a thread in URLs: its id and its slug.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export, export_to = "bindings/")]
pub struct ThreadRef {
    /// Backend primary key.
    pub id: ThreadId,
    /// Human-readable slug, usually derived from the title.
    pub slug: Slug,
}

impl ThreadRef {
    /// Build a reference from already validated parts.
    pub const fn new(id: ThreadId, slug: Slug) -> Self {
        Self { id, slug }
    }
}
