//! Thread URL builders.
//!
//! Each builder formats its arguments verbatim, so the same function
//! yields a concrete URL (`thread(42, "hello")`) or a path template when
//! given the placeholders (`thread(ID, SLUG)`).
//!
//! | Builder | Shape |
//! |---------|-------|
//! | [`thread`] | `/t/{slug}/{id}/` |
//! | [`thread_page`] | `/t/{slug}/{id}/{page}/` |
//! | [`thread_last_reply`] | `/t/{slug}/{id}/last/` |

use core::fmt::Display;

use forum_types::ThreadRef;

/// Placeholder for the thread id in path templates.
pub const ID: &str = ":id";

/// Placeholder for the thread slug in path templates.
pub const SLUG: &str = ":slug";

/// Placeholder for the page number in path templates.
pub const PAGE: &str = ":page";

/// Name under which a match binds [`ID`].
pub const ID_PARAM: &str = "id";

/// Name under which a match binds [`SLUG`].
pub const SLUG_PARAM: &str = "slug";

/// Name under which a match binds [`PAGE`].
pub const PAGE_PARAM: &str = "page";

/// Canonical thread URL, the authoritative address of page 1.
pub fn thread(id: impl Display, slug: impl Display) -> String {
    format!("/t/{slug}/{id}/")
}

/// URL of a numbered thread page. Page 1 has its own legacy form here;
/// [`thread`] is canonical for it.
pub fn thread_page(id: impl Display, slug: impl Display, page: impl Display) -> String {
    let mut url = thread(id, slug);
    url.push_str(&format!("{page}/"));
    url
}

/// URL that jumps to the last reply of a thread.
pub fn thread_last_reply(id: impl Display, slug: impl Display) -> String {
    format!("/t/{slug}/{id}/last/")
}

/// Canonical URL of a typed thread reference.
pub fn thread_ref(thread_ref: &ThreadRef) -> String {
    thread(thread_ref.id, &thread_ref.slug)
}
