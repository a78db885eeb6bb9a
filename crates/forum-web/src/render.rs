//! HTML rendering of view trees via `minijinja`.
//!
//! The page template is compiled into the binary. Its name ends in
//! `.html` so auto-escaping is on for every interpolated value. Redirect
//! nodes produce no markup; the HTTP layer answers them with a redirect
//! response instead of a page. The canonical link is built from a numeric
//! id and a validated slug and is emitted unescaped.

use minijinja::{Environment, Value, context};

use crate::error::WebError;
use crate::view::View;

const PAGE_TEMPLATE_NAME: &str = "thread_page.html";
const PAGE_TEMPLATE: &str = include_str!("../templates/thread_page.html");

/// Renders view trees into full HTML documents.
#[derive(Debug)]
pub struct PageRenderer {
    env: Environment<'static>,
}

impl PageRenderer {
    /// Compile the page template.
    pub fn new() -> Result<Self, WebError> {
        let mut env = Environment::new();
        env.add_template(PAGE_TEMPLATE_NAME, PAGE_TEMPLATE)
            .map_err(|e| WebError::Template(format!("failed to add page template: {e}")))?;
        Ok(Self { env })
    }

    /// Render `view` as the document served at `location`.
    pub fn render(&self, location: &str, view: &View) -> Result<String, WebError> {
        self.env
            .get_template(PAGE_TEMPLATE_NAME)
            .map_err(|e| WebError::Template(format!("missing page template: {e}")))?
            .render(context! {
                title => location,
                canonical => view
                    .canonical_url()
                    .map_or(Value::UNDEFINED, Value::from_safe_string),
                nodes => [view],
            })
            .map_err(|e| WebError::Template(format!("page render failed: {e}")))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::moderation::ModerationHandle;
    use crate::thread_page::ThreadPage;

    fn render(path: &str) -> String {
        let view = ThreadPage::new()
            .unwrap()
            .render(path, &ModerationHandle::new());
        PageRenderer::new().unwrap().render(path, &view).unwrap()
    }

    #[test]
    fn renders_thread_view() {
        let html = render("/t/hello/42/3/");
        assert!(html.contains("Thread 42"));
        assert!(html.contains("Page 3"));
        assert!(html.contains("thread-moderation"));
        assert!(html.contains(r#"<link rel="canonical" href="/t/hello/42/">"#));
    }

    #[test]
    fn renders_last_reply_placeholder() {
        let html = render("/t/hello/42/last/");
        assert!(html.contains("Thread last reply"));
        assert!(!html.contains("Thread 42"));
        assert!(!html.contains("rel=\"canonical\""));
    }

    #[test]
    fn escapes_interpolated_text() {
        let view = View::text("<script>");
        let html = PageRenderer::new().unwrap().render("/", &view).unwrap();
        assert!(!html.contains("<script>"));
    }
}
