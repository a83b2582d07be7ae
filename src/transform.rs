//! Per-line conversion from Markdown to an HTML fragment.

use crate::{
    headings::render_heading,
    inline::{apply_emphasis, digest_spans, strip_spans},
    lists::{ListKind, render_list_item},
    textproc::trim_line,
};

/// One rendered line of HTML and the list wrapper it needs, if any.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fragment {
    pub html: String,
    pub list: Option<ListKind>,
}

impl Fragment {
    fn block(html: String) -> Self {
        Self { html, list: None }
    }
}

/// Convert a single trimmed, non-blank line.
///
/// Headings take priority over list items, which take priority over
/// paragraphs. Only paragraphs go through the inline rewrites. The function is
/// total: malformed markup degrades to partially rewritten text.
///
/// # Examples
///
/// ```
/// use mdhtml::{ListKind, transform_line};
///
/// assert_eq!(transform_line("# Title").html, "<h1>Title</h1>");
/// assert_eq!(transform_line("- item").list, Some(ListKind::Unordered));
/// assert_eq!(transform_line("((cool))").html, "<p>ool</p>");
/// ```
#[must_use]
pub fn transform_line(line: &str) -> Fragment {
    if let Some(html) = render_heading(line) {
        return Fragment::block(html);
    }
    if let Some((html, kind)) = render_list_item(line) {
        return Fragment {
            html,
            list: Some(kind),
        };
    }
    Fragment::block(render_paragraph(line))
}

fn render_paragraph(line: &str) -> String {
    let text = apply_emphasis(line);
    let text = digest_spans(&text);
    let text = strip_spans(&text);
    format!("<p>{}</p>", trim_line(&text))
}
