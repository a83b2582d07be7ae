//! Flat list items and their wrapper tags.
//!
//! The dialect knows two single-level list markers: `- ` opens an unordered
//! item and `* ` opens an ordered one. There is no numbering syntax and no
//! nesting.

use crate::textproc::trim_line;

/// The kind of list wrapper a run of `<li>` items belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListKind {
    /// Items introduced by `- `, wrapped in `<ul>`.
    Unordered,
    /// Items introduced by `* `, wrapped in `<ol>`.
    Ordered,
}

impl ListKind {
    /// The tag that opens this wrapper.
    #[must_use]
    pub fn open_tag(self) -> &'static str {
        match self {
            Self::Unordered => "<ul>",
            Self::Ordered => "<ol>",
        }
    }

    /// The tag that closes this wrapper.
    #[must_use]
    pub fn close_tag(self) -> &'static str {
        match self {
            Self::Unordered => "</ul>",
            Self::Ordered => "</ol>",
        }
    }

    fn from_marker(line: &str) -> Option<(Self, &str)> {
        if let Some(rest) = line.strip_prefix("- ") {
            Some((Self::Unordered, rest))
        } else {
            line.strip_prefix("* ").map(|rest| (Self::Ordered, rest))
        }
    }
}

/// Render `line` as an `<li>` element when it starts with a list marker.
///
/// Returns the fragment together with the wrapper kind it requires.
///
/// # Examples
///
/// ```
/// use mdhtml::lists::{ListKind, render_list_item};
///
/// assert_eq!(
///     render_list_item("* first"),
///     Some(("<li>first</li>".to_string(), ListKind::Ordered))
/// );
/// assert_eq!(render_list_item("*emphasis*"), None);
/// ```
#[must_use]
pub fn render_list_item(line: &str) -> Option<(String, ListKind)> {
    let (kind, rest) = ListKind::from_marker(line)?;
    Some((format!("<li>{}</li>", trim_line(rest)), kind))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("- item", "<li>item</li>", ListKind::Unordered)]
    #[case("-   padded  ", "<li>padded</li>", ListKind::Unordered)]
    #[case("* item", "<li>item</li>", ListKind::Ordered)]
    #[case("* **kept**", "<li>**kept**</li>", ListKind::Ordered)]
    #[case("- [[abc]]", "<li>[[abc]]</li>", ListKind::Unordered)]
    fn renders_items(#[case] line: &str, #[case] html: &str, #[case] kind: ListKind) {
        assert_eq!(render_list_item(line), Some((html.to_string(), kind)));
    }

    #[rstest]
    #[case("-item")]
    #[case("*text*")]
    #[case("1. numbered")]
    #[case("+ plus")]
    fn ignores_other_lines(#[case] line: &str) {
        assert_eq!(render_list_item(line), None);
    }

    #[test]
    fn wrapper_tags_pair_up() {
        assert_eq!(ListKind::Unordered.open_tag(), "<ul>");
        assert_eq!(ListKind::Unordered.close_tag(), "</ul>");
        assert_eq!(ListKind::Ordered.open_tag(), "<ol>");
        assert_eq!(ListKind::Ordered.close_tag(), "</ol>");
    }
}
