//! ATX heading rendering.
//!
//! A heading is one to six `#` characters followed by a single space at the
//! very start of the line. Seven or more hashes fall through to paragraph
//! rendering, as does a run of hashes with no space after it. Heading text is
//! emitted verbatim: no inline rewrites apply inside headings.

use std::sync::LazyLock;

use regex::Regex;

use crate::textproc::trim_line;

static HEADING_RE: LazyLock<Regex> = crate::lazy_regex!(r"^(#{1,6}) ", "valid heading regex");

/// Render `line` as an `<hN>` element when it carries an ATX heading prefix.
///
/// # Examples
///
/// ```
/// use mdhtml::headings::render_heading;
///
/// assert_eq!(render_heading("## Setup"), Some("<h2>Setup</h2>".to_string()));
/// assert_eq!(render_heading("####### Too deep"), None);
/// ```
#[must_use]
pub fn render_heading(line: &str) -> Option<String> {
    let cap = HEADING_RE.captures(line)?;
    let level = cap.get(1)?.len();
    let rest = trim_line(&line[level + 1..]);
    Some(format!("<h{level}>{rest}</h{level}>"))
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case("# Title", "<h1>Title</h1>")]
    #[case("## Title", "<h2>Title</h2>")]
    #[case("### Title", "<h3>Title</h3>")]
    #[case("#### Title", "<h4>Title</h4>")]
    #[case("##### Title", "<h5>Title</h5>")]
    #[case("###### Title", "<h6>Title</h6>")]
    #[case("#    spaced out   ", "<h1>spaced out</h1>")]
    #[case("# **not bold**", "<h1>**not bold**</h1>")]
    #[case("## [[abc]] ((cool))", "<h2>[[abc]] ((cool))</h2>")]
    fn renders_levels(#[case] line: &str, #[case] expected: &str) {
        assert_eq!(render_heading(line).as_deref(), Some(expected));
    }

    #[rstest]
    #[case("####### seven")]
    #[case("#nospace")]
    #[case("###")]
    #[case(" # indented")]
    #[case("text # not a heading")]
    fn rejects_non_headings(#[case] line: &str) {
        assert_eq!(render_heading(line), None);
    }
}
