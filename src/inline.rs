//! Inline rewrites applied to paragraph text.
//!
//! Bold and emphasis use a deliberately naive two-pass scheme: every marker is
//! first replaced with the opening tag, then the first opening tag is flipped
//! to a closing one. For `**bold**` this yields `</b>bold<b>`, and odd marker
//! counts leave unbalanced tags. The custom `[[...]]` and `((...))` spans are
//! located with plain substring search and only the first span on a line is
//! rewritten.

use md5::{Digest, Md5};

/// Replace every `marker` with `<tag>`, then turn the first `<tag>` into `</tag>`.
///
/// Any `<tag>` already present in `line` takes part in the flip.
///
/// # Examples
///
/// ```
/// use mdhtml::inline::flip_markers;
///
/// assert_eq!(flip_markers("a **b** c", "**", "b"), "a </b>b<b> c");
/// ```
#[must_use]
pub fn flip_markers(line: &str, marker: &str, tag: &str) -> String {
    let open = format!("<{tag}>");
    line.replace(marker, &open)
        .replacen(&open, &format!("</{tag}>"), 1)
}

/// Apply the bold (`**`) and then emphasis (`__`) marker rewrites.
#[must_use]
pub fn apply_emphasis(line: &str) -> String {
    let bold = flip_markers(line, "**", "b");
    flip_markers(&bold, "__", "em")
}

/// Rewrite the first `open`...`close` span of `line` with `rewrite`.
///
/// The opening delimiter is the first `open` in the line and the closing one is
/// the first `close` anywhere in the line, so the search is not aware of
/// nesting. A `close` that precedes `open` yields empty content. Only the first
/// literal occurrence of `open + content + close` is replaced; when that text
/// is not present the line is returned unchanged.
#[must_use]
pub fn rewrite_span<F>(line: &str, open: &str, close: &str, rewrite: F) -> String
where
    F: FnOnce(&str) -> String,
{
    let (Some(start), Some(end)) = (line.find(open), line.find(close)) else {
        return line.to_string();
    };
    let content = line.get(start + open.len()..end).unwrap_or_default();
    let span = format!("{open}{content}{close}");
    if line.contains(&span) {
        line.replacen(&span, &rewrite(content), 1)
    } else {
        line.to_string()
    }
}

/// Replace the first `[[content]]` span with the lowercase hex MD5 of `content`.
///
/// # Examples
///
/// ```
/// use mdhtml::inline::digest_spans;
///
/// assert_eq!(digest_spans("[[abc]]"), "900150983cd24fb0d6963f7d28e17f72");
/// ```
#[must_use]
pub fn digest_spans(line: &str) -> String {
    rewrite_span(line, "[[", "]]", |content| {
        hex::encode(Md5::digest(content.as_bytes()))
    })
}

/// Replace the first `((content))` span with `content` minus every `c` and `C`.
#[must_use]
pub fn strip_spans(line: &str) -> String {
    rewrite_span(line, "((", "))", |content| {
        content.chars().filter(|ch| !matches!(ch, 'c' | 'C')).collect()
    })
}
