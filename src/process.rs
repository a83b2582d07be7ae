//! Document-level conversion.
//!
//! Lines are converted one at a time in order. The only state carried across
//! lines is the currently open list wrapper, which is closed by a blank line,
//! by a non-list line, by an item of the other kind, or by the end of input.

use tracing::debug;

use crate::{
    lists::ListKind,
    textproc::{split_lines, trim_line},
    transform::transform_line,
};

/// The list wrapper currently open in the output, if any.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ListState {
    open: Option<ListKind>,
}

impl ListState {
    #[must_use]
    pub fn open_kind(self) -> Option<ListKind> {
        self.open
    }

    /// Close the open wrapper, returning its closing tag.
    pub fn close(&mut self) -> Option<&'static str> {
        let kind = self.open.take()?;
        debug!(?kind, "closing list");
        Some(kind.close_tag())
    }

    /// Move to the wrapper required by the next fragment.
    ///
    /// Pushes any closing and opening tags needed onto `out`. A wrapper of the
    /// other kind is closed before the new one opens.
    pub fn transition(&mut self, wanted: Option<ListKind>, out: &mut Vec<String>) {
        if self.open == wanted {
            return;
        }
        if let Some(tag) = self.close() {
            out.push(tag.to_string());
        }
        if let Some(kind) = wanted {
            debug!(?kind, "opening list");
            out.push(kind.open_tag().to_string());
            self.open = Some(kind);
        }
    }
}

/// Convert Markdown lines to HTML lines.
///
/// Blank lines produce no output of their own.
///
/// # Examples
///
/// ```
/// use mdhtml::convert_lines;
///
/// let lines = vec!["- a".to_string(), "- b".to_string()];
/// assert_eq!(
///     convert_lines(&lines),
///     vec!["<ul>", "<li>a</li>", "<li>b</li>", "</ul>"]
/// );
/// ```
#[must_use]
pub fn convert_lines(lines: &[String]) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len());
    let mut state = ListState::default();

    for line in lines {
        let line = trim_line(line);
        if line.is_empty() {
            if let Some(tag) = state.close() {
                out.push(tag.to_string());
            }
            continue;
        }
        let fragment = transform_line(line);
        state.transition(fragment.list, &mut out);
        out.push(fragment.html);
    }

    if let Some(tag) = state.close() {
        out.push(tag.to_string());
    }
    out
}

/// Convert a whole Markdown document to HTML text.
///
/// Lines break on `\n`, `\r\n` or a lone `\r`. Every emitted line ends with `\n`; a document with no content converts to
/// an empty string.
#[must_use]
pub fn convert_str(text: &str) -> String {
    convert_lines(&split_lines(text))
        .into_iter()
        .map(|line| line + "\n")
        .collect()
}
