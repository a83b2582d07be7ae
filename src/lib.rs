//! Library for converting a small Markdown dialect to HTML.
//!
//! Conversion is line oriented. Each non-blank line becomes one HTML fragment:
//! an ATX heading, a list item, or a paragraph with inline rewrites applied.
//! The document driver wraps runs of list items in `<ul>` or `<ol>` tags.

#[macro_use]
mod macros;
pub mod headings;
pub mod inline;
pub mod io;
pub mod lists;
pub mod process;
#[doc(hidden)]
pub mod test_utils;
pub mod textproc;
pub mod transform;

pub use io::{ConvertError, convert_file};
pub use lists::ListKind;
pub use process::{ListState, convert_lines, convert_str};
pub use transform::{Fragment, transform_line};
