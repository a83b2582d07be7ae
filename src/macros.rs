//! Helper macros used across the crate.

/// Lazily compile a [`Regex`] with a custom panic message.
///
/// The surrounding module must import `std::sync::LazyLock` and
/// `regex::Regex`.
///
/// # Examples
///
/// ```
/// use std::sync::LazyLock;
///
/// use regex::Regex;
/// static HASHES: LazyLock<Regex> = mdhtml::lazy_regex!(r"^#{1,6} ", "hash prefix");
/// assert!(HASHES.is_match("## Title"));
/// assert!(!HASHES.is_match("##Title"));
/// ```
#[macro_export]
macro_rules! lazy_regex {
    ($pattern:expr, $msg:expr $(,)?) => {
        LazyLock::new(|| Regex::new($pattern).expect($msg))
    };
}
