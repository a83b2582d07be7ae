//! Line splitting and trimming shared by the converters.

/// Split `text` into lines on `\n`, `\r\n` and a lone `\r`.
///
/// A trailing line break does not produce an empty final line.
///
/// # Examples
///
/// ```
/// use mdhtml::textproc::split_lines;
///
/// assert_eq!(split_lines("a\rb\r\nc\n"), vec!["a", "b", "c"]);
/// ```
#[must_use]
pub fn split_lines(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n")
        .replace('\r', "\n")
        .lines()
        .map(str::to_string)
        .collect()
}

fn is_blank_char(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Trim whitespace and the ASCII separator controls `\x1c`..=`\x1f` from both ends.
#[must_use]
pub fn trim_line(line: &str) -> &str {
    line.trim_matches(is_blank_char)
}
