//! HTML escaping for metadata text.
//!
//! The escaped set matches askama's HTML escaper, so text escaped here and
//! text escaped by the template are indistinguishable in the output.

use itertools::Itertools;

/// Line separator used when multi-line text is rendered inline.
pub const LINE_BREAK: &str = "<br/>";

/// Escape `&`, `<`, `>`, `"` and `'`.
pub fn escape_html(text: &str) -> String {
    text.chars().fold(String::with_capacity(text.len()), |mut out, c| {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            other => out.push(other),
        }
        out
    })
}

/// Escape every line and join them with [`LINE_BREAK`].
pub fn join_lines<I, S>(lines: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .map(|line| escape_html(line.as_ref()))
        .join(LINE_BREAK)
}
