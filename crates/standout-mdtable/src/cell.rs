//! Cell normalization.
//!
//! Markdown table rows live on a single line, so every cell is reduced to
//! its first line with surrounding whitespace removed. Headers and data cells
//! go through the same function so they stay aligned cell-for-cell.

/// Returns true for every character that starts a new line.
///
/// Besides `\n` and `\r` this covers the vertical tab, form feed, the
/// file/group/record separators, NEL and the Unicode line and paragraph
/// separators.
fn is_line_break(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r'
            | '\u{0b}'
            | '\u{0c}'
            | '\u{1c}'
            | '\u{1d}'
            | '\u{1e}'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// Whitespace removed around a cell: Unicode whitespace plus the unit
/// separator, which also counts as blank in Python-style `strip`.
fn is_cell_padding(c: char) -> bool {
    c.is_whitespace() || c == '\u{1f}'
}

/// Reduces a string to its first line, trimmed.
///
/// Content after the first line break is discarded. An empty input, or one
/// starting with a line break, yields an empty string.
///
/// # Example
///
/// ```rust
/// use standout_mdtable::one_line;
///
/// assert_eq!(one_line("a\nb\nc"), "a");
/// assert_eq!(one_line("  x  "), "x");
/// assert_eq!(one_line(""), "");
/// ```
pub fn one_line(s: &str) -> String {
    let first = match s.find(is_line_break) {
        Some(idx) => &s[..idx],
        None => s,
    };
    first.trim_matches(is_cell_padding).to_string()
}

/// Applies [`one_line`] to every cell of a row.
pub fn normalize_cells<I>(cells: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    cells.into_iter().map(|c| one_line(c.as_ref())).collect()
}
