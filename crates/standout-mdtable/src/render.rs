//! Functional markdown rendering.
//!
//! [`render`] validates and normalizes raw input before emitting the table.
//! It never emits alignment markers: the separator line is always `-|-`.
//! Use [`Table`](crate::Table) for per-column alignment.

use crate::cell::normalize_cells;
use crate::error::{Result, TableError};

/// Separator line emitted by [`render`], regardless of column count.
pub const SEPARATOR_LINE: &str = "-|-";

/// Renders headers and rows into a markdown table.
///
/// Every header and cell is reduced to its trimmed first line. Each row must
/// have exactly as many cells as there are headers.
///
/// Returns `Ok(None)` when `matrix` has no rows: there is nothing to render,
/// and a header-only table would be malformed.
///
/// # Errors
///
/// Returns [`TableError::ShapeMismatch`] for the first row whose length
/// differs from the header count. No partial output is produced.
///
/// # Example
///
/// ```rust
/// use standout_mdtable::render;
///
/// let out = render(["Name", "Age"], [["Alice", "30"], ["Bob", "25"]]).unwrap();
/// assert_eq!(out.as_deref(), Some("Name|Age\n-|-\nAlice|30\nBob|25"));
/// ```
pub fn render<H, M, R>(headers: H, matrix: M) -> Result<Option<String>>
where
    H: IntoIterator,
    H::Item: AsRef<str>,
    M: IntoIterator<Item = R>,
    R: IntoIterator,
    R::Item: AsRef<str>,
{
    let headers = normalize_cells(headers);

    let rows = matrix
        .into_iter()
        .map(|row| {
            let cells = normalize_cells(row);
            if cells.len() != headers.len() {
                return Err(TableError::ShapeMismatch {
                    headers: headers.len(),
                    cells: cells.len(),
                    header_line: headers.join("|"),
                    row_line: cells.join("|"),
                });
            }
            Ok(cells.join("|"))
        })
        .collect::<Result<Vec<_>>>()?;

    if rows.is_empty() {
        return Ok(None);
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(headers.join("|"));
    lines.push(SEPARATOR_LINE.to_string());
    lines.extend(rows);
    Ok(Some(lines.join("\n")))
}
