//! Markdown tables with per-column alignment.
//!
//! Unlike [`render`](crate::render), a [`Table`] trusts its input: cells are
//! emitted exactly as given and row lengths are not checked against the
//! column count. Data rows join their cells with `" |"`.

use crate::persist::write_markdown;
use crate::types::Column;
use std::fmt;
use std::io;
use std::path::Path;

/// Separator placed between cells of a data row.
pub const ROW_CELL_SEPARATOR: &str = " |";

/// A markdown table built from [`Column`]s and prepared rows.
///
/// A table without rows is empty: it renders to `""` and [`has_rows`]
/// returns false, so callers can skip saving it.
///
/// [`has_rows`]: Table::has_rows
///
/// # Example
///
/// ```rust
/// use standout_mdtable::{Column, Table};
///
/// let table = Table::new(
///     [Column::new("X").center(), Column::new("Y").right()],
///     [["1", "2"]],
/// );
///
/// assert!(table.has_rows());
/// assert_eq!(table.render(), "X|Y\n:-:|-:\n1 |2");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<Column>,
    data: Vec<Vec<String>>,
}

impl Table {
    /// Create a table from columns and rows.
    ///
    /// Columns may be given as [`Column`]s or as bare header strings
    /// (left aligned).
    pub fn new<C, D, R>(columns: C, data: D) -> Self
    where
        C: IntoIterator,
        C::Item: Into<Column>,
        D: IntoIterator<Item = R>,
        R: IntoIterator,
        R::Item: Into<String>,
    {
        Table {
            columns: columns.into_iter().map(Into::into).collect(),
            data: data
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// The column definitions, in order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// The data rows, as given.
    pub fn data(&self) -> &[Vec<String>] {
        &self.data
    }

    /// Header labels, in column order.
    pub fn headers(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.header.as_str()).collect()
    }

    /// Alignment markers (`-`, `:-:`, `-:`), in column order.
    pub fn alignments(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.align.marker()).collect()
    }

    /// True when the table has at least one data row.
    pub fn has_rows(&self) -> bool {
        !self.data.is_empty()
    }

    /// True when the table has no data rows.
    pub fn is_empty(&self) -> bool {
        !self.has_rows()
    }

    /// Renders the table, or returns an empty string if there are no rows.
    pub fn render(&self) -> String {
        if self.is_empty() {
            return String::new();
        }

        let mut lines = Vec::with_capacity(self.data.len() + 2);
        lines.push(self.headers().join("|"));
        lines.push(self.alignments().join("|"));
        lines.extend(self.data.iter().map(|row| row.join(ROW_CELL_SEPARATOR)));
        lines.join("\n")
    }

    /// Renders the table and writes it to `path`.
    ///
    /// The file is truncated before writing. A missing parent directory is
    /// created. An empty table writes an empty file.
    ///
    /// # Errors
    ///
    /// Returns the underlying [`io::Error`] if the directory cannot be created
    /// or the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> io::Result<()> {
        write_markdown(path, &self.to_string())
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
