//! # Standout MdTable - Markdown Table Rendering
//!
//! `standout-mdtable` turns a header row plus a matrix of string cells into a
//! plain-text markdown table. It only produces the one-line-cell dialect: no
//! cell spans, no multi-line cells, no padding.
//!
//! ## Two Ways to Render
//!
//! | Entry point | Normalizes cells | Checks row width | Alignment | Row join |
//! |-------------|------------------|------------------|-----------|----------|
//! | [`render`] | yes | yes ([`TableError::ShapeMismatch`]) | no, always `-\|-` | `\|` |
//! | [`Table`] | no | no | per column | `" \|"` |
//!
//! The two entry points are independent and intentionally produce different
//! bytes for the same input.
//!
//! ## Quick Start
//!
//! ```rust
//! use standout_mdtable::render;
//!
//! let md = render(
//!     ["Name", "Age"],
//!     [["Alice", "30"], ["Bob\nignored", "  25 "]],
//! ).unwrap();
//!
//! assert_eq!(md.as_deref(), Some("Name|Age\n-|-\nAlice|30\nBob|25"));
//! ```
//!
//! ## Aligned Tables
//!
//! ```rust
//! use standout_mdtable::{Column, Table};
//!
//! let table = Table::new(
//!     [Column::new("X").center(), Column::new("Y").align("right")],
//!     [["1", "2"]],
//! );
//!
//! if table.has_rows() {
//!     assert_eq!(table.to_string(), "X|Y\n:-:|-:\n1 |2");
//! }
//! ```
//!
//! ## Empty Input
//!
//! Neither entry point treats an empty matrix as an error. [`render`] returns
//! `Ok(None)`; a [`Table`] without rows renders to `""` and reports
//! [`Table::has_rows`] as false.
//!
//! ## Saving
//!
//! [`Table::save`] renders and writes in one step, creating the parent
//! directory when needed:
//!
//! ```rust,ignore
//! table.save("reports/summary.md")?;
//! ```
//!
//! ## Table Definitions
//!
//! Tables can also be loaded from YAML or JSON; see [`Table::from_yaml`],
//! [`Table::from_json`] and [`Table::from_file`].

mod cell;
mod config;
mod error;
mod persist;
mod render;
mod table;
mod types;

pub use cell::{normalize_cells, one_line};
pub use config::{ColumnDef, TableDefinition};
pub use error::{Result, TableError};
pub use persist::write_markdown;
pub use render::{render, SEPARATOR_LINE};
pub use table::{Table, ROW_CELL_SEPARATOR};
pub use types::{Align, Column};
