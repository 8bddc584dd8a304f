//! Error types for table rendering and table definitions.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while rendering or loading a table.
///
/// Filesystem failures while saving are not represented here: [`Table::save`]
/// returns the underlying [`std::io::Error`] untouched.
///
/// [`Table::save`]: crate::Table::save
#[derive(Debug, Error)]
pub enum TableError {
    /// A row's cell count differs from the header count.
    #[error("different length of headers ({headers}) and row cells ({cells}):\n{header_line}\n{row_line}")]
    ShapeMismatch {
        /// Number of (normalized) headers.
        headers: usize,
        /// Number of (normalized) cells in the offending row.
        cells: usize,
        /// Headers joined with `|`.
        header_line: String,
        /// Offending row joined with `|`.
        row_line: String,
    },

    /// A table definition could not be parsed.
    #[error("{}", parse_message(.path, .message))]
    Parse {
        /// Source file, when loaded from disk.
        path: Option<PathBuf>,
        /// Message from the YAML/JSON parser.
        message: String,
    },

    /// A table definition file could not be read.
    #[error("failed to read {}: {}", .path.display(), .source)]
    Load {
        /// File that could not be read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}

fn parse_message(path: &Option<PathBuf>, message: &str) -> String {
    match path {
        Some(p) => format!("invalid table definition in {}: {}", p.display(), message),
        None => format!("invalid table definition: {}", message),
    }
}

/// Result type for table operations.
pub type Result<T> = std::result::Result<T, TableError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_mismatch_message_carries_both_lines() {
        let err = TableError::ShapeMismatch {
            headers: 2,
            cells: 3,
            header_line: "A|B".to_string(),
            row_line: "1|2|3".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "different length of headers (2) and row cells (3):\nA|B\n1|2|3"
        );
    }

    #[test]
    fn parse_error_mentions_path() {
        let err = TableError::Parse {
            path: Some(PathBuf::from("tables/report.yaml")),
            message: "bad indent".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("tables/report.yaml"));
        assert!(msg.contains("bad indent"));
    }

    #[test]
    fn load_error_exposes_io_source() {
        use std::error::Error as _;

        let err = TableError::Load {
            path: PathBuf::from("missing.yaml"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert!(err.source().is_some());
        assert!(err.to_string().contains("missing.yaml"));
    }
}
