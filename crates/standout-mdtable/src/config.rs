//! Declarative table definitions.
//!
//! Tables can be described in YAML or JSON:
//!
//! ```yaml
//! columns:
//!   - Name
//!   - header: Total
//!     align: right
//! rows:
//!   - [Alice, "30"]
//!   - [Bob, "25"]
//! ```
//!
//! A column is either a bare header string (left aligned) or a map with
//! `header` and an optional `align`. Unknown alignment names fall back to
//! left. Rows are used exactly as written.

use crate::error::{Result, TableError};
use crate::table::Table;
use crate::types::{Align, Column};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::trace;

/// Serialized shape of a [`Table`].
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableDefinition {
    /// Column definitions, in order.
    pub columns: Vec<ColumnDef>,
    /// Data rows.
    #[serde(default)]
    pub rows: Vec<Vec<String>>,
}

/// A column entry in a [`TableDefinition`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColumnDef {
    /// Bare header label.
    Header(String),
    /// Header with alignment.
    Full {
        header: String,
        #[serde(default)]
        align: Align,
    },
}

impl From<ColumnDef> for Column {
    fn from(def: ColumnDef) -> Self {
        match def {
            ColumnDef::Header(header) => Column::new(header),
            ColumnDef::Full { header, align } => Column::new(header).align(align),
        }
    }
}

impl From<&Column> for ColumnDef {
    fn from(column: &Column) -> Self {
        ColumnDef::Full {
            header: column.header.clone(),
            align: column.align,
        }
    }
}

impl From<TableDefinition> for Table {
    fn from(def: TableDefinition) -> Self {
        Table::new(def.columns, def.rows)
    }
}

impl From<&Table> for TableDefinition {
    fn from(table: &Table) -> Self {
        TableDefinition {
            columns: table.columns().iter().map(ColumnDef::from).collect(),
            rows: table.data().to_vec(),
        }
    }
}

impl Table {
    /// Parses a table definition from YAML.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Parse`] if the YAML is malformed or does not
    /// describe a table.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        parse_yaml(yaml, None).map(Table::from)
    }

    /// Parses a table definition from JSON.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Parse`] if the JSON is malformed or does not
    /// describe a table.
    pub fn from_json(json: &str) -> Result<Self> {
        parse_json(json, None).map(Table::from)
    }

    /// Loads a table definition from a file.
    ///
    /// Files with a `.json` extension are parsed as JSON, everything else
    /// as YAML.
    ///
    /// # Errors
    ///
    /// Returns [`TableError::Load`] if the file cannot be read and
    /// [`TableError::Parse`] if its content is invalid.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use standout_mdtable::Table;
    ///
    /// let table = Table::from_file("./tables/report.yaml")?;
    /// table.save("./out/report.md")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        trace!("Loading table definition from {:?}", path);

        let content = std::fs::read_to_string(path).map_err(|source| TableError::Load {
            path: path.to_path_buf(),
            source,
        })?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let def = if is_json {
            parse_json(&content, Some(path))?
        } else {
            parse_yaml(&content, Some(path))?
        };
        Ok(Table::from(def))
    }

    /// Converts this table back into its serializable definition.
    pub fn to_definition(&self) -> TableDefinition {
        TableDefinition::from(self)
    }
}

fn parse_yaml(yaml: &str, path: Option<&Path>) -> Result<TableDefinition> {
    serde_yaml::from_str(yaml).map_err(|e| TableError::Parse {
        path: path.map(Path::to_path_buf),
        message: e.to_string(),
    })
}

fn parse_json(json: &str, path: Option<&Path>) -> Result<TableDefinition> {
    serde_json::from_str(json).map_err(|e| TableError::Parse {
        path: path.map(Path::to_path_buf),
        message: e.to_string(),
    })
}
