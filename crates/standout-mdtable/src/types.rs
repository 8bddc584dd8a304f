//! Column definitions for markdown tables.
//!
//! A [`Column`] pairs a header label with an [`Align`]ment. The alignment only
//! affects the separator line of a rendered [`Table`](crate::Table); cell text
//! is never padded.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Horizontal alignment of a markdown column.
///
/// Alignment values coming from strings never fail to parse: anything other
/// than `"left"`, `"center"` or `"right"` falls back to [`Align::Left`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum Align {
    /// `-` marker.
    #[default]
    Left,
    /// `:-:` marker.
    Center,
    /// `-:` marker.
    Right,
}

impl Align {
    /// Parses an alignment name, falling back to [`Align::Left`].
    ///
    /// Matching is exact: `"Center"` is not `"center"`.
    pub fn parse_lossy(name: &str) -> Self {
        match name {
            "center" => Align::Center,
            "right" => Align::Right,
            _ => Align::Left,
        }
    }

    /// The separator-line marker for this alignment.
    pub fn marker(self) -> &'static str {
        match self {
            Align::Left => "-",
            Align::Center => ":-:",
            Align::Right => "-:",
        }
    }

    /// The lowercase name of this alignment.
    pub fn as_str(self) -> &'static str {
        match self {
            Align::Left => "left",
            Align::Center => "center",
            Align::Right => "right",
        }
    }
}

impl From<&str> for Align {
    fn from(name: &str) -> Self {
        Align::parse_lossy(name)
    }
}

impl From<String> for Align {
    fn from(name: String) -> Self {
        Align::parse_lossy(&name)
    }
}

impl From<Option<String>> for Align {
    fn from(name: Option<String>) -> Self {
        name.map(Align::from).unwrap_or_default()
    }
}

impl fmt::Display for Align {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A table column: header label plus alignment.
///
/// # Example
///
/// ```rust
/// use standout_mdtable::{Align, Column};
///
/// let name = Column::new("Name");
/// let total = Column::new("Total").right();
/// let status = Column::new("Status").align("center");
///
/// assert_eq!(name.align, Align::Left);
/// assert_eq!(total.align.marker(), "-:");
/// assert_eq!(status.align, Align::Center);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    /// Header label, rendered as-is on the first line.
    pub header: String,
    /// Column alignment.
    #[serde(default)]
    pub align: Align,
}

impl Column {
    /// Create a left-aligned column.
    pub fn new(header: impl Into<String>) -> Self {
        Column {
            header: header.into(),
            align: Align::default(),
        }
    }

    /// Set the alignment. Accepts an [`Align`] or an alignment name.
    pub fn align(mut self, align: impl Into<Align>) -> Self {
        self.align = align.into();
        self
    }

    /// Set alignment to center (shorthand for `.align(Align::Center)`).
    pub fn center(self) -> Self {
        self.align(Align::Center)
    }

    /// Set alignment to right (shorthand for `.align(Align::Right)`).
    pub fn right(self) -> Self {
        self.align(Align::Right)
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.header)
    }
}

impl From<&str> for Column {
    fn from(header: &str) -> Self {
        Column::new(header)
    }
}

impl From<String> for Column {
    fn from(header: String) -> Self {
        Column::new(header)
    }
}
