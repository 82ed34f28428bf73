//! Column definitions.
//!
//! A [`HeaderSet`] is fixed for the lifetime of a table: it decides how many
//! cells every row carries, how wide each column is, and which columns hold
//! a zero-filled index.

use serde::{Deserialize, Serialize};

use crate::error::{DapperTableError, Result};

/// Separator placed between columns when none is given.
pub const DEFAULT_SEPARATOR: &str = "||";

/// Configuration for a single column.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    /// Column title, shown on the header line.
    pub name: String,
    /// Column width in display cells.
    #[serde(alias = "width", alias = "length")]
    pub target_width: usize,
    /// Zero-fill this column's cells to the digit count of the row total.
    #[serde(default)]
    pub zero_pad_index: bool,
}

impl Header {
    /// Create a column with the given title and width in display cells.
    pub fn new(name: impl Into<String>, target_width: usize) -> Self {
        Header {
            name: name.into(),
            target_width,
            zero_pad_index: false,
        }
    }

    /// Mark this column as a zero-filled index column.
    pub fn zero_pad_index(mut self) -> Self {
        self.zero_pad_index = true;
        self
    }
}

/// Ordered, non-empty column definitions plus the column separator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeaderSet {
    headers: Vec<Header>,
    separator: String,
}

impl HeaderSet {
    /// Create a header set with the default `"||"` separator.
    pub fn new(headers: Vec<Header>) -> Result<Self> {
        Self::with_separator(headers, DEFAULT_SEPARATOR)
    }

    /// Create a header set with a custom separator.
    ///
    /// The separator is normalised to end in exactly one space, so `"||"`
    /// and `"||  "` both become `"|| "`.
    pub fn with_separator(headers: Vec<Header>, separator: &str) -> Result<Self> {
        if headers.is_empty() {
            return Err(DapperTableError::config("must have at least one header"));
        }
        if let Some(header) = headers.iter().find(|h| h.target_width == 0) {
            return Err(DapperTableError::config(format!(
                "header {:?} must have a width of at least 1",
                header.name
            )));
        }

        Ok(HeaderSet {
            headers,
            separator: normalize_separator(separator),
        })
    }

    /// The column definitions, in order.
    pub fn headers(&self) -> &[Header] {
        &self.headers
    }

    /// The normalised separator.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Always false; a header set has at least one column.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    /// Iterate over the column definitions.
    pub fn iter(&self) -> std::slice::Iter<'_, Header> {
        self.headers.iter()
    }

    /// Whether any column zero-fills its cells.
    pub fn has_zero_pad(&self) -> bool {
        self.headers.iter().any(|h| h.zero_pad_index)
    }
}

fn normalize_separator(separator: &str) -> String {
    format!("{} ", separator.trim_end_matches(' '))
}
