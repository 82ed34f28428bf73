//! Table configuration loaded from YAML or JSON.
//!
//! Host applications usually keep their table layouts in a config file. A
//! [`TableConfig`] mirrors every builder option:
//!
//! ```rust
//! use dappertable::TableConfig;
//!
//! let config = TableConfig::from_yaml(r#"
//! headers:
//!   - name: pos
//!     width: 3
//!     zero_pad_index: true
//!   - name: title
//!     width: 24
//! pagination:
//!   length: 2000
//! enclosure_start: "```\n"
//! enclosure_end: "\n```"
//! "#).unwrap();
//!
//! let mut table = config.build().unwrap();
//! table.add_row(["1", "Song title"]).unwrap();
//! ```

use serde::{Deserialize, Serialize};

use crate::assemble::Wrapping;
use crate::error::Result;
use crate::header::{Header, HeaderSet, DEFAULT_SEPARATOR};
use crate::paginate::Pagination;
use crate::table::DapperTable;
use crate::width::WideCompensation;

/// Serialisable table configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Column definitions; absent for a headerless table.
    pub headers: Option<Vec<Header>>,
    /// Column separator.
    pub separator: String,
    /// Pagination mode.
    pub pagination: Pagination,
    /// Collapse blank-line runs in output.
    pub collapse_newlines: bool,
    /// Page wrapping.
    #[serde(flatten)]
    pub wrapping: Wrapping,
    /// Wide-glyph padding compensation.
    pub wide_compensation: WideCompensation,
}

impl Default for TableConfig {
    fn default() -> Self {
        TableConfig {
            headers: None,
            separator: DEFAULT_SEPARATOR.to_string(),
            pagination: Pagination::None,
            collapse_newlines: true,
            wrapping: Wrapping::default(),
            wide_compensation: WideCompensation::NONE,
        }
    }
}

impl TableConfig {
    /// Parse a configuration from YAML.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Parse a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Create a table from this configuration.
    pub fn build(&self) -> Result<DapperTable> {
        let mut builder = DapperTable::builder()
            .pagination(self.pagination)
            .collapse_newlines(self.collapse_newlines)
            .wrapping(self.wrapping.clone())
            .wide_compensation(self.wide_compensation);

        if let Some(headers) = &self.headers {
            builder = builder.headers(HeaderSet::with_separator(
                headers.clone(),
                &self.separator,
            )?);
        }

        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = TableConfig::from_yaml("{}").unwrap();
        assert_eq!(config, TableConfig::default());
        assert!(config.collapse_newlines);
        assert_eq!(config.separator, "||");
    }

    #[test]
    fn flattened_wrapping() {
        let config = TableConfig::from_json(r#"{"prefix": "[", "suffix": "]"}"#).unwrap();
        assert_eq!(config.wrapping.prefix, "[");
        assert_eq!(config.wrapping.suffix, "]");
        assert_eq!(config.wrapping.enclosure_start, "");
    }

    #[test]
    fn compensation_from_yaml() {
        let config = TableConfig::from_yaml("wide_compensation:\n  extra: 1\n  per: 4\n").unwrap();
        assert_eq!(config.wide_compensation, WideCompensation::new(1, 4));
    }
}
