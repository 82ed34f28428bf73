//! Row content and rendered lines.

use serde::{Deserialize, Serialize};

/// What a caller hands the table for one row.
///
/// Tables without headers take a [`RowContent::Scalar`]; tables with headers
/// take [`RowContent::Columns`] with one cell per header.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RowContent {
    /// A single pre-formatted line.
    Scalar(String),
    /// One cell per column.
    Columns(Vec<String>),
}

impl RowContent {
    /// Short description of the content's shape, used in error messages.
    pub fn describe(&self) -> String {
        match self {
            RowContent::Scalar(_) => "a single value".to_string(),
            RowContent::Columns(cells) if cells.len() == 1 => "1 column".to_string(),
            RowContent::Columns(cells) => format!("{} columns", cells.len()),
        }
    }

    /// The cells, if this is a column row.
    pub fn as_columns(&self) -> Option<&[String]> {
        match self {
            RowContent::Scalar(_) => None,
            RowContent::Columns(cells) => Some(cells),
        }
    }
}

impl From<&str> for RowContent {
    fn from(s: &str) -> Self {
        RowContent::Scalar(s.to_string())
    }
}

impl From<String> for RowContent {
    fn from(s: String) -> Self {
        RowContent::Scalar(s)
    }
}

impl<S: Into<String>> From<Vec<S>> for RowContent {
    fn from(cells: Vec<S>) -> Self {
        RowContent::Columns(cells.into_iter().map(Into::into).collect())
    }
}

impl<S: Into<String>, const N: usize> From<[S; N]> for RowContent {
    fn from(cells: [S; N]) -> Self {
        RowContent::Columns(cells.into_iter().map(Into::into).collect())
    }
}

impl<S: AsRef<str>> From<&[S]> for RowContent {
    fn from(cells: &[S]) -> Self {
        RowContent::Columns(cells.iter().map(|c| c.as_ref().to_string()).collect())
    }
}

/// A stored row: its rendered line plus what it was rendered from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    rendered: String,
    source: RowContent,
    pad_width: Option<usize>,
}

impl Row {
    pub(crate) fn new(rendered: String, source: RowContent, pad_width: Option<usize>) -> Self {
        Row {
            rendered,
            source,
            pad_width,
        }
    }

    /// The rendered line.
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    /// The content the row was rendered from.
    pub fn source(&self) -> &RowContent {
        &self.source
    }

    /// Zero-fill width used when rendering, if any column zero-fills.
    pub fn pad_width(&self) -> Option<usize> {
        self.pad_width
    }

    pub(crate) fn replace_rendered(&mut self, rendered: String, pad_width: Option<usize>) {
        self.rendered = rendered;
        self.pad_width = pad_width;
    }

    pub(crate) fn into_source(self) -> RowContent {
        self.source
    }
}

/// One output line, as handed to the paginator and the assembler.
///
/// Row lines keep their source so a caller can rewrite `text` on a page and
/// render it again without rebuilding the table. Header and rule lines have
/// no source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    /// Text of the line.
    pub text: String,
    /// Content the line was rendered from, for row lines.
    pub source: Option<RowContent>,
}

impl Line {
    /// A header or rule line.
    pub fn decoration(text: impl Into<String>) -> Self {
        Line {
            text: text.into(),
            source: None,
        }
    }

    /// A line rendered from a stored row.
    pub fn from_row(row: &Row) -> Self {
        Line {
            text: row.rendered.clone(),
            source: Some(row.source.clone()),
        }
    }
}
