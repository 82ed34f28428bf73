//! The table itself: row storage, rendering and printing.
//!
//! # Example
//!
//! ```rust
//! use dappertable::{DapperTable, Header, HeaderSet, Pagination};
//!
//! let headers = HeaderSet::new(vec![Header::new("pos", 3), Header::new("name", 4)]).unwrap();
//! let mut table = DapperTable::builder()
//!     .headers(headers)
//!     .pagination(Pagination::ByRowCount(2))
//!     .build()
//!     .unwrap();
//!
//! table.add_row(["1", "a"]).unwrap();
//! table.add_row(["2", "b"]).unwrap();
//! table.add_row(["3", "c"]).unwrap();
//!
//! assert_eq!(
//!     table.print().unwrap(),
//!     vec!["pos|| name\n----------", "1  || a\n2  || b", "3  || c"]
//! );
//! ```

use tracing::{debug, trace};

use crate::assemble::{assemble, Wrapping};
use crate::error::{DapperTableError, Result};
use crate::format::RowFormatter;
use crate::header::HeaderSet;
use crate::paginate::{paginate, Pagination};
use crate::row::{Line, Row, RowContent};
use crate::stabilize::stabilize;
use crate::width::{digit_count, WideCompensation};

/// A table of rows rendered to aligned text and split into messages.
///
/// Without headers every row is a single pre-formatted string. With headers
/// every row carries one cell per header, and the output starts with a
/// header line and a rule line.
#[derive(Clone, Debug)]
pub struct DapperTable {
    formatter: Option<RowFormatter>,
    pagination: Pagination,
    rows: Vec<Row>,
    collapse_newlines: bool,
    wrapping: Wrapping,
}

impl DapperTable {
    /// Start configuring a table.
    pub fn builder() -> DapperTableBuilder {
        DapperTableBuilder::new()
    }

    /// Create a table with default wrapping and newline collapsing.
    pub fn new(headers: Option<HeaderSet>, pagination: Pagination) -> Result<Self> {
        let mut builder = DapperTableBuilder::new().pagination(pagination);
        if let Some(headers) = headers {
            builder = builder.headers(headers);
        }
        builder.build()
    }

    /// The column definitions, if the table has headers.
    pub fn headers(&self) -> Option<&HeaderSet> {
        self.formatter.as_ref().map(|f| f.headers())
    }

    /// The pagination mode.
    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    /// The page wrapping.
    pub fn wrapping(&self) -> &Wrapping {
        &self.wrapping
    }

    /// Whether blank-line runs are collapsed in output.
    pub fn collapse_newlines(&self) -> bool {
        self.collapse_newlines
    }

    /// Number of rows, not counting header lines.
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The stored rows, in order.
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Append a row, returning its index.
    ///
    /// Tables with headers need one cell per header; tables without need a
    /// single string.
    pub fn add_row(&mut self, content: impl Into<RowContent>) -> Result<usize> {
        let content = content.into();
        let pad_width = self.pad_width_for(self.rows.len() + 1);
        let rendered = self.render_content(&content, pad_width)?;

        self.rows.push(Row::new(rendered, content, pad_width));
        let len = self.rows.len();
        if let (Some(formatter), Some(needed)) = (&self.formatter, pad_width) {
            stabilize(&mut self.rows[..len - 1], formatter, needed);
        }

        trace!(index = len - 1, "added row");
        Ok(len - 1)
    }

    /// Replace the row at `index` with new content.
    pub fn edit_row(&mut self, index: usize, content: impl Into<RowContent>) -> Result<()> {
        self.check_index(index)?;
        let content = content.into();
        let pad_width = self.pad_width_for(self.rows.len());
        let rendered = self.render_content(&content, pad_width)?;

        self.rows[index] = Row::new(rendered, content, pad_width);
        trace!(index, "edited row");
        Ok(())
    }

    /// Remove the row at `index`, returning its content.
    ///
    /// Later rows shift down by one.
    pub fn remove_row(&mut self, index: usize) -> Result<RowContent> {
        self.check_index(index)?;
        let removed = self.rows.remove(index);

        if let (Some(formatter), Some(needed)) =
            (&self.formatter, self.pad_width_for(self.rows.len()))
        {
            stabilize(&mut self.rows, formatter, needed);
        }

        trace!(index, "removed row");
        Ok(removed.into_source())
    }

    /// Every output line in order: header and rule lines, then rows.
    pub fn lines(&self) -> Vec<Line> {
        let mut lines = Vec::with_capacity(self.rows.len() + 2);
        if let Some(formatter) = &self.formatter {
            lines.push(Line::decoration(formatter.header_line()));
            lines.push(Line::decoration(formatter.rule_line()));
        }
        lines.extend(self.rows.iter().map(Line::from_row));
        lines
    }

    /// The output lines grouped into pages.
    ///
    /// Without pagination this is a single page. Lines can be edited before
    /// handing the pages to [`DapperTable::render`].
    pub fn get_paginated_lines(&self) -> Result<Vec<Vec<Line>>> {
        paginate(self.lines(), self.pagination, &self.wrapping)
    }

    /// Assemble pages of lines into message strings.
    pub fn render(&self, pages: &[Vec<Line>]) -> Vec<String> {
        assemble(pages, &self.wrapping, self.collapse_newlines)
    }

    /// Render the table into one string per page.
    ///
    /// Always returns at least one page.
    pub fn print(&self) -> Result<Vec<String>> {
        let pages = self.get_paginated_lines()?;
        Ok(self.render(&pages))
    }

    /// Render the table as a single string.
    ///
    /// Without pagination this is the only page; with pagination the pages
    /// are joined by newlines.
    pub fn print_single(&self) -> Result<String> {
        Ok(self.print()?.join("\n"))
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index >= self.rows.len() {
            return Err(DapperTableError::Index {
                index,
                len: self.rows.len(),
            });
        }
        Ok(())
    }

    /// Zero-fill width for a table holding `total` rows.
    fn pad_width_for(&self, total: usize) -> Option<usize> {
        self.formatter
            .as_ref()
            .filter(|f| f.headers().has_zero_pad())
            .map(|_| digit_count(total))
    }

    fn render_content(&self, content: &RowContent, pad_width: Option<usize>) -> Result<String> {
        match (&self.formatter, content) {
            (Some(formatter), RowContent::Columns(cells))
                if cells.len() == formatter.headers().len() =>
            {
                Ok(formatter.format_row(cells, pad_width))
            }
            (Some(formatter), other) => Err(DapperTableError::shape(
                format!("{} columns to match headers", formatter.headers().len()),
                other.describe(),
            )),
            (None, RowContent::Scalar(s)) => Ok(s.clone()),
            (None, other) => Err(DapperTableError::shape(
                "a single value for a table without headers",
                other.describe(),
            )),
        }
    }
}

/// Builder for [`DapperTable`].
#[derive(Clone, Debug)]
pub struct DapperTableBuilder {
    headers: Option<HeaderSet>,
    pagination: Pagination,
    collapse_newlines: bool,
    wrapping: Wrapping,
    compensation: WideCompensation,
}

impl Default for DapperTableBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DapperTableBuilder {
    /// A builder for a headerless, unpaginated table.
    pub fn new() -> Self {
        DapperTableBuilder {
            headers: None,
            pagination: Pagination::None,
            collapse_newlines: true,
            wrapping: Wrapping::default(),
            compensation: WideCompensation::NONE,
        }
    }

    /// Set the column definitions.
    pub fn headers(mut self, headers: HeaderSet) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Set the pagination mode.
    pub fn pagination(mut self, pagination: Pagination) -> Self {
        self.pagination = pagination;
        self
    }

    /// Collapse blank-line runs in output (default: true).
    pub fn collapse_newlines(mut self, collapse: bool) -> Self {
        self.collapse_newlines = collapse;
        self
    }

    /// Text placed before the first page.
    pub fn prefix(mut self, prefix: impl Into<String>) -> Self {
        self.wrapping.prefix = prefix.into();
        self
    }

    /// Text placed after the last page.
    pub fn suffix(mut self, suffix: impl Into<String>) -> Self {
        self.wrapping.suffix = suffix.into();
        self
    }

    /// Text opening every page.
    pub fn enclosure_start(mut self, start: impl Into<String>) -> Self {
        self.wrapping.enclosure_start = start.into();
        self
    }

    /// Text closing every page.
    pub fn enclosure_end(mut self, end: impl Into<String>) -> Self {
        self.wrapping.enclosure_end = end.into();
        self
    }

    /// Set both enclosure markers.
    pub fn enclosure(self, start: impl Into<String>, end: impl Into<String>) -> Self {
        self.enclosure_start(start).enclosure_end(end)
    }

    /// Replace the whole wrapping.
    pub fn wrapping(mut self, wrapping: Wrapping) -> Self {
        self.wrapping = wrapping;
        self
    }

    /// Set the wide-glyph padding compensation.
    pub fn wide_compensation(mut self, compensation: WideCompensation) -> Self {
        self.compensation = compensation;
        self
    }

    /// Validate the configuration and create the table.
    pub fn build(self) -> Result<DapperTable> {
        self.pagination.validate()?;

        if let Pagination::ByDisplayLength(max_width) = self.pagination {
            let prefix_width = self.wrapping.prefix_width();
            if prefix_width > max_width {
                return Err(DapperTableError::config(format!(
                    "prefix length {} exceeds max message length {}",
                    prefix_width, max_width
                )));
            }
            let suffix_width = self.wrapping.suffix_width();
            if suffix_width > max_width {
                return Err(DapperTableError::config(format!(
                    "suffix length {} exceeds max message length {}",
                    suffix_width, max_width
                )));
            }
        }

        debug!(
            columns = self.headers.as_ref().map_or(0, HeaderSet::len),
            pagination = ?self.pagination,
            collapse_newlines = self.collapse_newlines,
            "created table"
        );

        let compensation = self.compensation;
        Ok(DapperTable {
            formatter: self
                .headers
                .map(|headers| RowFormatter::new(headers).with_compensation(compensation)),
            pagination: self.pagination,
            rows: Vec::new(),
            collapse_newlines: self.collapse_newlines,
            wrapping: self.wrapping,
        })
    }
}
