//! Splitting the line list into pages.
//!
//! Pages are recomputed from scratch on every call; nothing is cached, so
//! edits and removals never leave stale page boundaries behind.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::assemble::Wrapping;
use crate::error::{DapperTableError, Result};
use crate::row::Line;
use crate::width::display_width;

/// How a table's lines are split into pages.
///
/// In configuration files this is written as `none`, `{rows: n}` or
/// `{length: n}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "PaginationRaw", into = "PaginationRaw")]
pub enum Pagination {
    /// A single page holding every line.
    #[default]
    None,
    /// Pages of at most this many lines.
    ByRowCount(usize),
    /// Pages of at most this many display cells, wrappers included.
    ByDisplayLength(usize),
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum PaginationRaw {
    Rows { rows: usize },
    Length { length: usize },
    Keyword(String),
}

impl From<Pagination> for PaginationRaw {
    fn from(pagination: Pagination) -> Self {
        match pagination {
            Pagination::None => PaginationRaw::Keyword("none".to_string()),
            Pagination::ByRowCount(rows) => PaginationRaw::Rows { rows },
            Pagination::ByDisplayLength(length) => PaginationRaw::Length { length },
        }
    }
}

impl TryFrom<PaginationRaw> for Pagination {
    type Error = String;

    fn try_from(raw: PaginationRaw) -> std::result::Result<Self, Self::Error> {
        match raw {
            PaginationRaw::Rows { rows } => Ok(Pagination::ByRowCount(rows)),
            PaginationRaw::Length { length } => Ok(Pagination::ByDisplayLength(length)),
            PaginationRaw::Keyword(s) if s == "none" => Ok(Pagination::None),
            PaginationRaw::Keyword(s) => Err(format!(
                "Invalid pagination: '{}'. Expected 'none', {{rows: n}} or {{length: n}}.",
                s
            )),
        }
    }
}

impl Pagination {
    /// Checks the threshold is at least 1.
    pub fn validate(&self) -> Result<()> {
        match self {
            Pagination::ByRowCount(0) => Err(DapperTableError::config(
                "rows per message must be at least 1",
            )),
            Pagination::ByDisplayLength(0) => Err(DapperTableError::config(
                "max message length must be at least 1",
            )),
            _ => Ok(()),
        }
    }
}

/// Splits `lines` into pages.
///
/// Always returns at least one page; with no lines that page is empty.
/// Concatenating the pages gives back `lines` unchanged.
pub fn paginate(
    lines: Vec<Line>,
    pagination: Pagination,
    wrapping: &Wrapping,
) -> Result<Vec<Vec<Line>>> {
    let line_count = lines.len();
    let pages = match pagination {
        Pagination::None => vec![lines],
        Pagination::ByRowCount(max_rows) => by_row_count(lines, max_rows),
        Pagination::ByDisplayLength(max_width) => by_display_length(lines, max_width, wrapping)?,
    };

    debug!(
        ?pagination,
        lines = line_count,
        pages = pages.len(),
        "paginated table"
    );
    Ok(pages)
}

fn by_row_count(lines: Vec<Line>, max_rows: usize) -> Vec<Vec<Line>> {
    let max_rows = max_rows.max(1);
    let mut pages = Vec::new();
    let mut iter = lines.into_iter().peekable();

    while iter.peek().is_some() {
        pages.push(iter.by_ref().take(max_rows).collect());
    }
    if pages.is_empty() {
        pages.push(Vec::new());
    }
    pages
}

/// A page being filled.
#[derive(Default)]
struct PageBuilder {
    lines: Vec<Line>,
    width: usize,
}

impl PageBuilder {
    fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Page width after appending a line of `width` cells.
    fn width_with(&self, width: usize) -> usize {
        if self.is_empty() {
            width
        } else {
            self.width + 1 + width
        }
    }

    fn push(&mut self, line: Line, width: usize) {
        self.width = self.width_with(width);
        self.lines.push(line);
    }

    fn take(&mut self) -> Vec<Line> {
        self.width = 0;
        std::mem::take(&mut self.lines)
    }
}

/// Greedy split by display width.
///
/// Every page pays for the enclosure pair, the first page for the prefix and
/// the last page for the suffix. A line that does not fit the page it would
/// join moves to a fresh page. When only the prefix or the suffix is in the
/// way, it gets a page of its own instead.
fn by_display_length(
    lines: Vec<Line>,
    max_width: usize,
    wrapping: &Wrapping,
) -> Result<Vec<Vec<Line>>> {
    let enclosure = wrapping.enclosure_width();
    let prefix = wrapping.prefix_width();
    let suffix = wrapping.suffix_width();

    let total = lines.len();
    let mut pages: Vec<Vec<Line>> = Vec::new();
    let mut page = PageBuilder::default();

    for (i, line) in lines.into_iter().enumerate() {
        let width = display_width(&line.text);
        if width > max_width {
            return Err(DapperTableError::capacity(line.text, max_width));
        }
        let trailing = if i + 1 == total { suffix } else { 0 };

        loop {
            let fixed = enclosure + if pages.is_empty() { prefix } else { 0 };
            let joined = page.width_with(width);

            if joined + fixed + trailing <= max_width
                || (page.is_empty() && joined + fixed <= max_width)
            {
                page.push(line, width);
                break;
            }

            if !page.is_empty() {
                pages.push(page.take());
                continue;
            }

            if pages.is_empty() && width + enclosure <= max_width {
                pages.push(wrapper_page(wrapping, max_width, true, false)?);
                continue;
            }

            return Err(DapperTableError::capacity(line.text, max_width));
        }
    }

    let fixed = enclosure + if pages.is_empty() { prefix } else { 0 };
    if page.width + fixed + suffix > max_width {
        if page.is_empty() {
            pages.push(wrapper_page(wrapping, max_width, true, false)?);
        } else {
            pages.push(page.take());
        }
        pages.push(wrapper_page(wrapping, max_width, false, true)?);
    } else {
        pages.push(page.take());
    }

    Ok(pages)
}

/// An empty page carrying only wrapper text, if that text fits.
fn wrapper_page(
    wrapping: &Wrapping,
    max_width: usize,
    first: bool,
    last: bool,
) -> Result<Vec<Line>> {
    let text = wrapping.bare(first, last);
    if display_width(&text) > max_width {
        return Err(DapperTableError::capacity(text, max_width));
    }
    Ok(Vec::new())
}
