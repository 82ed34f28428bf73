//! Row formatter.
//!
//! Turns one row of cells (or the header names) into a single aligned line.
//! Each cell is truncated to its column width, then padded so that it fills
//! the column in display cells rather than characters. The last column is
//! never padded, and trailing spaces are stripped from the joined line.
//!
//! ```rust
//! use dappertable::{Header, HeaderSet, RowFormatter};
//!
//! let headers = HeaderSet::new(vec![Header::new("pos", 3), Header::new("name", 4)]).unwrap();
//! let formatter = RowFormatter::new(headers);
//!
//! assert_eq!(formatter.header_line(), "pos|| name");
//! assert_eq!(formatter.format_row(&["1", "a"], None), "1  || a");
//! ```

use std::borrow::Cow;

use crate::header::{Header, HeaderSet};
use crate::width::{
    display_width, padding_width_with, truncate_default, zero_fill, WideCompensation,
};

/// Formats rows against a fixed [`HeaderSet`].
#[derive(Clone, Debug)]
pub struct RowFormatter {
    headers: HeaderSet,
    compensation: WideCompensation,
}

impl RowFormatter {
    /// Create a formatter with no wide-glyph compensation.
    pub fn new(headers: HeaderSet) -> Self {
        RowFormatter {
            headers,
            compensation: WideCompensation::NONE,
        }
    }

    /// Set the wide-glyph compensation used when padding cells.
    pub fn with_compensation(mut self, compensation: WideCompensation) -> Self {
        self.compensation = compensation;
        self
    }

    /// The column definitions.
    pub fn headers(&self) -> &HeaderSet {
        &self.headers
    }

    /// Format the header names as a line.
    pub fn header_line(&self) -> String {
        self.join(self.headers.iter().map(|h| Cow::Borrowed(h.name.as_str())))
    }

    /// The divider placed under the header line.
    pub fn rule_line(&self) -> String {
        rule_for(&self.header_line())
    }

    /// Format one row of cells.
    ///
    /// `pad_width` is the zero-fill width applied to index columns; `None`
    /// leaves their cells as given. Missing cells render as empty.
    pub fn format_row<S: AsRef<str>>(&self, cells: &[S], pad_width: Option<usize>) -> String {
        let values = self.headers.iter().enumerate().map(|(i, header)| {
            let value = cells.get(i).map(|s| s.as_ref()).unwrap_or("");
            match pad_width {
                Some(width) if header.zero_pad_index => Cow::Owned(zero_fill(value, width)),
                _ => Cow::Borrowed(value),
            }
        });
        self.join(values)
    }

    fn join<'a>(&self, values: impl Iterator<Item = Cow<'a, str>>) -> String {
        let last = self.headers.len() - 1;
        let mut result = String::new();

        for (i, (header, value)) in self.headers.iter().zip(values).enumerate() {
            if i > 0 {
                result.push_str(self.headers.separator());
            }
            result.push_str(&self.format_cell(&value, header, i == last));
        }

        result.truncate(result.trim_end_matches(' ').len());
        result
    }

    fn format_cell(&self, value: &str, header: &Header, last: bool) -> String {
        let truncated = truncate_default(value, header.target_width);
        if last {
            return truncated;
        }

        let pad = padding_width_with(&truncated, header.target_width, self.compensation);
        format!("{:<pad$}", truncated, pad = pad)
    }
}

/// A line of `-` as wide as `line` in display cells.
pub fn rule_for(line: &str) -> String {
    "-".repeat(display_width(line))
}
