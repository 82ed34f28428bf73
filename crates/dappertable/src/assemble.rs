//! Output assembly: turning pages of lines into message strings.

use serde::{Deserialize, Serialize};

use crate::row::Line;
use crate::width::display_width;

/// Text placed around pages.
///
/// The enclosure pair wraps every page (a code fence, say), while the
/// prefix only leads the first page and the suffix only trails the last.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Wrapping {
    /// Text before the first page.
    pub prefix: String,
    /// Text after the last page.
    pub suffix: String,
    /// Text opening every page.
    pub enclosure_start: String,
    /// Text closing every page.
    pub enclosure_end: String,
}

impl Wrapping {
    /// Display width of the prefix.
    pub fn prefix_width(&self) -> usize {
        display_width(&self.prefix)
    }

    /// Display width of the suffix.
    pub fn suffix_width(&self) -> usize {
        display_width(&self.suffix)
    }

    /// Display width of the enclosure pair combined.
    pub fn enclosure_width(&self) -> usize {
        display_width(&self.enclosure_start) + display_width(&self.enclosure_end)
    }

    /// Whether no wrapper text is configured.
    pub fn is_empty(&self) -> bool {
        self.prefix.is_empty()
            && self.suffix.is_empty()
            && self.enclosure_start.is_empty()
            && self.enclosure_end.is_empty()
    }

    /// Wrap a page body.
    pub fn wrap(&self, body: &str, first: bool, last: bool) -> String {
        let mut result = String::new();
        if first {
            result.push_str(&self.prefix);
        }
        result.push_str(&self.enclosure_start);
        result.push_str(body);
        result.push_str(&self.enclosure_end);
        if last {
            result.push_str(&self.suffix);
        }
        result
    }

    /// The text a page with no lines would consist of.
    pub(crate) fn bare(&self, first: bool, last: bool) -> String {
        self.wrap("", first, last)
    }
}

/// Collapses runs of newlines into one and trims newlines from both ends.
///
/// ```rust
/// use dappertable::assemble::collapse_newlines;
///
/// assert_eq!(collapse_newlines("\na\n\n\nb\n"), "a\nb");
/// ```
pub fn collapse_newlines(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut after_newline = false;

    for c in s.chars() {
        if c == '\n' {
            if after_newline {
                continue;
            }
            after_newline = true;
        } else {
            after_newline = false;
        }
        result.push(c);
    }

    result.trim_matches('\n').to_string()
}

/// Joins each page's lines and applies the wrapping.
///
/// Always returns at least one string; an empty page list assembles to a
/// single page holding only the wrapper text.
pub fn assemble(pages: &[Vec<Line>], wrapping: &Wrapping, collapse: bool) -> Vec<String> {
    if pages.is_empty() {
        return vec![wrapping.bare(true, true)];
    }

    let last = pages.len() - 1;
    pages
        .iter()
        .enumerate()
        .map(|(i, page)| {
            let body = page
                .iter()
                .map(|line| line.text.as_str())
                .collect::<Vec<_>>()
                .join("\n");
            let body = if collapse {
                collapse_newlines(&body)
            } else {
                body
            };
            wrapping.wrap(&body, i == 0, i == last)
        })
        .collect()
}
