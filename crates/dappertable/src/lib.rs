//! # DapperTable - Aligned text tables for size-limited messages
//!
//! `dappertable` renders rows into monospace-aligned text and splits the
//! result into pages that each fit a message limit, as chat clients impose.
//!
//! Alignment is computed in display cells, not characters: CJK and other
//! wide glyphs take two cells, so a column holding `日本語` is padded less
//! than one holding `abc`.
//!
//! ## Core Concepts
//!
//! - [`DapperTable`]: ordered rows plus header, pagination and wrapper settings
//! - [`HeaderSet`] / [`Header`]: fixed column definitions and separator
//! - [`Pagination`]: one page, pages of `n` lines, or pages of `n` display cells
//! - [`Wrapping`]: prefix (first page), suffix (last page), enclosure (every page)
//! - [`TableConfig`]: the same settings loaded from YAML or JSON
//!
//! ## Quick Start
//!
//! ```rust
//! use dappertable::{DapperTable, Pagination};
//!
//! let mut table = DapperTable::builder()
//!     .pagination(Pagination::ByDisplayLength(10))
//!     .prefix("[")
//!     .suffix("]")
//!     .build()
//!     .unwrap();
//!
//! for _ in 0..3 {
//!     table.add_row("1234").unwrap();
//! }
//!
//! assert_eq!(table.print().unwrap(), vec!["[1234\n1234", "1234]"]);
//! ```
//!
//! ## Headers and Index Columns
//!
//! ```rust
//! use dappertable::{DapperTable, Header, HeaderSet};
//!
//! let headers = HeaderSet::new(vec![
//!     Header::new("#", 3).zero_pad_index(),
//!     Header::new("title", 10),
//! ]).unwrap();
//! let mut table = DapperTable::builder().headers(headers).build().unwrap();
//!
//! for (i, title) in ["日本語は", "abc"].iter().enumerate() {
//!     table.add_row([i.to_string(), title.to_string()]).unwrap();
//! }
//!
//! assert_eq!(
//!     table.print_single().unwrap(),
//!     "#  || title\n-----------\n0  || 日本語は\n1  || abc"
//! );
//! ```
//!
//! ## Editing Pages Before Rendering
//!
//! [`DapperTable::get_paginated_lines`] hands out the paged lines, each row
//! line still carrying its source, so a caller can rewrite a line and render
//! the pages again with [`DapperTable::render`].

pub mod assemble;
pub mod config;
mod error;
pub mod format;
pub mod header;
pub mod paginate;
mod row;
pub mod stabilize;
mod table;
pub mod width;

pub use assemble::Wrapping;
pub use config::TableConfig;
pub use error::{DapperTableError, Result};
pub use format::RowFormatter;
pub use header::{Header, HeaderSet, DEFAULT_SEPARATOR};
pub use paginate::Pagination;
pub use row::{Line, Row, RowContent};
pub use table::{DapperTable, DapperTableBuilder};
pub use width::{display_width, padding_width, truncate, WideCompensation, DEFAULT_PLACEHOLDER};
