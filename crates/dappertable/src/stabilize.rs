//! Keeps zero-filled index columns the same width on every row.
//!
//! The fill width is the digit count of the row total, so it changes when
//! the total crosses a power of ten. All rows share one width at all times,
//! which means a walk from the newest row backwards can stop at the first
//! row that already has the right width: everything older was fixed up the
//! last time the width changed.

use tracing::debug;

use crate::format::RowFormatter;
use crate::row::{Row, RowContent};

/// Re-renders rows whose fill width differs from `needed`, newest first.
///
/// Stops at the first row already rendered with `needed`. Returns how many
/// rows were re-rendered.
pub fn stabilize(rows: &mut [Row], formatter: &RowFormatter, needed: usize) -> usize {
    let mut rerendered = 0;

    for row in rows.iter_mut().rev() {
        if row.pad_width() == Some(needed) {
            break;
        }
        let rendered = match row.source() {
            RowContent::Columns(cells) => formatter.format_row(cells, Some(needed)),
            RowContent::Scalar(_) => continue,
        };
        row.replace_rendered(rendered, Some(needed));
        rerendered += 1;
    }

    if rerendered > 0 {
        debug!(rerendered, pad_width = needed, "re-rendered rows for new index width");
    }
    rerendered
}
