//! Display-width measurement and manipulation.
//!
//! Everything in this module counts display cells rather than characters:
//! CJK ideographs and other wide glyphs take two cells, combining marks take
//! none. The per-character widths come from `unicode-width`.
//!
//! ```rust
//! use dappertable::width::{display_width, padding_width, truncate_default};
//!
//! assert_eq!(display_width("日本語は"), 8);
//! assert_eq!(truncate_default("日本語は", 7), "日本..");
//!
//! // Four wide glyphs: a char-count formatter must pad to 6 to fill 10 cells.
//! assert_eq!(padding_width("日本語は", 10), 6);
//! ```

use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthChar;

/// Marker appended to truncated cells.
pub const DEFAULT_PLACEHOLDER: &str = "..";

/// Display width of a single character.
///
/// Returns `None` when the width is indeterminate (control characters).
#[inline]
pub fn char_width(c: char) -> Option<usize> {
    UnicodeWidthChar::width(c)
}

/// Returns the display width of a string in cells.
///
/// If any character has an indeterminate width, the whole string falls back
/// to its character count.
pub fn display_width(s: &str) -> usize {
    let mut total = 0;
    for c in s.chars() {
        match char_width(c) {
            Some(w) => total += w,
            None => return s.chars().count(),
        }
    }
    total
}

/// Width of a prefix as it grows one character at a time.
///
/// Mirrors [`display_width`], including the character-count fallback, so
/// that the running value always equals `display_width` of the prefix.
#[derive(Clone, Copy, Debug, Default)]
struct RunningWidth {
    cells: usize,
    chars: usize,
    indeterminate: bool,
}

impl RunningWidth {
    fn with(self, c: char) -> Self {
        let w = char_width(c);
        RunningWidth {
            cells: self.cells + w.unwrap_or(0),
            chars: self.chars + 1,
            indeterminate: self.indeterminate || w.is_none(),
        }
    }

    fn value(self) -> usize {
        if self.indeterminate {
            self.chars
        } else {
            self.cells
        }
    }
}

/// Truncates a string to fit within `width` display cells.
///
/// If the string already fits it is returned unchanged. Otherwise whole
/// characters are kept from the start while they fit in
/// `width - display_width(placeholder)`, and the placeholder is appended.
/// A wide character that would straddle the budget is dropped entirely.
///
/// When `width` is smaller than the placeholder itself, the placeholder is
/// cut down so the result never exceeds `width`.
///
/// ```rust
/// use dappertable::width::truncate;
///
/// assert_eq!(truncate("Some string 123 other text", 5, ".."), "Som..");
/// assert_eq!(truncate("short", 10, ".."), "short");
/// ```
pub fn truncate(s: &str, width: usize, placeholder: &str) -> String {
    if display_width(s) <= width {
        return s.to_string();
    }

    let placeholder_width = display_width(placeholder);
    if width < placeholder_width {
        return take_within(placeholder, width);
    }

    let mut result = take_within(s, width - placeholder_width);
    result.push_str(placeholder);
    result
}

/// [`truncate`] with the [`DEFAULT_PLACEHOLDER`].
pub fn truncate_default(s: &str, width: usize) -> String {
    truncate(s, width, DEFAULT_PLACEHOLDER)
}

/// Longest prefix of `s` whose display width fits in `budget`.
fn take_within(s: &str, budget: usize) -> String {
    let mut result = String::new();
    let mut running = RunningWidth::default();

    for c in s.chars() {
        let next = running.with(c);
        if next.value() > budget {
            break;
        }
        result.push(c);
        running = next;
    }

    result
}

/// Extra padding handed out per wide glyph.
///
/// Some chat clients draw certain wide glyphs slightly narrower than two
/// monospace cells, so columns holding many of them end up short. This adds
/// `extra` pad characters for every `per` wide glyphs in a cell (rounded
/// down). The right values depend on the client doing the rendering; the
/// default adds nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WideCompensation {
    /// Pad characters added per group of wide glyphs.
    pub extra: usize,
    /// Size of a group of wide glyphs.
    pub per: usize,
}

impl WideCompensation {
    /// No compensation.
    pub const NONE: WideCompensation = WideCompensation { extra: 0, per: 1 };

    /// Add `extra` pad characters per `per` wide glyphs.
    pub fn new(extra: usize, per: usize) -> Self {
        WideCompensation { extra, per }
    }

    /// Pad characters to add for a cell holding `wide` wide glyphs.
    pub fn extra_for(&self, wide: usize) -> usize {
        if self.per == 0 {
            return 0;
        }
        wide * self.extra / self.per
    }
}

impl Default for WideCompensation {
    fn default() -> Self {
        WideCompensation::NONE
    }
}

/// Returns the character count a char-count formatter (`{:<n}`) must pad to
/// so that the displayed result fills `target` cells.
///
/// Strings that already reach `target` cells get `target` back unchanged.
/// For those the separator position wins over alignment.
///
/// ```rust
/// use dappertable::width::padding_width;
///
/// assert_eq!(padding_width("abc", 20), 20);
/// assert_eq!(padding_width("日本語は", 20), 16);
/// ```
pub fn padding_width(s: &str, target: usize) -> usize {
    padding_width_with(s, target, WideCompensation::NONE)
}

/// [`padding_width`] with a wide-glyph compensation term.
pub fn padding_width_with(s: &str, target: usize, compensation: WideCompensation) -> usize {
    let width = display_width(s);
    if width >= target {
        return target;
    }

    let chars = s.chars().count();
    let wide = s.chars().filter(|&c| char_width(c) == Some(2)).count();
    // width < target, so this cannot underflow
    target + chars + compensation.extra_for(wide) - width
}

/// Left-fills `s` with `'0'` up to `width` characters.
///
/// A leading sign stays in front of the fill, so `"-5"` becomes `"-05"`.
pub fn zero_fill(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len >= width {
        return s.to_string();
    }

    let (sign, digits) = match s.chars().next() {
        Some(c @ ('-' | '+')) => s.split_at(c.len_utf8()),
        _ => ("", s),
    };
    format!("{}{}{}", sign, "0".repeat(width - len), digits)
}

/// Number of decimal digits in `n`.
pub fn digit_count(n: usize) -> usize {
    n.checked_ilog10().map_or(1, |d| d as usize + 1)
}
