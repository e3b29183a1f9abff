//! Bar layout and line rendering.
//!
//! Every bar is one terminal line with a fixed layout:
//!
//! ```text
//! <name><padding> [<filled><mouth><dots>] <percent>%
//! ```
//!
//! The name column has a fixed display width, the bar stretches to fill
//! the rest of the terminal and the percentage takes four cells.
//!
//! # Examples
//!
//! ```rust
//! use multibar::progress::{render_bar, BarLayout};
//!
//! let line = render_bar("a.txt", 5, 10, 80, &BarLayout::default());
//! assert!(line.starts_with("a.txt "));
//! assert!(line.ends_with(" 50%"));
//! ```

use crate::utils::{pad_to_width, truncate_by_width};

/// Glyph for the filled part of the bar.
pub const CHAR_FILLED: char = '▇';
/// Glyph for the part of the bar still to do.
pub const CHAR_TODO: char = '·';
/// Alternating glyphs marking the leading edge of the filled part.
pub const CHARS_MOUTH: [char; 2] = ['>', '<'];

/// Cells taken by everything except the name and the bar:
/// `" ["`, `"] "` and the `"100%"` field.
const DECORATION_WIDTH: usize = 2 + 2 + 4;

/// Column layout of a rendered bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BarLayout {
    /// Display width of the name column.
    pub name_width: usize,
    /// The bar never gets narrower than this, even on tiny terminals.
    pub min_bar_width: usize,
}

impl Default for BarLayout {
    fn default() -> Self {
        Self {
            name_width: BarLayout::NAME_WIDTH,
            min_bar_width: BarLayout::MIN_BAR_WIDTH,
        }
    }
}

impl BarLayout {
    /// Default display width of the name column.
    pub const NAME_WIDTH: usize = 35;
    /// Default minimum bar width.
    pub const MIN_BAR_WIDTH: usize = 10;

    /// Create a new [`BarLayout`].
    pub fn new(name_width: usize, min_bar_width: usize) -> Self {
        Self {
            name_width,
            min_bar_width,
        }
    }

    /// Width of the bar itself for a terminal `terminal_width` cells wide.
    ///
    /// One cell is kept free so the line never wraps on terminals that
    /// scroll when the last column is written.
    pub fn bar_width(&self, terminal_width: usize) -> usize {
        terminal_width
            .saturating_sub(self.name_width + DECORATION_WIDTH)
            .saturating_sub(1)
            .max(self.min_bar_width.max(1))
    }
}

/// Percentage of `total` reached by `current`, 0 when `total` is unknown.
///
/// The value is not clamped: a counter that overshoots shows over 100.
pub fn percent(current: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    current as f64 / total as f64 * 100.0
}

/// Render one bar line.
pub fn render_bar(
    name: &str,
    current: u64,
    total: u64,
    terminal_width: usize,
    layout: &BarLayout,
) -> String {
    let width = layout.bar_width(terminal_width);
    let percent = percent(current, total);

    let pos = ((percent / 100.0 * width as f64) as usize).min(width - 1);

    let mouth = if current >= total {
        CHAR_FILLED
    } else {
        CHARS_MOUTH[pos % 2]
    };

    let name = pad_to_width(&truncate_by_width(name, layout.name_width), layout.name_width);

    let mut bar = String::with_capacity(width * CHAR_FILLED.len_utf8());
    bar.extend(std::iter::repeat(CHAR_FILLED).take(pos));
    bar.push(mouth);
    bar.extend(std::iter::repeat(CHAR_TODO).take(width - pos - 1));

    format!("{name} [{bar}] {percent:3.0}%")
}
