//! Progress counters and bar rendering.
//!
//! This module provides the [`ProgressTracker`] counter that producers
//! advance, and the rendering rules that turn a tracker into one line of
//! terminal output.
//!
//! # Overview
//!
//! - `tracker` - The thread-safe counter handle
//! - `style` - Bar layout, glyphs and line rendering
//!
//! # Examples
//!
//! ## Rendering a Bar
//!
//! ```rust
//! use multibar::progress::ProgressTracker;
//!
//! let tracker = ProgressTracker::new(100, "track01.flac", 0);
//! tracker.add(50);
//! assert!(tracker.render(80).ends_with(" 50%"));
//! ```
//!
//! ## Custom Column Layout
//!
//! ```rust
//! use multibar::progress::{BarLayout, ProgressTracker};
//!
//! let layout = BarLayout::new(20, 5);
//! let tracker = ProgressTracker::new(0, "unknown size", 0);
//! assert!(tracker.render_with(&layout, 40).ends_with("  0%"));
//! ```

pub(crate) mod style;
pub(crate) mod tracker;

pub use style::{percent, render_bar, BarLayout, CHARS_MOUTH, CHAR_FILLED, CHAR_TODO};
pub use tracker::ProgressTracker;
