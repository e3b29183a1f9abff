//! Shared utility functions.
//!
//! This module contains the text layout helpers used when rendering bars.
//! Widths are measured in terminal cells with a deliberately simple rule:
//! ASCII code points take one cell and everything else takes two.
//!
//! # Examples
//!
//! ```rust
//! use multibar::utils::{display_width, truncate_by_width};
//!
//! assert_eq!(display_width("song.flac"), 9);
//! assert_eq!(display_width("晴天.flac"), 9);
//!
//! let short = truncate_by_width("a very long file name.mp3", 10);
//! assert_eq!(short, "a very l..");
//! ```

pub mod width;

pub use width::{char_width, display_width, pad_to_width, truncate_by_width};
