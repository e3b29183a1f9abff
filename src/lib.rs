//! Multibar is a crate drawing many concurrent progress bars on one terminal,
//! with log lines interleaved above them.
//!
//! Producers on any thread advance [`ProgressTracker`]s, directly or through
//! the [`io`] adapters. A [`ProgressManager`] owns a single background render
//! loop that repaints every registered tracker ten times a second and
//! prints [`ProgressManager::log`] messages without corrupting the bars.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::io::Write;
//! use multibar::{io::ProgressWriter, ProgressManager, ProgressTracker};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let manager = ProgressManager::default();
//!
//! let tracker = ProgressTracker::new(4096, "album/01 - intro.flac", 0);
//! manager.add(tracker.clone());
//!
//! let mut file = ProgressWriter::new(std::fs::File::create("intro.flac")?, tracker.clone());
//! file.write_all(&[0u8; 4096])?;
//!
//! manager.log("cover art embedded");
//! manager.finish(&tracker);
//! manager.wait()?;
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! - [`progress`] - The `ProgressTracker` counter and bar rendering
//! - [`manager`] - The `ProgressManager`, its builder, configuration and render loop
//! - [`io`] - Reader, writer and stream adapters that advance a tracker
//! - [`terminal`] - Terminal control, for stdout and for tests
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`utils`] - Width-aware text helpers

pub mod error;
pub mod io;
pub mod manager;
pub mod progress;
pub mod terminal;
pub mod utils;

pub use error::{Error, Result};
pub use manager::{DisplayConfig, ProgressManager, ProgressManagerBuilder};
pub use progress::{BarLayout, ProgressTracker};
pub use terminal::{CaptureTerminal, StdoutTerminal, Terminal};
pub use utils::{display_width, truncate_by_width};
