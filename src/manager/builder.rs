//! Builder pattern implementation for creating ProgressManager instances.
//!
//! # Examples
//!
//! ## Basic Builder Usage
//!
//! ```rust
//! use multibar::manager::ProgressManagerBuilder;
//! use std::time::Duration;
//!
//! let manager = ProgressManagerBuilder::new()
//!     .tick_interval(Duration::from_millis(50))
//!     .name_width(30)
//!     .build();
//! assert!(!manager.is_running());
//! ```
//!
//! ## Drawing on a Capture Terminal
//!
//! ```rust
//! use multibar::manager::ProgressManagerBuilder;
//! use multibar::terminal::CaptureTerminal;
//!
//! let term = CaptureTerminal::new(Some(100));
//! let manager = ProgressManagerBuilder::new().terminal(term.clone()).build();
//! manager.log("not running yet, printed directly");
//! assert_eq!(term.screen().len(), 1);
//! ```

use super::{
    config::{DisplayConfig, ManagerConfig},
    manager::ProgressManager,
};
use crate::progress::BarLayout;
use crate::terminal::Terminal;

use std::{sync::Arc, time::Duration};

/// A builder used to create a [`ProgressManager`].
#[derive(Debug, Default)]
pub struct ProgressManagerBuilder {
    config: ManagerConfig,
}

impl ProgressManagerBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        ProgressManagerBuilder::default()
    }

    /// Replace every tuning knob at once.
    pub fn display_config(mut self, display: DisplayConfig) -> Self {
        self.config.display = display;
        self
    }

    /// Set the bar column layout.
    pub fn layout(mut self, layout: BarLayout) -> Self {
        self.config.display.layout = layout;
        self
    }

    /// Set the display width of the name column.
    pub fn name_width(mut self, name_width: usize) -> Self {
        self.config.display.layout.name_width = name_width;
        self
    }

    /// Set the minimum width of the bar itself.
    pub fn min_bar_width(mut self, min_bar_width: usize) -> Self {
        self.config.display.layout.min_bar_width = min_bar_width;
        self
    }

    /// Set the redraw cadence.
    ///
    /// A zero interval is raised to one millisecond.
    pub fn tick_interval(mut self, tick_interval: Duration) -> Self {
        self.config.display.tick_interval = tick_interval;
        self
    }

    /// Set how many log messages may wait for the render loop.
    ///
    /// Messages logged while the queue is full are dropped. Final frames of
    /// finished trackers do not count against it. A zero capacity is raised
    /// to one.
    pub fn log_capacity(mut self, log_capacity: usize) -> Self {
        self.config.display.log_capacity = log_capacity;
        self
    }

    /// Set the width used when the terminal size cannot be determined.
    pub fn fallback_width(mut self, fallback_width: usize) -> Self {
        self.config.display.fallback_width = fallback_width;
        self
    }

    /// Draw on `terminal` instead of stdout.
    pub fn terminal<T: Terminal + 'static>(mut self, terminal: T) -> Self {
        self.config.terminal = Arc::new(terminal);
        self
    }

    /// Draw on a shared terminal instead of stdout.
    pub fn shared_terminal(mut self, terminal: Arc<dyn Terminal>) -> Self {
        self.config.terminal = terminal;
        self
    }

    /// Create the [`ProgressManager`] with the specified options.
    pub fn build(mut self) -> ProgressManager {
        self.config.display = self.config.display.sanitized();
        ProgressManager::new(self.config)
    }
}
