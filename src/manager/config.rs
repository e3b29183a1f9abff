//! Configuration structures and defaults for the progress manager.
//!
//! [`DisplayConfig`] holds the tuning knobs of the display. The defaults
//! suit a typical 80-column or wider terminal and a handful of concurrent
//! transfers.
//!
//! # Examples
//!
//! ```rust
//! use multibar::manager::DisplayConfig;
//! use std::time::Duration;
//!
//! let config = DisplayConfig::default();
//! assert_eq!(config.tick_interval, Duration::from_millis(100));
//! assert_eq!(config.log_capacity, 100);
//! ```

use crate::progress::BarLayout;
use crate::terminal::{StdoutTerminal, Terminal, FALLBACK_WIDTH};

use std::sync::Arc;
use std::time::Duration;

/// Display tuning knobs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Column layout of each bar.
    pub layout: BarLayout,
    /// Redraw cadence of the render loop.
    pub tick_interval: Duration,
    /// Number of log messages that can wait for the render loop; final
    /// frames are always queued.
    pub log_capacity: usize,
    /// Terminal width used when the size cannot be determined.
    pub fallback_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            layout: BarLayout::default(),
            tick_interval: Duration::from_millis(100),
            log_capacity: 100,
            fallback_width: FALLBACK_WIDTH,
        }
    }
}

impl DisplayConfig {
    /// Smallest usable tick interval; `tokio::time::interval` rejects zero.
    pub(crate) const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

    /// Copy of the configuration with values the runtime cannot accept raised
    /// to their minimum.
    pub(crate) fn sanitized(mut self) -> Self {
        self.tick_interval = self.tick_interval.max(Self::MIN_TICK_INTERVAL);
        self.log_capacity = self.log_capacity.max(1);
        self.fallback_width = self.fallback_width.max(1);
        self
    }
}

/// Configuration of a manager: the knobs plus the terminal it draws on.
#[derive(Clone)]
pub(crate) struct ManagerConfig {
    pub display: DisplayConfig,
    pub terminal: Arc<dyn Terminal>,
}

impl std::fmt::Debug for ManagerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ManagerConfig")
            .field("display", &self.display)
            .finish_non_exhaustive()
    }
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            display: DisplayConfig::default(),
            terminal: Arc::new(StdoutTerminal::new()),
        }
    }
}
