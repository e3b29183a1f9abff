//! Manager module containing the display manager, its builder and configuration.
//!
//! # Overview
//!
//! - `manager` - [`ProgressManager`], the owner of the live bars
//! - `render` - The background render loop
//! - `queue` - The log queue feeding the render loop
//! - `builder` - [`ProgressManagerBuilder`] for configuring a manager
//! - `config` - [`DisplayConfig`] and its defaults
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use multibar::{ProgressManager, ProgressTracker};
//! use std::thread;
//!
//! let manager = ProgressManager::default();
//! let handles: Vec<_> = (0..3)
//!     .map(|i| {
//!         let manager = manager.clone();
//!         thread::spawn(move || {
//!             let tracker = ProgressTracker::new(1024, format!("file-{i}.bin"), i);
//!             manager.add(tracker.clone());
//!             for _ in 0..16 {
//!                 tracker.add(64);
//!             }
//!             manager.finish(&tracker);
//!         })
//!     })
//!     .collect();
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//! manager.shutdown().unwrap();
//! ```

pub mod builder;
pub mod config;
pub mod manager;
pub(crate) mod queue;
pub(crate) mod render;

pub use builder::ProgressManagerBuilder;
pub use config::DisplayConfig;
pub use manager::{ProgressManager, RENDER_THREAD_NAME};
