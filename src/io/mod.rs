//! I/O adapters that advance a [`ProgressTracker`] as bytes flow through.
//!
//! Every adapter forwards to the wrapped sink or source and counts only the
//! bytes the inner call reports as transferred. Errors are returned
//! unchanged and never advance the tracker; progress already counted by
//! earlier successful calls is kept.
//!
//! - [`ProgressWriter`] / [`ProgressReader`] for [`std::io`]
//! - [`AsyncProgressWriter`] for [`tokio::io::AsyncWrite`]
//! - [`ProgressStream`] for chunked byte streams such as HTTP bodies
//!
//! # Examples
//!
//! ```rust
//! use std::io::Write;
//! use multibar::{io::ProgressWriter, ProgressTracker};
//!
//! # fn main() -> std::io::Result<()> {
//! let tracker = ProgressTracker::new(11, "hello.txt", 0);
//! let mut writer = ProgressWriter::new(Vec::new(), tracker.clone());
//! writer.write_all(b"hello world")?;
//! assert_eq!(tracker.current(), 11);
//! # Ok(())
//! # }
//! ```
//!
//! [`ProgressTracker`]: crate::ProgressTracker

pub mod async_write;
pub mod blocking;
pub mod stream;

pub use async_write::AsyncProgressWriter;
pub use blocking::{ProgressReader, ProgressWriter};
pub use stream::ProgressStream;
