//! Error handling for the multibar library.
//!
//! Nothing a producer does on the hot path can fail. The only fallible
//! operation is bringing up the render loop, which needs an OS thread and a
//! tokio runtime.

use std::io;
use thiserror::Error;

/// Errors that can happen when using multibar.
#[derive(Error, Debug)]
pub enum Error {
    /// Error from an underlying system.
    ///
    /// Raised when the render thread dies in a way that cannot be expressed
    /// as an I/O error, such as a panic inside a frame.
    #[error("Internal error: {0}")]
    Internal(String),

    /// I/O Error.
    ///
    /// Wraps failures to spawn the render thread or to build its runtime.
    #[error("I/O error")]
    IOError {
        #[from]
        source: io::Error,
    },
}

/// Result type alias for operations that can fail with a multibar error.
pub type Result<T> = std::result::Result<T, Error>;
