//! Terminal control.
//!
//! The render loop never talks to stdout directly; it drives a
//! [`Terminal`], a small capability set covering width queries, cursor
//! movement and line clearing. [`StdoutTerminal`] is the real thing;
//! [`CaptureTerminal`] keeps a virtual screen so tests can check what a user
//! would actually see.
//!
//! # Examples
//!
//! ```rust
//! use multibar::terminal::{CaptureTerminal, Terminal};
//!
//! let term = CaptureTerminal::new(None);
//! assert_eq!(term.query_width(80), 80);
//!
//! term.write_line("hello").unwrap();
//! assert_eq!(term.screen(), vec!["hello".to_string()]);
//! ```

pub mod capture;
pub mod stdout;

pub use capture::{CaptureTerminal, TermOp};
pub use stdout::StdoutTerminal;

use std::io;

/// Width used when the terminal size cannot be determined.
pub const FALLBACK_WIDTH: usize = 80;

/// The operations the render loop needs from a terminal.
///
/// All output methods are fire-and-forget from the renderer's point of view:
/// it ignores their errors and repaints on the next tick.
pub trait Terminal: Send + Sync {
    /// Current column count, or `None` when it cannot be queried.
    fn size(&self) -> Option<usize>;

    /// Move the cursor up `n` rows.
    fn move_cursor_up(&self, n: usize) -> io::Result<()>;

    /// Clear the row under the cursor and return to its first column.
    fn clear_line(&self) -> io::Result<()>;

    /// Clear from the cursor to the end of the screen.
    fn clear_to_end_of_screen(&self) -> io::Result<()>;

    /// Write `line` followed by a newline.
    fn write_line(&self, line: &str) -> io::Result<()>;

    /// Flush any buffered output.
    fn flush(&self) -> io::Result<()>;

    /// Current column count, or `fallback` when the query fails or reports 0.
    fn query_width(&self, fallback: usize) -> usize {
        match self.size() {
            Some(width) if width > 0 => width,
            _ => fallback,
        }
    }
}
