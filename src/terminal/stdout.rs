//! The real terminal on standard output.

use super::Terminal;

use console::Term;
use std::fmt;
use std::io;

/// A [`Terminal`] backed by a buffered [`console::Term`] on stdout.
///
/// Output is buffered until [`Terminal::flush`], so that each frame reaches
/// the terminal in one write.
#[derive(Clone)]
pub struct StdoutTerminal {
    term: Term,
}

impl fmt::Debug for StdoutTerminal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StdoutTerminal")
            .field("is_term", &self.term.is_term())
            .finish()
    }
}

impl Default for StdoutTerminal {
    fn default() -> Self {
        Self::new()
    }
}

impl StdoutTerminal {
    /// Create a terminal writing to stdout.
    pub fn new() -> Self {
        Self {
            term: Term::buffered_stdout(),
        }
    }
}

impl Terminal for StdoutTerminal {
    fn size(&self) -> Option<usize> {
        self.term.size_checked().map(|(_rows, cols)| cols as usize)
    }

    fn move_cursor_up(&self, n: usize) -> io::Result<()> {
        if n == 0 {
            return Ok(());
        }
        self.term.move_cursor_up(n)
    }

    fn clear_line(&self) -> io::Result<()> {
        self.term.clear_line()
    }

    fn clear_to_end_of_screen(&self) -> io::Result<()> {
        self.term.clear_to_end_of_screen()
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        self.term.write_line(line)
    }

    fn flush(&self) -> io::Result<()> {
        self.term.flush()
    }
}
