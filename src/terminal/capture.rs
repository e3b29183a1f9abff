//! A terminal fake that keeps a virtual screen.

use super::Terminal;

use parking_lot::Mutex;
use std::io;
use std::sync::Arc;

/// One operation received by a [`CaptureTerminal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermOp {
    /// [`Terminal::move_cursor_up`]
    CursorUp(usize),
    /// [`Terminal::clear_line`]
    ClearLine,
    /// [`Terminal::clear_to_end_of_screen`]
    ClearToEnd,
    /// [`Terminal::write_line`]
    Line(String),
    /// [`Terminal::flush`]
    Flush,
}

#[derive(Debug, Default)]
struct Screen {
    rows: Vec<Vec<char>>,
    cursor: usize,
    ops: Vec<TermOp>,
}

impl Screen {
    fn row_mut(&mut self) -> &mut Vec<char> {
        if self.rows.len() <= self.cursor {
            self.rows.resize_with(self.cursor + 1, Vec::new);
        }
        &mut self.rows[self.cursor]
    }
}

/// A [`Terminal`] that records everything and emulates the visible screen.
///
/// The emulation is line based: writing a line overwrites the current row
/// from its first column without erasing what lies past the new text, so a
/// renderer that forgets to clear shows up as leftover characters, just like
/// on a real terminal. Cloning shares the same screen.
#[derive(Debug, Clone, Default)]
pub struct CaptureTerminal {
    width: Option<usize>,
    screen: Arc<Mutex<Screen>>,
}

impl CaptureTerminal {
    /// Create a capture terminal reporting `width` columns.
    ///
    /// `None` emulates a failed size query.
    pub fn new(width: Option<usize>) -> Self {
        Self {
            width,
            screen: Arc::default(),
        }
    }

    /// Visible rows, with trailing blank rows dropped.
    pub fn screen(&self) -> Vec<String> {
        let screen = self.screen.lock();
        let mut rows: Vec<String> = screen
            .rows
            .iter()
            .map(|row| row.iter().collect::<String>().trim_end().to_string())
            .collect();
        while rows.last().is_some_and(|row| row.is_empty()) {
            rows.pop();
        }
        rows
    }

    /// Row the cursor is on.
    pub fn cursor(&self) -> usize {
        self.screen.lock().cursor
    }

    /// Every operation received so far.
    pub fn ops(&self) -> Vec<TermOp> {
        self.screen.lock().ops.clone()
    }

    /// Number of operations received so far.
    pub fn op_count(&self) -> usize {
        self.screen.lock().ops.len()
    }

    /// Every line written so far, in order, including redraws.
    pub fn written_lines(&self) -> Vec<String> {
        self.screen
            .lock()
            .ops
            .iter()
            .filter_map(|op| match op {
                TermOp::Line(line) => Some(line.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Terminal for CaptureTerminal {
    fn size(&self) -> Option<usize> {
        self.width
    }

    fn move_cursor_up(&self, n: usize) -> io::Result<()> {
        let mut screen = self.screen.lock();
        screen.cursor = screen.cursor.saturating_sub(n);
        screen.ops.push(TermOp::CursorUp(n));
        Ok(())
    }

    fn clear_line(&self) -> io::Result<()> {
        let mut screen = self.screen.lock();
        screen.row_mut().clear();
        screen.ops.push(TermOp::ClearLine);
        Ok(())
    }

    fn clear_to_end_of_screen(&self) -> io::Result<()> {
        let mut screen = self.screen.lock();
        let cursor = screen.cursor;
        screen.rows.truncate(cursor);
        screen.ops.push(TermOp::ClearToEnd);
        Ok(())
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        let mut screen = self.screen.lock();
        let row = screen.row_mut();
        for (i, c) in line.chars().enumerate() {
            match row.get_mut(i) {
                Some(cell) => *cell = c,
                None => row.push(c),
            }
        }
        screen.cursor += 1;
        screen.ops.push(TermOp::Line(line.to_string()));
        Ok(())
    }

    fn flush(&self) -> io::Result<()> {
        self.screen.lock().ops.push(TermOp::Flush);
        Ok(())
    }
}
