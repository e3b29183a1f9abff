//! The render loop.
//!
//! One loop runs per manager, on its own thread, and is the only writer to
//! the terminal while it runs. It waits on three sources:
//!
//! 1. the stop signal: erase the bars, print what is still queued, exit;
//! 2. a log message: erase the bars, print the message, redraw at once;
//! 3. the ticker: repaint the bars in place.
//!
//! The loop remembers how many rows it painted last so it can move back up
//! over them. When bars disappear between two frames the rows left over
//! are blanked, keeping the screen identical to the new, shorter layout.
//!
//! The loop only holds a weak reference to the manager. Once every manager
//! handle is dropped the stop channel closes and the loop erases the bars and
//! exits like after an explicit stop.

use super::manager::Shared;
use super::queue::LogReceiver;
use crate::terminal::Terminal;

use std::sync::{Arc, Weak};
use std::time::Duration;
use tokio::sync::oneshot;
use tokio::time::{self, MissedTickBehavior};
use tracing::{debug, trace};

pub(crate) async fn run(
    shared: Weak<Shared>,
    terminal: Arc<dyn Terminal>,
    tick_interval: Duration,
    mut logs: LogReceiver,
    mut stop: oneshot::Receiver<()>,
) {
    let mut painter = Painter::new(shared, terminal);
    let mut ticker = time::interval(tick_interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            biased;

            _ = &mut stop => {
                painter.erase();
                painter.drain(&mut logs);
                painter.flush();
                break;
            }
            Some(message) = logs.recv() => painter.log(&message),
            _ = ticker.tick() => painter.tick(),
        }
    }

    debug!("render loop stopped");
}

struct Painter {
    shared: Weak<Shared>,
    terminal: Arc<dyn Terminal>,
    /// Rows painted by the last frame; the cursor sits just below them.
    last_rows: usize,
}

impl Painter {
    fn new(shared: Weak<Shared>, terminal: Arc<dyn Terminal>) -> Self {
        Self {
            shared,
            terminal,
            last_rows: 0,
        }
    }

    /// Remove the painted bars from the screen.
    fn erase(&mut self) {
        if self.last_rows > 0 {
            let _ = self.terminal.move_cursor_up(self.last_rows);
            let _ = self.terminal.clear_to_end_of_screen();
        }
        self.last_rows = 0;
    }

    /// Close the queue and print every message still in it.
    ///
    /// Senders queue under the manager's log lock, and a sender finding the
    /// queue closed prints directly under the same lock, so holding it here
    /// keeps those prints behind the drained messages.
    fn drain(&self, logs: &mut LogReceiver) {
        let shared = self.shared.upgrade();
        let _logs = shared.as_ref().map(|shared| shared.logs.lock());
        logs.close();
        while let Some(message) = logs.try_recv() {
            self.print(&message);
        }
    }

    fn print(&self, message: &str) {
        let _ = self.terminal.write_line(message);
    }

    fn flush(&self) {
        let _ = self.terminal.flush();
    }

    fn log(&mut self, message: &str) {
        self.erase();
        self.print(message);
        self.last_rows = self.draw(0);
        self.flush();
    }

    fn tick(&mut self) {
        if self.last_rows > 0 {
            let _ = self.terminal.move_cursor_up(self.last_rows);
        }
        self.last_rows = self.draw(self.last_rows);
        self.flush();
    }

    /// Paint every bar from the cursor down and return the row count.
    ///
    /// `previous` is the height of the region being painted over.
    fn draw(&self, previous: usize) -> usize {
        let term = &self.terminal;
        let lines = self
            .shared
            .upgrade()
            .map(|shared| shared.render_lines())
            .unwrap_or_default();

        for line in &lines {
            let _ = term.clear_line();
            let _ = term.write_line(line);
        }

        if lines.len() < previous {
            let extra = previous - lines.len();
            for _ in 0..extra {
                let _ = term.clear_line();
                let _ = term.write_line("");
            }
            let _ = term.move_cursor_up(extra);
        }

        trace!(rows = lines.len(), previous, "frame drawn");
        lines.len()
    }
}
