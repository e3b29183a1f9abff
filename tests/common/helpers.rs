use std::io::{self, Write};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Condvar, Mutex, MutexGuard};
use std::thread;
use std::time::{Duration, Instant};

use multibar::manager::RENDER_THREAD_NAME;
use multibar::terminal::{CaptureTerminal, Terminal};
use multibar::{BarLayout, ProgressManager, ProgressManagerBuilder, ProgressTracker};

// Common test constants
pub const TEST_WIDTH: usize = 80;
/// Bar width at [`TEST_WIDTH`] with the default layout: 80 - 43 - 1.
pub const TEST_BAR_WIDTH: usize = 36;
pub const TEST_TICK: Duration = Duration::from_millis(10);
pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

// === Manager Helpers ===

/// Creates a capture terminal reporting the test width
pub fn create_capture_terminal() -> CaptureTerminal {
    CaptureTerminal::new(Some(TEST_WIDTH))
}

/// Creates a fast-ticking manager drawing on `term`
pub fn create_test_manager(term: &CaptureTerminal) -> ProgressManager {
    ProgressManagerBuilder::new()
        .terminal(term.clone())
        .tick_interval(TEST_TICK)
        .build()
}

/// Creates a tracker already advanced to `current`
pub fn create_tracker(total: u64, current: u64, name: &str, order: i64) -> ProgressTracker {
    let tracker = ProgressTracker::new(total, name, order);
    tracker.add(current);
    tracker
}

/// Polls `condition` until it holds or the test timeout expires
pub fn wait_until(mut condition: impl FnMut() -> bool) -> bool {
    let deadline = Instant::now() + TEST_TIMEOUT;
    while Instant::now() < deadline {
        if condition() {
            return true;
        }
        thread::sleep(Duration::from_millis(5));
    }
    condition()
}

/// Waits until the capture terminal shows exactly `expected`
pub fn assert_screen_eventually(term: &CaptureTerminal, expected: &[String]) {
    let reached = wait_until(|| term.screen() == expected);
    assert!(
        reached,
        "screen never matched\nexpected: {:#?}\nactual: {:#?}",
        expected,
        term.screen()
    );
}

/// Renders `tracker` the way the manager does at the test width
pub fn test_line(tracker: &ProgressTracker) -> String {
    tracker.render_with(&BarLayout::default(), TEST_WIDTH)
}

/// Builds the line expected for an ASCII name at the test width
pub fn expected_line(name: &str, filled: usize, mouth: char, percent: &str) -> String {
    let dots = TEST_BAR_WIDTH - filled - 1;
    format!(
        "{:<35} [{}{}{}] {}%",
        name,
        "▇".repeat(filled),
        mouth,
        "·".repeat(dots),
        percent
    )
}

// === Terminal Fakes ===

/// A capture terminal whose `write_line` blocks while the gate is held
#[derive(Clone)]
pub struct GatedTerminal {
    inner: CaptureTerminal,
    gate: Arc<Mutex<()>>,
    entered: Arc<AtomicUsize>,
}

impl GatedTerminal {
    pub fn new(inner: CaptureTerminal) -> Self {
        Self {
            inner,
            gate: Arc::new(Mutex::new(())),
            entered: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Holds the gate until the guard is dropped
    pub fn close(&self) -> MutexGuard<'_, ()> {
        self.gate.lock().unwrap()
    }

    /// Number of `write_line` calls started so far
    pub fn entered(&self) -> usize {
        self.entered.load(Ordering::SeqCst)
    }
}

impl Terminal for GatedTerminal {
    fn size(&self) -> Option<usize> {
        self.inner.size()
    }

    fn move_cursor_up(&self, n: usize) -> io::Result<()> {
        self.inner.move_cursor_up(n)
    }

    fn clear_line(&self) -> io::Result<()> {
        self.inner.clear_line()
    }

    fn clear_to_end_of_screen(&self) -> io::Result<()> {
        self.inner.clear_to_end_of_screen()
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        self.entered.fetch_add(1, Ordering::SeqCst);
        let _open = self.gate.lock().unwrap();
        self.inner.write_line(line)
    }

    fn flush(&self) -> io::Result<()> {
        self.inner.flush()
    }
}

#[derive(Default)]
struct Held {
    lines: Vec<String>,
    waiting: Option<String>,
}

/// A capture terminal where the render thread blocks on chosen lines
///
/// Writes from any other thread go straight through.
#[derive(Clone)]
pub struct LineGateTerminal {
    inner: CaptureTerminal,
    held: Arc<(Mutex<Held>, Condvar)>,
}

impl LineGateTerminal {
    pub fn new(inner: CaptureTerminal) -> Self {
        Self {
            inner,
            held: Arc::new((Mutex::new(Held::default()), Condvar::new())),
        }
    }

    /// Blocks the render thread whenever it writes `line`
    pub fn hold(&self, line: &str) {
        self.held.0.lock().unwrap().lines.push(line.to_string());
    }

    pub fn release(&self, line: &str) {
        let (held, cond) = &*self.held;
        held.lock().unwrap().lines.retain(|l| l != line);
        cond.notify_all();
    }

    /// The held line the render thread is blocked on, if any
    pub fn waiting_on(&self) -> Option<String> {
        self.held.0.lock().unwrap().waiting.clone()
    }
}

impl Terminal for LineGateTerminal {
    fn size(&self) -> Option<usize> {
        self.inner.size()
    }

    fn move_cursor_up(&self, n: usize) -> io::Result<()> {
        self.inner.move_cursor_up(n)
    }

    fn clear_line(&self) -> io::Result<()> {
        self.inner.clear_line()
    }

    fn clear_to_end_of_screen(&self) -> io::Result<()> {
        self.inner.clear_to_end_of_screen()
    }

    fn write_line(&self, line: &str) -> io::Result<()> {
        if thread::current().name() == Some(RENDER_THREAD_NAME) {
            let (held, cond) = &*self.held;
            let mut held = held.lock().unwrap();
            while held.lines.iter().any(|l| l == line) {
                held.waiting = Some(line.to_string());
                held = cond.wait(held).unwrap();
            }
            held.waiting = None;
        }
        self.inner.write_line(line)
    }

    fn flush(&self) -> io::Result<()> {
        self.inner.flush()
    }
}

// === Writer Fakes ===

/// A sink accepting `limit` bytes in total, then failing
pub struct FailingWriter {
    pub written: Vec<u8>,
    pub limit: usize,
}

impl FailingWriter {
    pub fn new(limit: usize) -> Self {
        Self {
            written: Vec::new(),
            limit,
        }
    }
}

impl Write for FailingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let room = self.limit - self.written.len();
        if room == 0 {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "sink closed"));
        }
        let n = room.min(buf.len());
        self.written.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A sink accepting at most `chunk` bytes per call
pub struct ChunkedWriter {
    pub written: Vec<u8>,
    pub chunk: usize,
    pub calls: usize,
}

impl ChunkedWriter {
    pub fn new(chunk: usize) -> Self {
        Self {
            written: Vec::new(),
            chunk,
            calls: 0,
        }
    }
}

impl Write for ChunkedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.calls += 1;
        let n = self.chunk.min(buf.len());
        self.written.extend_from_slice(&buf[..n]);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Creates test content of specified size
pub fn create_test_content(size: usize) -> Vec<u8> {
    (0..size).map(|i| (i % 256) as u8).collect()
}
