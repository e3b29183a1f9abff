//! The display manager owning the live bars and the render loop.
//!
//! # Examples
//!
//! ```rust
//! use multibar::{terminal::CaptureTerminal, ProgressManagerBuilder, ProgressTracker};
//!
//! let term = CaptureTerminal::new(Some(80));
//! let manager = ProgressManagerBuilder::new().terminal(term.clone()).build();
//!
//! let a = ProgressTracker::new(10, "a.txt", 0);
//! manager.add(a.clone());
//! assert!(manager.is_running());
//!
//! a.add(10);
//! manager.finish(&a);
//! assert!(!manager.is_running());
//!
//! manager.wait().unwrap();
//! assert_eq!(term.screen(), vec![a.render(80)]);
//! ```

use super::config::{DisplayConfig, ManagerConfig};
use super::queue::{self, LogSender};
use super::render;
use crate::progress::ProgressTracker;
use crate::terminal::Terminal;
use crate::{Error, Result};

use parking_lot::Mutex;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tokio::sync::{mpsc::error::TrySendError, oneshot};
use tracing::{debug, error, warn};

/// Name given to the render thread.
pub const RENDER_THREAD_NAME: &str = "progress-render";

/// Coordinates a set of [`ProgressTracker`]s drawn as live bars.
///
/// The manager is a cheap, cloneable handle; clones share the same bars and
/// the same render loop. Registering the first tracker starts a background
/// render loop that owns the terminal: it repaints every tick, and prints
/// [`log`](Self::log) messages above the bars. The loop stops by itself
/// once the last tracker is removed or finished.
///
/// Structural changes take one short lock. Tracker values are read without
/// it, so a redraw may show a value a few bytes behind a concurrent `add`.
#[derive(Clone)]
pub struct ProgressManager {
    shared: Arc<Shared>,
}

/// State shared between the manager handles and the render loop.
pub(crate) struct Shared {
    pub(crate) display: DisplayConfig,
    pub(crate) terminal: Arc<dyn Terminal>,
    state: Mutex<State>,
    /// Sender of the running loop's log queue. Held while queueing and while
    /// printing directly, and by the exiting loop while it drains the queue.
    pub(crate) logs: Mutex<Option<LogSender>>,
    /// Serializes `start` and `wait`.
    lifecycle: Mutex<()>,
    dropped_logs: AtomicU64,
}

#[derive(Default)]
struct State {
    trackers: Vec<ProgressTracker>,
    running: bool,
    stop: Option<oneshot::Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl State {
    /// Unregister the first handle pointing at `tracker`.
    fn remove(&mut self, tracker: &ProgressTracker) -> bool {
        match self.trackers.iter().position(|t| t.ptr_eq(tracker)) {
            Some(idx) => {
                self.trackers.remove(idx);
                true
            }
            None => false,
        }
    }

    fn signal_stop(&mut self) {
        if !self.running {
            return;
        }
        self.running = false;
        if let Some(stop) = self.stop.take() {
            // The loop may already be gone; nothing to signal then.
            let _ = stop.send(());
        }
        debug!("render loop stop requested");
    }
}

impl Shared {
    /// Registered trackers sorted by display order.
    pub(crate) fn snapshot(&self) -> Vec<ProgressTracker> {
        let mut trackers = self.state.lock().trackers.clone();
        trackers.sort_by_key(ProgressTracker::order);
        trackers
    }

    pub(crate) fn width(&self) -> usize {
        self.terminal.query_width(self.display.fallback_width)
    }

    pub(crate) fn render_lines(&self) -> Vec<String> {
        let width = self.width();
        self.snapshot()
            .iter()
            .map(|tracker| tracker.render_with(&self.display.layout, width))
            .collect()
    }

    /// Print on the caller's thread, used while no loop owns the terminal.
    fn print_direct(&self, message: &str) {
        let _ = self.terminal.write_line(message);
        let _ = self.terminal.flush();
    }
}

impl fmt::Debug for ProgressManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.state.lock();
        f.debug_struct("ProgressManager")
            .field("display", &self.shared.display)
            .field("trackers", &state.trackers.len())
            .field("running", &state.running)
            .finish()
    }
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new(ManagerConfig::default())
    }
}

impl ProgressManager {
    /// Creates a new manager with the given configuration.
    pub(crate) fn new(config: ManagerConfig) -> Self {
        Self {
            shared: Arc::new(Shared {
                display: config.display,
                terminal: config.terminal,
                state: Mutex::new(State::default()),
                logs: Mutex::new(None),
                lifecycle: Mutex::new(()),
                dropped_logs: AtomicU64::new(0),
            }),
        }
    }

    /// Gets the display configuration.
    pub fn display_config(&self) -> &DisplayConfig {
        &self.shared.display
    }

    /// Register `tracker` as a live bar and make sure the render loop runs.
    ///
    /// Registering the same tracker twice draws it twice.
    pub fn add(&self, tracker: ProgressTracker) {
        self.shared.state.lock().trackers.push(tracker);
        if let Err(e) = self.start() {
            error!(error = %e, "failed to start the render loop");
        }
    }

    /// Unregister `tracker` without printing anything.
    ///
    /// Stops the render loop when no tracker is left. Returns whether the
    /// tracker was registered.
    pub fn remove(&self, tracker: &ProgressTracker) -> bool {
        let mut state = self.shared.state.lock();
        let removed = state.remove(tracker);
        if state.trackers.is_empty() {
            state.signal_stop();
        }
        removed
    }

    /// Unregister `tracker` and print its final frame as a permanent line.
    ///
    /// The frame is queued like a [`log`](Self::log) message, so it lands
    /// above the live bars when the loop runs, but it is never dropped for a
    /// full queue. Nothing is printed for a tracker that was not registered.
    /// Stops the render loop when no tracker is left.
    pub fn finish(&self, tracker: &ProgressTracker) -> bool {
        let removed = self.shared.state.lock().remove(tracker);
        if removed {
            let frame = tracker.render_with(&self.shared.display.layout, self.shared.width());
            self.emit(frame, false);
        }

        let mut state = self.shared.state.lock();
        if state.trackers.is_empty() {
            state.signal_stop();
        }
        removed
    }

    /// Print `message` above the live bars.
    ///
    /// While the render loop runs the message is queued and the call returns
    /// at once. When the queue is full the message is dropped and counted in
    /// [`dropped_logs`](Self::dropped_logs). Without a loop the message is
    /// printed directly on the calling thread.
    pub fn log(&self, message: impl Into<String>) {
        self.emit(message.into(), true);
    }

    fn emit(&self, message: String, droppable: bool) {
        // Held across the fallback: an exiting loop drains its queue under
        // this lock, so a direct print always follows the queued messages.
        let logs = self.shared.logs.lock();
        let sent = match logs.as_ref() {
            Some(sender) if droppable => sender.try_send(message),
            Some(sender) => sender.send(message),
            None => Err(TrySendError::Closed(message)),
        };
        match sent {
            Ok(()) => {}
            Err(TrySendError::Full(message)) => {
                self.shared.dropped_logs.fetch_add(1, Ordering::Relaxed);
                warn!(
                    capacity = self.shared.display.log_capacity,
                    dropped = %message,
                    "log queue full, dropping message"
                );
            }
            Err(TrySendError::Closed(message)) => self.shared.print_direct(&message),
        }
    }

    /// Start the render loop if it is not running.
    ///
    /// A loop that is still winding down after [`stop`](Self::stop) is joined
    /// by the new render thread before it draws, so this never waits on the
    /// terminal.
    pub fn start(&self) -> Result<()> {
        if self.is_running() {
            return Ok(());
        }
        let _lifecycle = self.shared.lifecycle.lock();
        if self.is_running() {
            return Ok(());
        }

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_time()
            .build()?;
        let (logs_tx, logs_rx) = queue::log_queue(self.shared.display.log_capacity);
        let (stop_tx, stop_rx) = oneshot::channel();

        let previous = {
            let mut state = self.shared.state.lock();
            state.running = true;
            state.stop = Some(stop_tx);
            Arc::new(Mutex::new(state.handle.take()))
        };
        // Installed before the thread exists so messages logged from here on
        // reach the new loop instead of racing its first frame.
        *self.shared.logs.lock() = Some(logs_tx);

        let shared = Arc::downgrade(&self.shared);
        let terminal = Arc::clone(&self.shared.terminal);
        let tick_interval = self.shared.display.tick_interval;
        let predecessor = Arc::clone(&previous);
        let spawned = thread::Builder::new()
            .name(RENDER_THREAD_NAME.to_string())
            .spawn(move || {
                // The previous loop must be gone before this one paints.
                let previous = predecessor.lock().take();
                if let Err(e) = join_render_thread(previous) {
                    error!(error = %e, "previous render loop ended abnormally");
                }
                runtime.block_on(render::run(shared, terminal, tick_interval, logs_rx, stop_rx))
            });

        match spawned {
            Ok(handle) => {
                let mut state = self.shared.state.lock();
                state.handle = Some(handle);
                debug!(
                    tick_interval = ?tick_interval,
                    trackers = state.trackers.len(),
                    "render loop started"
                );
                Ok(())
            }
            Err(e) => {
                *self.shared.logs.lock() = None;
                let mut state = self.shared.state.lock();
                state.running = false;
                state.stop = None;
                state.handle = previous.lock().take();
                Err(e.into())
            }
        }
    }

    /// Signal the render loop to erase the bars and exit.
    ///
    /// Registered trackers stay registered; a later [`start`](Self::start) or
    /// [`add`](Self::add) draws them again.
    pub fn stop(&self) {
        self.shared.state.lock().signal_stop();
    }

    /// Wait for a stopped render loop to finish its cleanup.
    ///
    /// Returns immediately when no loop was started or the loop is still
    /// running; this never stops the loop itself. A concurrent
    /// [`start`](Self::start) of a stopped manager waits for this call.
    pub fn wait(&self) -> Result<()> {
        let _lifecycle = self.shared.lifecycle.lock();
        let handle = {
            let mut state = self.shared.state.lock();
            if state.running {
                return Ok(());
            }
            state.handle.take()
        };
        join_render_thread(handle)
    }

    /// Stop the render loop and wait until it has erased the bars.
    pub fn shutdown(&self) -> Result<()> {
        self.stop();
        self.wait()
    }

    /// Whether a render loop is running.
    pub fn is_running(&self) -> bool {
        self.shared.state.lock().running
    }

    /// Number of registered trackers, duplicates included.
    pub fn len(&self) -> usize {
        self.shared.state.lock().trackers.len()
    }

    /// Whether no tracker is registered.
    pub fn is_empty(&self) -> bool {
        self.shared.state.lock().trackers.is_empty()
    }

    /// Registered trackers in display order.
    pub fn snapshot(&self) -> Vec<ProgressTracker> {
        self.shared.snapshot()
    }

    /// The lines the next redraw would paint, top to bottom.
    pub fn render_lines(&self) -> Vec<String> {
        self.shared.render_lines()
    }

    /// Current terminal width, or the fallback width when it is unknown.
    pub fn width(&self) -> usize {
        self.shared.width()
    }

    /// Number of log messages dropped because the queue was full.
    pub fn dropped_logs(&self) -> u64 {
        self.shared.dropped_logs.load(Ordering::Relaxed)
    }
}

fn join_render_thread(handle: Option<JoinHandle<()>>) -> Result<()> {
    let Some(handle) = handle else {
        return Ok(());
    };
    handle
        .join()
        .map_err(|_| Error::Internal("render thread panicked".to_string()))
}
