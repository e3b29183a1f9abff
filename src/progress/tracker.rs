//! The progress counter shared between producers and the renderer.

use crate::progress::style::{self, BarLayout};

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// A named counter with a fixed target and a monotonically increasing value.
///
/// `ProgressTracker` is a cheap, cloneable handle: every clone points at the
/// same counter, so a producer can keep one clone while the
/// [`ProgressManager`](crate::ProgressManager) holds another for rendering.
/// Two handles refer to the same tracker when [`ptr_eq`](Self::ptr_eq) says
/// so; the manager uses that identity for `remove` and `finish`.
///
/// ```rust
/// use multibar::ProgressTracker;
///
/// let tracker = ProgressTracker::new(100, "cover.jpg", 0);
/// let handle = tracker.clone();
/// std::thread::spawn(move || handle.add(50)).join().unwrap();
/// assert_eq!(tracker.current(), 50);
/// assert!(tracker.render(80).ends_with(" 50%"));
/// ```
#[derive(Clone)]
pub struct ProgressTracker {
    inner: Arc<Inner>,
}

struct Inner {
    total: u64,
    current: AtomicU64,
    name: String,
    order: i64,
}

impl fmt::Debug for ProgressTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProgressTracker")
            .field("name", &self.inner.name)
            .field("order", &self.inner.order)
            .field("current", &self.current())
            .field("total", &self.inner.total)
            .finish()
    }
}

impl ProgressTracker {
    /// Create a new tracker.
    ///
    /// # Arguments
    /// * `total` - Target value; 0 means the size is unknown
    /// * `name` - Label shown in the name column
    /// * `order` - Sort key; lower values are drawn higher up
    pub fn new(total: u64, name: impl Into<String>, order: i64) -> Self {
        Self {
            inner: Arc::new(Inner {
                total,
                current: AtomicU64::new(0),
                name: name.into(),
                order,
            }),
        }
    }

    /// Advance the counter by `n`.
    ///
    /// Wait-free and callable from any thread. The value is never clamped to
    /// [`total`](Self::total).
    pub fn add(&self, n: u64) {
        self.inner.current.fetch_add(n, Ordering::Relaxed);
    }

    /// Current value.
    pub fn current(&self) -> u64 {
        self.inner.current.load(Ordering::Relaxed)
    }

    /// Target value set at creation.
    pub fn total(&self) -> u64 {
        self.inner.total
    }

    /// Display label.
    pub fn name(&self) -> &str {
        &self.inner.name
    }

    /// Display sort key.
    pub fn order(&self) -> i64 {
        self.inner.order
    }

    /// Progress as a percentage of the total, 0 when the total is unknown.
    pub fn percent(&self) -> f64 {
        style::percent(self.current(), self.inner.total)
    }

    /// Whether the current value has reached the total.
    pub fn is_complete(&self) -> bool {
        self.current() >= self.inner.total
    }

    /// Whether both handles point at the same tracker.
    pub fn ptr_eq(&self, other: &ProgressTracker) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    /// Render the bar line for a terminal `terminal_width` cells wide.
    pub fn render(&self, terminal_width: usize) -> String {
        self.render_with(&BarLayout::default(), terminal_width)
    }

    /// Render the bar line with a custom column layout.
    pub fn render_with(&self, layout: &BarLayout, terminal_width: usize) -> String {
        style::render_bar(
            &self.inner.name,
            self.current(),
            self.inner.total,
            terminal_width,
            layout,
        )
    }
}
