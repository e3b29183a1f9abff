//! The queue carrying log lines to the render loop.
//!
//! Ad-hoc messages are bounded by the configured capacity and dropped when it
//! is reached. Final frames of finished trackers share the same FIFO but
//! bypass the bound, so a permanent line is never lost.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::mpsc::{self, error::TrySendError};

/// Creates a queue admitting at most `capacity` pending ad-hoc messages.
pub(crate) fn log_queue(capacity: usize) -> (LogSender, LogReceiver) {
    let (tx, rx) = mpsc::unbounded_channel();
    let pending = Arc::new(AtomicUsize::new(0));
    (
        LogSender {
            tx,
            pending: Arc::clone(&pending),
            capacity,
        },
        LogReceiver { rx, pending },
    )
}

pub(crate) struct LogSender {
    tx: mpsc::UnboundedSender<String>,
    /// Messages sent but not yet received, frames included.
    pending: Arc<AtomicUsize>,
    capacity: usize,
}

impl LogSender {
    /// Queue an ad-hoc message, failing with `Full` once `capacity` messages
    /// are waiting.
    ///
    /// The check is only exact while callers are serialized, which the
    /// manager does with its log lock.
    pub(crate) fn try_send(&self, message: String) -> Result<(), TrySendError<String>> {
        if self.pending.load(Ordering::Relaxed) >= self.capacity {
            return Err(TrySendError::Full(message));
        }
        self.send(message)
    }

    /// Queue a message regardless of the capacity.
    pub(crate) fn send(&self, message: String) -> Result<(), TrySendError<String>> {
        // Counted first so the receiver never decrements below zero.
        self.pending.fetch_add(1, Ordering::Relaxed);
        self.tx.send(message).map_err(|e| {
            self.pending.fetch_sub(1, Ordering::Relaxed);
            TrySendError::Closed(e.0)
        })
    }
}

pub(crate) struct LogReceiver {
    rx: mpsc::UnboundedReceiver<String>,
    pending: Arc<AtomicUsize>,
}

impl LogReceiver {
    pub(crate) async fn recv(&mut self) -> Option<String> {
        let message = self.rx.recv().await;
        self.received(message)
    }

    pub(crate) fn try_recv(&mut self) -> Option<String> {
        let message = self.rx.try_recv().ok();
        self.received(message)
    }

    /// Refuse new messages; those already queued can still be received.
    pub(crate) fn close(&mut self) {
        self.rx.close();
    }

    fn received(&self, message: Option<String>) -> Option<String> {
        if message.is_some() {
            self.pending.fetch_sub(1, Ordering::Relaxed);
        }
        message
    }
}
