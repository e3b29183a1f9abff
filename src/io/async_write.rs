//! Wrapper for [`tokio::io::AsyncWrite`] sinks.

use crate::ProgressTracker;

use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};
use tokio::io::AsyncWrite;

/// An [`AsyncWrite`] adapter that advances a tracker by the bytes written.
///
/// Only `Poll::Ready(Ok(n))` results are counted.
///
/// ```rust
/// use multibar::{io::AsyncProgressWriter, ProgressTracker};
/// use tokio::io::AsyncWriteExt;
///
/// # #[tokio::main]
/// # async fn main() -> std::io::Result<()> {
/// let tracker = ProgressTracker::new(4, "chunk", 0);
/// let mut writer = AsyncProgressWriter::new(Vec::new(), tracker.clone());
/// writer.write_all(b"abcd").await?;
/// assert_eq!(tracker.current(), 4);
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct AsyncProgressWriter<W> {
    inner: W,
    tracker: ProgressTracker,
}

impl<W> AsyncProgressWriter<W> {
    /// Wrap `inner`, counting into `tracker`.
    pub fn new(inner: W, tracker: ProgressTracker) -> Self {
        Self { inner, tracker }
    }

    /// The tracker being advanced.
    pub fn tracker(&self) -> &ProgressTracker {
        &self.tracker
    }

    /// A reference to the wrapped sink.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Unwrap the adapter, returning the sink.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: AsyncWrite + Unpin> AsyncWrite for AsyncProgressWriter<W> {
    fn poll_write(
        self: Pin<&mut Self>,
        cx: &mut Context<'_>,
        buf: &[u8],
    ) -> Poll<io::Result<usize>> {
        let this = self.get_mut();
        let poll = Pin::new(&mut this.inner).poll_write(cx, buf);
        if let Poll::Ready(Ok(n)) = poll {
            this.tracker.add(n as u64);
        }
        poll
    }

    fn poll_flush(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Pin::new(&mut self.get_mut().inner).poll_flush(cx)
    }

    fn poll_shutdown(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<io::Result<()>> {
        Pin::new(&mut self.get_mut().inner).poll_shutdown(cx)
    }
}
