//! Wrapper for fallible byte-chunk streams.
//!
//! HTTP clients usually hand out bodies as a stream of `Result<Bytes, E>`.
//! Wrapping that stream counts each chunk as it is pulled, before the
//! caller writes it anywhere.

use crate::ProgressTracker;

use futures::stream::{Stream, StreamExt};
use std::pin::Pin;
use std::task::{Context, Poll};

/// A [`Stream`] adapter that advances a tracker by the length of each `Ok` chunk.
///
/// Chunks are passed through untouched; errors are passed through and not
/// counted.
///
/// ```rust
/// use futures::{stream, StreamExt};
/// use multibar::{io::ProgressStream, ProgressTracker};
///
/// # #[tokio::main]
/// # async fn main() {
/// let tracker = ProgressTracker::new(5, "body", 0);
/// let chunks = stream::iter(vec![Ok::<_, std::io::Error>(vec![0u8; 2]), Ok(vec![0u8; 3])]);
/// let mut body = ProgressStream::new(chunks, tracker.clone());
/// while let Some(chunk) = body.next().await {
///     chunk.unwrap();
/// }
/// assert!(tracker.is_complete());
/// # }
/// ```
#[derive(Debug)]
pub struct ProgressStream<S> {
    inner: S,
    tracker: ProgressTracker,
}

impl<S> ProgressStream<S> {
    /// Wrap `inner`, counting into `tracker`.
    pub fn new(inner: S, tracker: ProgressTracker) -> Self {
        Self { inner, tracker }
    }

    /// The tracker being advanced.
    pub fn tracker(&self) -> &ProgressTracker {
        &self.tracker
    }

    /// Unwrap the adapter, returning the stream.
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S, B, E> Stream for ProgressStream<S>
where
    S: Stream<Item = Result<B, E>> + Unpin,
    B: AsRef<[u8]>,
{
    type Item = Result<B, E>;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        let this = self.get_mut();
        let poll = this.inner.poll_next_unpin(cx);
        if let Poll::Ready(Some(Ok(chunk))) = &poll {
            this.tracker.add(chunk.as_ref().len() as u64);
        }
        poll
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
