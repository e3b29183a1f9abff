//! Wrappers for [`std::io::Read`] and [`std::io::Write`].

use crate::ProgressTracker;

use std::io::{self, Read, Write};

/// A [`Write`] adapter that advances a tracker by the bytes written.
#[derive(Debug)]
pub struct ProgressWriter<W> {
    inner: W,
    tracker: ProgressTracker,
}

impl<W> ProgressWriter<W> {
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

impl<W: Write> Write for ProgressWriter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.tracker.add(n as u64);
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// A [`Read`] adapter that advances a tracker by the bytes read.
#[derive(Debug)]
pub struct ProgressReader<R> {
    inner: R,
    tracker: ProgressTracker,
}

impl<R> ProgressReader<R> {
    /// Wrap `inner`, counting into `tracker`.
    pub fn new(inner: R, tracker: ProgressTracker) -> Self {
        Self { inner, tracker }
    }

    /// The tracker being advanced.
    pub fn tracker(&self) -> &ProgressTracker {
        &self.tracker
    }

    /// Unwrap the adapter, returning the source.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Read> Read for ProgressReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.tracker.add(n as u64);
        Ok(n)
    }
}
