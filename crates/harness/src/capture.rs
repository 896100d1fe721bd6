// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Anneal Contributors

//! In-memory capture of an invoked command's console output.
//!
//! The sink holds two independent append-only buffers, one for status text
//! and one for error text. Writers are bound to the buffer generation
//! current when they were taken: [`CaptureSink::clear`] installs fresh
//! buffers, so late writes from an abandoned invocation land in an orphaned
//! buffer and can never leak into the next scenario.

use std::io::{self, Write};
use std::sync::{Arc, Mutex, PoisonError};

type Buffer = Arc<Mutex<Vec<u8>>>;

#[derive(Default)]
struct Buffers {
    status: Buffer,
    error: Buffer,
}

/// Resettable status/error buffer pair that invoked commands write into
/// instead of real console streams.
///
/// Cloning is cheap and all clones observe the same buffers.
#[derive(Clone, Default)]
pub struct CaptureSink {
    inner: Arc<Mutex<Buffers>>,
}

impl CaptureSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Status text accumulated since the last [`clear`](Self::clear).
    pub fn status_text(&self) -> String {
        read_buffer(&self.current().status)
    }

    /// Error text accumulated since the last [`clear`](Self::clear).
    pub fn error_text(&self) -> String {
        read_buffer(&self.current().error)
    }

    /// Writer appending to the current status buffer.
    pub fn status_writer(&self) -> CaptureWriter {
        CaptureWriter {
            buf: self.current().status,
        }
    }

    /// Writer appending to the current error buffer.
    pub fn error_writer(&self) -> CaptureWriter {
        CaptureWriter {
            buf: self.current().error,
        }
    }

    /// Resets both buffers to empty.
    ///
    /// Writers taken before the reset keep appending to the old, orphaned
    /// buffers; they do not pollute text captured after the reset.
    pub fn clear(&self) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        *inner = Buffers::default();
    }

    /// Guard that clears the sink when dropped.
    ///
    /// Arm this at the top of a scenario so the reset runs on every exit
    /// path, including assertion failures and propagated errors.
    pub fn reset_on_drop(&self) -> ResetGuard {
        ResetGuard { sink: self.clone() }
    }

    fn current(&self) -> Buffers {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        Buffers {
            status: Arc::clone(&inner.status),
            error: Arc::clone(&inner.error),
        }
    }
}

fn read_buffer(buf: &Buffer) -> String {
    let bytes = buf.lock().unwrap_or_else(PoisonError::into_inner);
    String::from_utf8_lossy(&bytes).into_owned()
}

/// Append-only handle into one capture buffer.
#[derive(Clone)]
pub struct CaptureWriter {
    buf: Buffer,
}

impl Write for CaptureWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        let mut buf = self.buf.lock().unwrap_or_else(PoisonError::into_inner);
        buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Clears the owning sink on drop. See [`CaptureSink::reset_on_drop`].
pub struct ResetGuard {
    sink: CaptureSink,
}

impl Drop for ResetGuard {
    fn drop(&mut self) {
        self.sink.clear();
    }
}

#[cfg(test)]
#[path = "capture_tests.rs"]
mod tests;
