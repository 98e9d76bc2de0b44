//! The logger capability and the two built-in backends.

use std::cell::RefCell;

use crate::config::Config;
use crate::record::ErrorRecord;

/// A pluggable logging backend.
///
/// Installed via [`ErrorConfig::logger`](crate::ErrorConfig::logger) and
/// invoked through the [`ErrorManager`](crate::ErrorManager) facade.
/// Implementations shared across threads must make `log` thread-safe
/// (the `Send + Sync` bound exists because the config snapshot holding
/// the logger travels between threads).
pub trait ErrorLogger: Send + Sync {
    /// Record one entry.
    fn log(&self, record: ErrorRecord);

    /// Take and return the buffered entries, oldest first.
    ///
    /// Backends without internal buffering (direct console/file writers)
    /// keep this default, which is a no-op returning nothing.
    fn flush(&self) -> Vec<ErrorRecord> {
        Vec::new()
    }
}

thread_local! {
    // One buffer per OS thread, shared by every ThreadLocalBufferLogger
    // handle — same shape as a `static thread_local` member.
    static TL_BUFFER: RefCell<Vec<ErrorRecord>> = const { RefCell::new(Vec::new()) };
}

/// Default backend: one independent, unsynchronized buffer per calling
/// thread.
///
/// No locks anywhere — the design invariant is that no thread ever
/// touches another thread's buffer, so flushing thread A's records from
/// thread B is not supported and returns B's own (possibly empty) buffer.
///
/// When a thread's buffer is at the configured capacity, `log` silently
/// drops the **newest** record. This is drop-newest, not a ring buffer:
/// once full, the oldest entries are what a later flush returns.
#[derive(Default)]
pub struct ThreadLocalBufferLogger;

impl ErrorLogger for ThreadLocalBufferLogger {
    fn log(&self, record: ErrorRecord) {
        let cap = Config::get().thread_buffer_cap;
        TL_BUFFER.with(|buf| {
            let mut buf = buf.borrow_mut();
            if buf.len() < cap {
                buf.push(record);
            }
        });
    }

    /// Takes the calling thread's entire buffer in O(1), leaving it
    /// empty. Everything logged on this thread since its last flush is
    /// returned, in order, exactly once.
    fn flush(&self) -> Vec<ErrorRecord> {
        TL_BUFFER.with(|buf| std::mem::take(&mut *buf.borrow_mut()))
    }
}

/// Unbuffered backend that writes each record straight to stderr.
///
/// Useful as an injected replacement when records should be visible
/// immediately instead of waiting for a flush. `flush` is the default
/// no-op.
#[derive(Default)]
pub struct StderrLogger;

impl ErrorLogger for StderrLogger {
    fn log(&self, record: ErrorRecord) {
        eprintln!("{record}");
    }
}
