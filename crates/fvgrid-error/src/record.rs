//! The data aggregate describing one error occurrence.

use std::fmt;
use std::thread::{self, ThreadId};
use std::time::SystemTime;

use crate::severity::Severity;

/// One fully rendered error occurrence.
///
/// Built exactly once, at dispatch time, and moved/cloned by value after
/// that — nothing mutates a record once it exists. The timestamp and the
/// originating thread are captured in [`ErrorRecord::new`], so a record
/// always says where and when it was created, not where it was observed.
#[derive(Clone, Debug)]
pub struct ErrorRecord {
    /// Composed code: `(domain_id << 16) | value`. See [`crate::make_code`].
    pub code: u32,
    /// Severity the record was dispatched with.
    pub severity: Severity,
    /// Final message: language selected, placeholders substituted.
    pub message: String,
    /// Moment of creation.
    pub timestamp: SystemTime,
    /// Thread the record was created on.
    pub thread: ThreadId,
}

impl ErrorRecord {
    /// Build a record, capturing the current time and thread.
    pub fn new(code: u32, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            code,
            severity,
            message: message.into(),
            timestamp: SystemTime::now(),
            thread: thread::current().id(),
        }
    }

    /// Domain half of the composed code.
    #[inline]
    pub const fn domain_id(&self) -> u16 {
        (self.code >> 16) as u16
    }

    /// Value half of the composed code.
    #[inline]
    pub const fn value(&self) -> u16 {
        self.code as u16
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:#010x}] {} {}", self.code, self.severity, self.message)
    }
}
