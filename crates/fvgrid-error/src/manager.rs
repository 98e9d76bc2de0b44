//! Stateless facade between dispatch and the active logger.

use crate::config::Config;
use crate::record::ErrorRecord;

/// Forwards log/flush calls to whichever logger the current snapshot
/// holds.
///
/// Each call pins one configuration snapshot for its whole duration, so
/// a concurrent [`Config::set`] can never make it observe half-updated
/// state: the record goes to exactly the logger that was active when the
/// call started.
pub struct ErrorManager;

impl ErrorManager {
    /// Hand a finished record to the active logger.
    pub fn log(record: ErrorRecord) {
        Config::get().logger.log(record);
    }

    /// Drain the active logger's buffer (for the default backend: the
    /// calling thread's buffer).
    pub fn flush() -> Vec<ErrorRecord> {
        Config::get().logger.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::severity::Severity;

    // Runs against the default thread-local logger; the buffer drained
    // here belongs to this test's thread only.
    #[test]
    fn log_then_flush_round_trip() {
        ErrorManager::flush(); // start clean on this thread
        ErrorManager::log(ErrorRecord::new(0x0001_0001, Severity::Error, "one"));
        ErrorManager::log(ErrorRecord::new(0x0001_0002, Severity::Error, "two"));
        let out = ErrorManager::flush();
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].message, "one");
        assert_eq!(out[1].message, "two");
        assert!(ErrorManager::flush().is_empty());
    }
}
