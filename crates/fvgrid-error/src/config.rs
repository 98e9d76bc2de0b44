//! Process-wide error-handling configuration.
//!
//! The global state follows a copy-on-write snapshot pattern: readers get
//! an `Arc` to an immutable [`ErrorConfig`] and can hold it as long as
//! they like; writers build a whole new config and swap the current
//! pointer atomically. A thread holding a snapshot keeps observing the
//! pre-swap values until it drops the `Arc` — there is no torn read and
//! no reader-side lock.

use std::sync::{Arc, OnceLock};

use arc_swap::ArcSwap;

use crate::language::Language;
use crate::logger::{ErrorLogger, ThreadLocalBufferLogger};
use crate::severity::Severity;

/// How the raise operations react to severity >= `Error`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Policy {
    /// Unwind (panic with a [`Raised`](crate::Raised) payload) for
    /// severities at or above `Error`. The classic exception style.
    Throw,
    /// Never unwind; callers inspect [`Status`](crate::Status) /
    /// [`StatusOr`](crate::StatusOr) instead.
    Status,
}

/// One immutable configuration snapshot.
///
/// Mutating behavior means building a new value (usually from
/// `ErrorConfig::default()` plus the setters below) and publishing it
/// with [`Config::set`].
#[derive(Clone)]
pub struct ErrorConfig {
    /// Language used when rendering message templates.
    pub language: Language,
    /// Reaction policy for severity >= `Error`.
    pub policy: Policy,
    /// Records below this severity are dropped before any string work.
    pub min_severity: Severity,
    /// Per-thread capacity of the default buffering logger.
    pub thread_buffer_cap: usize,
    /// The active logging backend.
    pub logger: Arc<dyn ErrorLogger>,
}

impl Default for ErrorConfig {
    fn default() -> Self {
        Self {
            language: Language::EnUs,
            policy: Policy::Throw,
            min_severity: Severity::Warning,
            thread_buffer_cap: 256,
            logger: Arc::new(ThreadLocalBufferLogger),
        }
    }
}

impl ErrorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    pub fn policy(mut self, policy: Policy) -> Self {
        self.policy = policy;
        self
    }

    pub fn min_severity(mut self, min_severity: Severity) -> Self {
        self.min_severity = min_severity;
        self
    }

    pub fn thread_buffer_cap(mut self, cap: usize) -> Self {
        self.thread_buffer_cap = cap;
        self
    }

    pub fn logger(mut self, logger: Arc<dyn ErrorLogger>) -> Self {
        self.logger = logger;
        self
    }
}

static CURRENT: OnceLock<ArcSwap<ErrorConfig>> = OnceLock::new();

#[inline]
fn current() -> &'static ArcSwap<ErrorConfig> {
    CURRENT.get_or_init(|| ArcSwap::from_pointee(ErrorConfig::default()))
}

/// Global access point for the active configuration.
///
/// Lifetime is the process lifetime; the first [`Config::get`] (or `set`)
/// installs the defaults. Swapping is atomic, reading is lock-free.
pub struct Config;

impl Config {
    /// Snapshot of the active configuration.
    ///
    /// The returned `Arc` stays valid and unchanged for as long as the
    /// caller holds it, even across concurrent [`Config::set`] calls.
    #[inline]
    pub fn get() -> Arc<ErrorConfig> {
        current().load_full()
    }

    /// Publish a new configuration.
    ///
    /// The new snapshot is visible to subsequent `get` calls on every
    /// thread; snapshots already handed out are unaffected.
    pub fn set(cfg: ErrorConfig) {
        current().store(Arc::new(cfg));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_contract() {
        let cfg = ErrorConfig::default();
        assert_eq!(cfg.language, Language::EnUs);
        assert_eq!(cfg.policy, Policy::Throw);
        assert_eq!(cfg.min_severity, Severity::Warning);
        assert_eq!(cfg.thread_buffer_cap, 256);
    }

    #[test]
    fn setters_chain() {
        let cfg = ErrorConfig::new()
            .language(Language::PtBr)
            .policy(Policy::Status)
            .min_severity(Severity::Trace)
            .thread_buffer_cap(8);
        assert_eq!(cfg.language, Language::PtBr);
        assert_eq!(cfg.policy, Policy::Status);
        assert_eq!(cfg.min_severity, Severity::Trace);
        assert_eq!(cfg.thread_buffer_cap, 8);
    }
}
