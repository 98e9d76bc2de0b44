//! The policy-aware front ends: `raise`, `raise_status`, `assert_that`.
//!
//! Both front ends share the dispatch pipeline and the same gate; only
//! the reaction differs. `raise` unwinds (panics with a [`Raised`]
//! payload) when the gate is satisfied, `raise_status` returns a
//! [`Status`] failure instead and never unwinds.

use std::panic::{self, UnwindSafe};

use thiserror::Error;

use crate::codes::CoreErr;
use crate::config::{Config, Policy};
use crate::dispatch::{self, KvPairs};
use crate::domain::{code, ErrorDomain};
use crate::manager::ErrorManager;
use crate::record::ErrorRecord;
use crate::severity::Severity;
use crate::status::Status;

/// Unwinding payload carried by [`raise`].
///
/// Wraps the exact record that was just logged (or a minimal fallback
/// when the thread buffer turned out empty). Recover it with
/// [`catch_raised`].
#[derive(Debug, Error)]
#[error("{record}")]
pub struct Raised {
    record: ErrorRecord,
}

impl Raised {
    /// The record the unwind was raised with.
    #[inline]
    pub fn record(&self) -> &ErrorRecord {
        &self.record
    }

    /// Consume into the record.
    #[inline]
    pub fn into_record(self) -> ErrorRecord {
        self.record
    }

    /// Composed 32-bit code of the record.
    #[inline]
    pub fn code(&self) -> u32 {
        self.record.code
    }

    /// Severity of the record.
    #[inline]
    pub fn severity(&self) -> Severity {
        self.record.severity
    }

    /// Rendered, localized message of the record.
    #[inline]
    pub fn message(&self) -> &str {
        &self.record.message
    }
}

/// The single gate both front ends agree on: unwinding happens only
/// under `Policy::Throw` and only for `Error` or worse.
#[inline]
pub(crate) fn should_unwind(policy: Policy, severity: Severity) -> bool {
    policy == Policy::Throw && severity >= Severity::Error
}

/// Log a domain value and, when policy and severity demand it, unwind.
///
/// Always dispatches through the pipeline first (so the record is
/// logged, subject to `min_severity`). Then, iff the active policy is
/// [`Policy::Throw`] and the value's default severity is at least
/// `Error`, the calling thread's buffer is drained, the most recent
/// entry becomes the [`Raised`] payload, and the stack unwinds. An
/// unexpectedly empty buffer (external flush, record filtered out by
/// `min_severity`) falls back to a minimal record — once the gate is
/// satisfied the unwind is never skipped.
///
/// Under [`Policy::Status`], or for severities below `Error`, this logs
/// and returns normally; pair it with [`raise_status`] for a value
/// channel.
pub fn raise<E: ErrorDomain>(e: E, kv: KvPairs<'_>) {
    dispatch::report(e, kv);

    let cfg = Config::get();
    let severity = e.default_severity();
    if !should_unwind(cfg.policy, severity) {
        return;
    }

    let record = ErrorManager::flush().pop().unwrap_or_else(|| {
        ErrorRecord::new(code(e), severity, "raised error; logged record unavailable")
    });
    panic::panic_any(Raised { record });
}

/// Log a domain value and return the outcome as a [`Status`].
///
/// Severities below `Error` log (subject to `min_severity`) and return
/// success; `Error` and above log and return a failure carrying the
/// rendered record. Never unwinds, regardless of policy.
pub fn raise_status<E: ErrorDomain>(e: E, kv: KvPairs<'_>) -> Status {
    let cfg = Config::get();
    let severity = e.default_severity();
    if severity < Severity::Error {
        dispatch::report(e, kv);
        return Status::ok();
    }

    // Build once, share between the log and the returned failure.
    let record = dispatch::build_record(e, severity, cfg.language, kv);
    if severity >= cfg.min_severity {
        ErrorManager::log(record.clone());
    }
    Status::from_record(record)
}

/// Raise `CoreErr::AssertFailed` (severity fixed at `Fatal`) when the
/// condition is false.
///
/// Because the severity is `Fatal`, a false condition always unwinds
/// under `Policy::Throw`; under `Policy::Status` it is logged only.
pub fn assert_that(condition: bool, kv: KvPairs<'_>) {
    if !condition {
        raise(CoreErr::AssertFailed, kv);
    }
}

/// Run `f`, converting an unwind started by [`raise`] back into a value.
///
/// Panics that do not carry a [`Raised`] payload are foreign and resume
/// unwinding untouched.
pub fn catch_raised<T>(f: impl FnOnce() -> T + UnwindSafe) -> Result<T, Raised> {
    match panic::catch_unwind(f) {
        Ok(v) => Ok(v),
        Err(payload) => match payload.downcast::<Raised>() {
            Ok(raised) => Err(*raised),
            Err(other) => panic::resume_unwind(other),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Policy- and config-dependent behavior is covered by the serialized
    // integration tests; these stick to the pure parts.

    #[test]
    fn gate_requires_both_policy_and_severity() {
        assert!(should_unwind(Policy::Throw, Severity::Error));
        assert!(should_unwind(Policy::Throw, Severity::Fatal));
        assert!(!should_unwind(Policy::Throw, Severity::Warning));
        assert!(!should_unwind(Policy::Status, Severity::Fatal));
    }

    #[test]
    fn raised_exposes_the_record() {
        let raised = Raised {
            record: ErrorRecord::new(0x0001_0004, Severity::Fatal, "Assertion failed."),
        };
        assert_eq!(raised.code(), 0x0001_0004);
        assert_eq!(raised.severity(), Severity::Fatal);
        assert_eq!(raised.message(), "Assertion failed.");
        assert_eq!(format!("{raised}"), "[0x00010004] FATAL Assertion failed.");
    }

    #[test]
    fn raised_is_a_std_error() {
        fn takes_error<E: std::error::Error>(_: &E) {}
        let raised = Raised {
            record: ErrorRecord::new(1, Severity::Error, "e"),
        };
        takes_error(&raised);
    }

    #[test]
    fn catch_raised_passes_values_through() {
        let out = catch_raised(|| 21 * 2);
        assert_eq!(out.ok(), Some(42));
    }
}
