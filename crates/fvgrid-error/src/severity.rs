//! Severity levels for logs and errors.
//!
//! The numeric order is load-bearing: filtering (`sev >= min_severity`)
//! and throw-eligibility (`sev >= Severity::Error`) both compare by it.

use core::fmt;

/// Severity of a single log/error event.
///
/// Lower values are more verbose, higher values are more severe. The
/// derived `Ord` follows the discriminants, so `Trace < Debug < Info <
/// Warning < Error < Fatal` holds pairwise and transitively.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Severity {
    /// Fine-grained flow tracing and temporary values.
    Trace = 0,
    /// Diagnostics useful during development.
    Debug = 1,
    /// General informational events.
    Info = 2,
    /// Abnormal conditions that do not stop execution.
    Warning = 3,
    /// Failures that prevent an operation from completing.
    Error = 4,
    /// Critical failures that leave the application unstable.
    Fatal = 5,
}

impl Severity {
    /// Short uppercase label, as rendered in log lines.
    pub const fn label(self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warning => "WARN",
            Severity::Error => "ERROR",
            Severity::Fatal => "FATAL",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_total() {
        let levels = [
            Severity::Trace,
            Severity::Debug,
            Severity::Info,
            Severity::Warning,
            Severity::Error,
            Severity::Fatal,
        ];
        for pair in levels.windows(2) {
            assert!(pair[0] < pair[1], "{} should sort below {}", pair[0], pair[1]);
        }
        // Transitivity spot check across the whole range.
        assert!(Severity::Trace < Severity::Fatal);
    }

    #[test]
    fn numeric_values_match_contract() {
        assert_eq!(Severity::Trace as u8, 0);
        assert_eq!(Severity::Warning as u8, 3);
        assert_eq!(Severity::Fatal as u8, 5);
    }

    #[test]
    fn filter_comparison_reads_naturally() {
        let min = Severity::Warning;
        assert!(Severity::Error >= min);
        assert!(Severity::Info < min);
    }

    #[test]
    fn display_labels() {
        assert_eq!(format!("{}", Severity::Warning), "WARN");
        assert_eq!(format!("{}", Severity::Fatal), "FATAL");
    }
}
