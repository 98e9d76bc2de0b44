//! Value-based error propagation: `Status` and `StatusOr<T>`.
//!
//! The non-unwinding counterpart to [`raise`](crate::raise), for hot
//! paths where a panic is undesirable even under `Policy::Throw`.

use crate::record::ErrorRecord;
use crate::severity::Severity;

/// Result of an operation: success, or failure wrapping one
/// [`ErrorRecord`].
///
/// Default-constructed (`Status::ok()` / `Status::default()`) means
/// success and carries no payload.
#[derive(Clone, Debug, Default)]
pub struct Status {
    record: Option<ErrorRecord>,
}

impl Status {
    /// A success status.
    #[inline]
    pub fn ok() -> Self {
        Self { record: None }
    }

    /// A failure status wrapping the given record.
    #[inline]
    pub fn from_record(record: ErrorRecord) -> Self {
        Self { record: Some(record) }
    }

    /// True when the operation succeeded.
    #[inline]
    pub fn is_ok(&self) -> bool {
        self.record.is_none()
    }

    /// Composed error code; `0` for success.
    #[inline]
    pub fn code(&self) -> u32 {
        self.record.as_ref().map_or(0, |r| r.code)
    }

    /// Rendered error message; empty for success.
    #[inline]
    pub fn message(&self) -> &str {
        self.record.as_ref().map_or("", |r| r.message.as_str())
    }

    /// The failure record, if any.
    #[inline]
    pub fn record(&self) -> Option<&ErrorRecord> {
        self.record.as_ref()
    }

    /// Consume and return the failure record, if any.
    #[inline]
    pub fn into_record(self) -> Option<ErrorRecord> {
        self.record
    }
}

impl From<ErrorRecord> for Status {
    fn from(record: ErrorRecord) -> Self {
        Status::from_record(record)
    }
}

/// Either a `T` or a failure [`Status`].
///
/// Invariant: the value is present exactly when the status is ok.
/// Constructing from a `T` yields success; constructing from a failure
/// `Status` yields failure. Constructing from an *ok* `Status` is a
/// caller error: rather than producing a success with no value, it is
/// turned into a failure carrying a synthesized record (defensive
/// runtime behavior — the misuse cannot be ruled out at compile time
/// without splitting the `Status` type).
#[derive(Clone, Debug)]
pub struct StatusOr<T> {
    value: Option<T>,
    status: Status,
}

impl<T> StatusOr<T> {
    /// Success, holding `value`.
    #[inline]
    pub fn from_value(value: T) -> Self {
        Self { value: Some(value), status: Status::ok() }
    }

    /// True when a value is present.
    #[inline]
    pub fn ok(&self) -> bool {
        self.status.is_ok()
    }

    /// The associated status: ok when a value is present, the failure
    /// otherwise.
    #[inline]
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// The value, or `None` in the failure state — never a
    /// default-constructed `T`.
    #[inline]
    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Consume into the value, or the failure status when no value is
    /// present.
    pub fn into_value(self) -> Result<T, Status> {
        match self.value {
            Some(v) => Ok(v),
            None => Err(self.status),
        }
    }
}

impl<T> From<Status> for StatusOr<T> {
    fn from(status: Status) -> Self {
        // An ok Status carries no record to hold on to; surfacing the
        // misuse as a failure beats inventing an empty value.
        let status = if status.is_ok() {
            Status::from_record(ErrorRecord::new(
                0,
                Severity::Error,
                "StatusOr constructed from an ok Status; no value present",
            ))
        } else {
            status
        };
        Self { value: None, status }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn failure(code: u32, msg: &str) -> Status {
        Status::from_record(ErrorRecord::new(code, Severity::Error, msg))
    }

    #[test]
    fn default_status_is_ok() {
        let s = Status::default();
        assert!(s.is_ok());
        assert_eq!(s.code(), 0);
        assert_eq!(s.message(), "");
        assert!(s.record().is_none());
    }

    #[test]
    fn failure_status_exposes_the_record() {
        let s = failure(0x0003_0001, "Invalid number of volumes N: -5 (must be > 0).");
        assert!(!s.is_ok());
        assert_eq!(s.code(), 0x0003_0001);
        assert_eq!(s.message(), "Invalid number of volumes N: -5 (must be > 0).");
        assert_eq!(s.record().map(|r| r.code), Some(0x0003_0001));
    }

    #[test]
    fn status_or_round_trips_a_value() {
        let v = StatusOr::from_value(42.0_f64);
        assert!(v.ok());
        assert!(v.status().is_ok());
        assert_eq!(v.value(), Some(&42.0));
        assert_eq!(v.into_value().map_err(|_| ()), Ok(42.0));
    }

    #[test]
    fn status_or_from_failure_has_no_value() {
        let v: StatusOr<f64> = failure(0x0003_0007, "degenerate").into();
        assert!(!v.ok());
        assert_eq!(v.value(), None);
        let err = v.into_value().expect_err("no value should be present");
        assert_eq!(err.code(), 0x0003_0007);
    }

    #[test]
    fn status_or_from_ok_status_is_a_defensive_failure() {
        let v: StatusOr<i32> = Status::ok().into();
        assert!(!v.ok());
        assert_eq!(v.value(), None);
        assert!(v.status().message().contains("no value present"));
    }

    #[test]
    fn clone_keeps_both_branches() {
        let good = StatusOr::from_value(String::from("mesh"));
        let bad: StatusOr<String> = failure(7, "x").into();
        assert_eq!(good.clone().into_value().ok(), Some(String::from("mesh")));
        assert!(bad.clone().into_value().is_err());
    }
}
