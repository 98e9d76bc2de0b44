/// Log a domain value without ever unwinding.
///
/// Key/value sugar over [`report`](crate::report): values are stringified
/// with `to_string`, keys name the `{key}` tokens in the template.
///
/// ```ignore
/// fvg_report!(GridErr::ExecPolicyUnsupported);
/// fvg_report!(CoreErr::OutOfRange, "index" => i);
/// ```
#[macro_export]
macro_rules! fvg_report {
    ($err:expr $(, $key:literal => $value:expr)* $(,)?) => {
        $crate::report($err, &[$( ($key, $value.to_string()) ),*])
    };
}

/// Log a domain value and unwind when policy and severity demand it.
///
/// Sugar over [`raise`](crate::raise); the counterpart of the original
/// `FVG_ERROR` macro.
///
/// ```ignore
/// fvg_error!(GridErr::InvalidN, "N" => n);
/// fvg_error!(GridErr::InvalidDomain, "A" => a, "B" => b);
/// ```
#[macro_export]
macro_rules! fvg_error {
    ($err:expr $(, $key:literal => $value:expr)* $(,)?) => {
        $crate::raise($err, &[$( ($key, $value.to_string()) ),*])
    };
}

/// Raise a `Fatal` assertion failure when the condition is false.
///
/// Sugar over [`assert_that`](crate::assert_that); the counterpart of
/// the original `FVG_ASSERT` macro.
///
/// ```ignore
/// fvg_assert!(faces.len() == n + 1, "n" => n);
/// ```
#[macro_export]
macro_rules! fvg_assert {
    ($cond:expr $(, $key:literal => $value:expr)* $(,)?) => {
        $crate::assert_that($cond, &[$( ($key, $value.to_string()) ),*])
    };
}
