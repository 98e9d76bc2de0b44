//! Fundamental errors: argument validation, assertions, geometry checks.

use crate::domain::{DomainInfo, ErrorDomain};
use crate::severity::Severity;

/// Errors raised by the core utilities and base types.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum CoreErr {
    /// A parameter failed its preconditions (null, negative, ...).
    InvalidArgument = 1,
    /// Index outside `[0, N-1]`.
    OutOfRange = 2,
    /// Placeholder for functionality still to come.
    NotImplemented = 3,
    /// Internal invariant violated; raised by `assert_that`. Severity is
    /// fixed at `Fatal` and must stay there: assertion failures have to
    /// be able to unwind whenever the policy is `Throw`.
    AssertFailed = 4,
    /// Negative volumes, null face areas, broken topology.
    InconsistentGeometry = 5,
}

impl ErrorDomain for CoreErr {
    const DOMAIN_ID: u16 = 0x0001;
    const DOMAIN_NAME: &'static str = "Core";

    #[inline]
    fn value(self) -> u16 {
        self as u16
    }

    fn lookup(value: u16) -> DomainInfo {
        match value {
            1 => DomainInfo::new(
                "CORE_INVALID_ARGUMENT",
                Severity::Error,
                "Invalid argument: {name}.",
                "Argumento inválido: {name}.",
            ),
            2 => DomainInfo::new(
                "CORE_OUT_OF_RANGE",
                Severity::Error,
                "Index out of range: {index}.",
                "Índice fora do intervalo: {index}.",
            ),
            3 => DomainInfo::new(
                "CORE_NOT_IMPLEMENTED",
                Severity::Warning,
                "Feature not implemented.",
                "Recurso não implementado.",
            ),
            4 => DomainInfo::new(
                "CORE_ASSERT_FAILED",
                Severity::Fatal,
                "Assertion failed.",
                "Falha de asserção.",
            ),
            5 => DomainInfo::new(
                "CORE_INCONSISTENT_GEOMETRY",
                Severity::Error,
                "Geometric inconsistency detected: {details}.",
                "Inconsistência geométrica detectada: {details}.",
            ),
            _ => DomainInfo::MISSING,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{code, make_code};
    use crate::language::Language;

    #[test]
    fn codes_compose_with_the_domain_id() {
        assert_eq!(code(CoreErr::InvalidArgument), make_code(0x0001, 1));
        assert_eq!(code(CoreErr::InconsistentGeometry), 0x0001_0005);
    }

    #[test]
    fn assert_failed_is_fatal() {
        assert_eq!(CoreErr::AssertFailed.default_severity(), Severity::Fatal);
    }

    #[test]
    fn not_implemented_is_only_a_warning() {
        assert_eq!(CoreErr::NotImplemented.default_severity(), Severity::Warning);
    }

    #[test]
    fn both_locales_are_present_for_every_value() {
        for v in [
            CoreErr::InvalidArgument,
            CoreErr::OutOfRange,
            CoreErr::NotImplemented,
            CoreErr::AssertFailed,
            CoreErr::InconsistentGeometry,
        ] {
            assert!(!v.template(Language::EnUs).is_empty(), "{:?} en_us", v);
            assert!(!v.template(Language::PtBr).is_empty(), "{:?} pt_br", v);
            assert!(v.key().starts_with("CORE_"), "{:?} key", v);
        }
    }

    #[test]
    fn undeclared_value_yields_missing_row() {
        assert_eq!(CoreErr::lookup(0), DomainInfo::MISSING);
        assert_eq!(CoreErr::lookup(6), DomainInfo::MISSING);
        assert_eq!(CoreErr::lookup(u16::MAX), DomainInfo::MISSING);
    }
}
