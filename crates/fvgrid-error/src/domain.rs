//! The capability contract every error domain must satisfy, and the
//! 32-bit code packing shared by the whole system.
//!
//! A *domain* is a user-defined family of error values (normally a small
//! `#[repr(u16)]` enum) plus a static metadata table. Conformance is the
//! trait bound itself: a type missing any member of [`ErrorDomain`] fails
//! to compile at the call site — there is no runtime registry.
//!
//! # Code layout
//!
//! ```text
//! ┌────────────────────────┬────────────────────────┐
//! │    domain_id (u16)     │      value (u16)       │
//! │    bits 31..16         │      bits 15..0        │
//! └────────────────────────┴────────────────────────┘
//! ```
//!
//! Distinct domains can never collide as long as their ids are unique;
//! values within a domain must fit 16 bits.

use crate::language::Language;
use crate::severity::Severity;

/// Combine a domain id and an error value into a single 32-bit code.
///
/// The single source of truth for code composition. Total, side-effect
/// free, usable in `const` contexts.
///
/// ```
/// use fvgrid_error::make_code;
/// assert_eq!(make_code(0xAAAA, 0x00FF), 0xAAAA_00FF);
/// ```
#[inline]
pub const fn make_code(domain: u16, value: u16) -> u32 {
    ((domain as u32) << 16) | value as u32
}

/// Composed 32-bit code for a typed domain value.
#[inline]
pub fn code<E: ErrorDomain>(e: E) -> u32 {
    make_code(E::DOMAIN_ID, e.value())
}

/// One row of a domain's static metadata table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct DomainInfo {
    /// Stable machine-readable key, e.g. `"CORE_INVALID_ARGUMENT"`.
    pub key: &'static str,
    /// Default severity the value is dispatched with.
    pub severity: Severity,
    /// American English message template (`{placeholder}` tokens).
    pub en_us: &'static str,
    /// Brazilian Portuguese message template.
    pub pt_br: &'static str,
}

impl DomainInfo {
    /// Row returned for values outside a domain's declared range:
    /// severity `Trace`, every string empty. Lookups never fail harder
    /// than this.
    pub const MISSING: DomainInfo = DomainInfo {
        key: "",
        severity: Severity::Trace,
        en_us: "",
        pt_br: "",
    };

    pub const fn new(
        key: &'static str,
        severity: Severity,
        en_us: &'static str,
        pt_br: &'static str,
    ) -> Self {
        Self { key, severity, en_us, pt_br }
    }

    /// Template for the requested language.
    #[inline]
    pub const fn template(&self, language: Language) -> &'static str {
        match language {
            Language::EnUs => self.en_us,
            Language::PtBr => self.pt_br,
        }
    }
}

/// Capability contract for an error-value domain.
///
/// Implementing this trait is how a subsystem registers a new error
/// family — no shared code changes, no inheritance, no runtime state.
/// Only [`value`](Self::value) and [`lookup`](Self::lookup) need writing;
/// the per-value accessors are derived from the metadata row.
///
/// ```
/// use fvgrid_error::{DomainInfo, ErrorDomain, Severity};
///
/// #[derive(Copy, Clone)]
/// #[repr(u16)]
/// enum SolverErr {
///     Diverged = 1,
/// }
///
/// impl ErrorDomain for SolverErr {
///     const DOMAIN_ID: u16 = 0x0101;
///     const DOMAIN_NAME: &'static str = "Solver";
///
///     fn value(self) -> u16 {
///         self as u16
///     }
///
///     fn lookup(value: u16) -> DomainInfo {
///         match value {
///             1 => DomainInfo::new(
///                 "SOLVER_DIVERGED",
///                 Severity::Error,
///                 "Solver diverged after {iters} iterations.",
///                 "Solver divergiu após {iters} iterações.",
///             ),
///             _ => DomainInfo::MISSING,
///         }
///     }
/// }
///
/// assert_eq!(fvgrid_error::code(SolverErr::Diverged), 0x0101_0001);
/// assert_eq!(SolverErr::Diverged.key(), "SOLVER_DIVERGED");
/// ```
pub trait ErrorDomain: Copy {
    /// Unique, stable 16-bit identifier for the domain.
    const DOMAIN_ID: u16;

    /// Human-readable domain name, e.g. `"Grid"`.
    const DOMAIN_NAME: &'static str;

    /// Numeric value of this error within the domain (low 16 bits of the
    /// composed code).
    fn value(self) -> u16;

    /// Metadata row for a raw value. Must be total: values outside the
    /// declared range return [`DomainInfo::MISSING`], never panic.
    fn lookup(value: u16) -> DomainInfo;

    /// Metadata row for this value.
    #[inline]
    fn info(self) -> DomainInfo {
        Self::lookup(self.value())
    }

    /// Default severity this value is dispatched with.
    #[inline]
    fn default_severity(self) -> Severity {
        self.info().severity
    }

    /// Stable machine-readable key.
    #[inline]
    fn key(self) -> &'static str {
        self.info().key
    }

    /// Message template for the requested language.
    #[inline]
    fn template(self, language: Language) -> &'static str {
        self.info().template(language)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Copy, Clone)]
    #[repr(u16)]
    enum ToyErr {
        Broken = 7,
    }

    impl ErrorDomain for ToyErr {
        const DOMAIN_ID: u16 = 0xAAAA;
        const DOMAIN_NAME: &'static str = "Toy";

        fn value(self) -> u16 {
            self as u16
        }

        fn lookup(value: u16) -> DomainInfo {
            match value {
                7 => DomainInfo::new("TOY_BROKEN", Severity::Error, "Broken: {why}.", "Quebrado: {why}."),
                _ => DomainInfo::MISSING,
            }
        }
    }

    #[test]
    fn make_code_packs_halves() {
        assert_eq!(make_code(0xAAAA, 0x00FF), 0xAAAA_00FF);
        assert_eq!(make_code(0, 0), 0);
        assert_eq!(make_code(0xFFFF, 0xFFFF), 0xFFFF_FFFF);
    }

    #[test]
    fn typed_code_uses_domain_id() {
        assert_eq!(code(ToyErr::Broken), 0xAAAA_0007);
    }

    #[test]
    fn info_accessors_come_from_the_table() {
        assert_eq!(ToyErr::Broken.key(), "TOY_BROKEN");
        assert_eq!(ToyErr::Broken.default_severity(), Severity::Error);
        assert_eq!(ToyErr::Broken.template(Language::EnUs), "Broken: {why}.");
        assert_eq!(ToyErr::Broken.template(Language::PtBr), "Quebrado: {why}.");
    }

    #[test]
    fn out_of_range_lookup_is_safe() {
        let info = ToyErr::lookup(9999);
        assert_eq!(info, DomainInfo::MISSING);
        assert_eq!(info.severity, Severity::Trace);
        assert!(info.key.is_empty());
        assert!(info.en_us.is_empty());
        assert!(info.pt_br.is_empty());
    }
}
