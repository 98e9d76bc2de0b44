//! # fvgrid-error — error reporting and diagnostics core
//!
//! The cross-cutting error infrastructure of the FVGrid workspace:
//! independent subsystems register their own error families, one global
//! copy-on-write configuration drives language, filtering, and reaction
//! policy, and the same dispatch pipeline feeds both an unwinding and a
//! value-based propagation channel.
//!
//! ## Design
//!
//! - **Domains, not hierarchies.** An error family is any `Copy` type
//!   implementing [`ErrorDomain`]: a 16-bit domain id, a name, and a
//!   static metadata table (key, default severity, one message template
//!   per [`Language`]). The contract is checked where it is used — a
//!   non-conforming type fails to compile, no registry exists at runtime.
//! - **One 32-bit code.** [`make_code`] packs `(domain_id << 16) | value`;
//!   unique domain ids make collisions impossible.
//! - **Snapshot configuration.** [`Config::get`] returns an immutable,
//!   reference-counted [`ErrorConfig`]; [`Config::set`] swaps the current
//!   pointer atomically. Readers never lock and never see torn state.
//! - **Thread-isolated logging.** The default [`ThreadLocalBufferLogger`]
//!   keeps one buffer per thread (drop-newest at capacity); a flush
//!   returns exactly what the calling thread logged, nothing else. Any
//!   [`ErrorLogger`] can be injected instead.
//! - **Two front ends, one gate.** [`raise`] unwinds (panic carrying a
//!   [`Raised`] record) when `policy == Throw` and severity >= `Error`;
//!   [`raise_status`] reports the same condition as a [`Status`] /
//!   [`StatusOr`] without ever unwinding.
//!
//! ## Quick start
//!
//! ```
//! use fvgrid_error::{
//!     code, report, DomainInfo, ErrorDomain, ErrorManager, Severity,
//! };
//!
//! // Registering a new error family is implementing one trait.
//! #[derive(Copy, Clone)]
//! #[repr(u16)]
//! enum IoErr {
//!     SocketClosed = 1,
//! }
//!
//! impl ErrorDomain for IoErr {
//!     const DOMAIN_ID: u16 = 0x0100;
//!     const DOMAIN_NAME: &'static str = "Io";
//!
//!     fn value(self) -> u16 {
//!         self as u16
//!     }
//!
//!     fn lookup(value: u16) -> DomainInfo {
//!         match value {
//!             1 => DomainInfo::new(
//!                 "IO_SOCKET_CLOSED",
//!                 Severity::Error,
//!                 "Socket {fd} closed by peer.",
//!                 "Socket {fd} fechado pelo par.",
//!             ),
//!             _ => DomainInfo::MISSING,
//!         }
//!     }
//! }
//!
//! report(IoErr::SocketClosed, &[("fd", 7.to_string())]);
//!
//! let records = ErrorManager::flush();
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].code, code(IoErr::SocketClosed));
//! assert_eq!(records[0].message, "Socket 7 closed by peer.");
//! ```
//!
//! ## Concurrency
//!
//! Every operation is synchronous. The only shared mutable state is the
//! configuration's current-snapshot pointer; per-thread buffers are never
//! touched by other threads, by design rather than by luck — flushing
//! thread A's records from thread B is unsupported.

mod config;
mod dispatch;
mod domain;
mod language;
mod logger;
mod manager;
mod record;
mod severity;
mod status;

mod raise;
#[macro_use]
mod macros;

pub mod codes;

// ── Public API ────────────────────────────────────────────────────

pub use config::{Config, ErrorConfig, Policy};
pub use dispatch::{report, KvPairs};
pub use domain::{code, make_code, DomainInfo, ErrorDomain};
pub use language::Language;
pub use logger::{ErrorLogger, StderrLogger, ThreadLocalBufferLogger};
pub use manager::ErrorManager;
pub use raise::{assert_that, catch_raised, raise, raise_status, Raised};
pub use record::ErrorRecord;
pub use severity::Severity;
pub use status::{Status, StatusOr};
