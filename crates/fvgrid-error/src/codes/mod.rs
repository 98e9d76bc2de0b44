//! Built-in error domains.
//!
//! # Domain id ranges
//!
//! | Id        | Domain | Purpose                                  |
//! |-----------|--------|------------------------------------------|
//! | `0x0001`  | Core   | validation, assertions, geometry checks  |
//! | `0x0002`  | File   | filesystem and export I/O                |
//! | `0x0003`  | Grid   | grid construction and discretization     |
//! | `0x0100+` | —      | free for consumer subsystems             |
//!
//! Each catalog is an ordinary [`ErrorDomain`](crate::ErrorDomain)
//! implementation; consumers define their own the same way, in their own
//! crates, without touching this module.

mod core;
mod file;
mod grid;

pub use self::core::CoreErr;
pub use self::file::FileErr;
pub use self::grid::GridErr;
