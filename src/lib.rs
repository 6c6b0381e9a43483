//! Byte-level truthiness checks.
//!
//! Decides whether a raw memory region, viewed as a single scalar or as a
//! span of bytes, is "true" (some byte non-zero) or "false" (absent, empty,
//! or all zero). See [`predicate`] for the two predicate families and
//! [`Region`] for the byte view they operate on.

/// Error types
pub mod error;
/// Tracing subscriber setup
pub mod logging;
/// True/false predicate families
pub mod predicate;
/// Read-only byte views
pub mod region;
/// Bundled self-test
pub mod selftest;

pub use error::{Result, TruthinessError};
pub use predicate::{
    array_is_false, array_is_true, classify, is_false, is_true, scalar_is_false, scalar_is_true,
    Dispatch, Truthiness,
};
pub use region::Region;
