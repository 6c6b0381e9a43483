//! Byte-level truthiness predicates.
//!
//! Two mirror-image families decide whether a [`Region`] is "true" or
//! "false". Each family has three entry points:
//!
//! - a scalar probe that looks only at the first byte,
//! - an array scan that looks at every byte of a span,
//! - a dispatcher that picks between them from a declared size.
//!
//! Absent regions and zero sizes are always "false". Every function is
//! total: there is no input for which a predicate fails or panics.
//!
//! # Example
//!
//! ```
//! use truthiness::{is_false, is_true, Region};
//!
//! let flags = [0i32, 0, 1, 0, 0];
//! assert!(is_true(Region::of_slice(&flags), 20));
//! assert!(is_false(Region::NULL, 0));
//! assert!(is_false(&[0u8, 0, 0], 3));
//! ```

pub mod falsy;
pub mod truthy;

use crate::region::Region;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

// Re-export main functionality
pub use self::falsy::{array_is_false, is_false, scalar_is_false};
pub use self::truthy::{array_is_true, is_true, scalar_is_true};

/// How a dispatcher interprets a region for a declared size.
///
/// The branch is purely on width: a declared size of one byte is a
/// scalar, anything wider is an array scanned byte by byte. The caller's
/// element type is never inferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dispatch {
    /// Absent region or zero size.
    Empty,
    /// One-byte width; probe the first byte.
    Scalar,
    /// Any other width; scan this many bytes.
    Array(usize),
}

impl Dispatch {
    /// Width of a value treated as a scalar.
    pub const SCALAR_WIDTH: usize = std::mem::size_of::<u8>();

    /// Choose the interpretation for `region` at `size`.
    #[inline]
    pub fn of(region: Region<'_>, size: usize) -> Self {
        if region.is_null() || size == 0 {
            Dispatch::Empty
        } else if size == Self::SCALAR_WIDTH {
            Dispatch::Scalar
        } else {
            Dispatch::Array(size)
        }
    }
}

/// The two-valued outcome of a truthiness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Truthiness {
    /// Some inspected byte is non-zero
    True,
    /// Absent, empty, or every inspected byte is zero
    False,
}

impl Truthiness {
    /// Returns true for [`Truthiness::True`].
    #[inline]
    pub const fn is_true(self) -> bool {
        matches!(self, Truthiness::True)
    }

    /// Returns true for [`Truthiness::False`].
    #[inline]
    pub const fn is_false(self) -> bool {
        matches!(self, Truthiness::False)
    }
}

impl From<bool> for Truthiness {
    fn from(value: bool) -> Self {
        if value {
            Truthiness::True
        } else {
            Truthiness::False
        }
    }
}

impl From<Truthiness> for bool {
    fn from(value: Truthiness) -> Self {
        value.is_true()
    }
}

impl fmt::Display for Truthiness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Truthiness::True => write!(f, "true"),
            Truthiness::False => write!(f, "false"),
        }
    }
}

/// Classify a region at a declared size.
///
/// Agrees with [`is_true`] and [`is_false`]: the result is `True` exactly
/// when `is_true` holds.
pub fn classify<'a>(region: impl Into<Region<'a>>, size: usize) -> Truthiness {
    let region: Region<'a> = region.into();
    let verdict = Truthiness::from(is_true(region, size));
    trace!(len = region.len(), size, %verdict, "classified region");
    verdict
}
