//! Predicates deciding whether a region is "true".

use super::Dispatch;
use crate::region::Region;

/// Returns true iff the region is present and its first byte is non-zero.
///
/// Only the first byte is probed. A multi-byte value whose only non-zero
/// byte is elsewhere is not true.
#[inline]
pub fn scalar_is_true<'a>(value: impl Into<Region<'a>>) -> bool {
    let region: Region<'a> = value.into();
    region.first_byte().is_some_and(|b| b != 0)
}

/// Returns true iff the region is present, `n > 0`, and at least one of
/// its first `n` bytes is non-zero.
///
/// This is "not all zero", not "all non-zero": `[0, 0, 1]` is true.
#[inline]
pub fn array_is_true<'a>(value: impl Into<Region<'a>>, n: usize) -> bool {
    let region: Region<'a> = value.into();
    match region.prefix(n) {
        Some(bytes) => bytes.iter().any(|&b| b != 0),
        None => false,
    }
}

/// Decide truthiness from a declared size.
///
/// Absent or zero-size regions are not true; a size of one byte probes
/// the first byte; any other size scans that many bytes.
#[inline]
pub fn is_true<'a>(value: impl Into<Region<'a>>, size: usize) -> bool {
    let region: Region<'a> = value.into();
    match Dispatch::of(region, size) {
        Dispatch::Empty => false,
        Dispatch::Scalar => scalar_is_true(region),
        Dispatch::Array(n) => array_is_true(region, n),
    }
}
