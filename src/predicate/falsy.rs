//! Predicates deciding whether a region is "false".

use super::Dispatch;
use crate::region::Region;

/// Returns true iff the region is absent or its first byte is zero.
///
/// A present view with no bytes has nothing to probe and counts as false.
#[inline]
pub fn scalar_is_false<'a>(value: impl Into<Region<'a>>) -> bool {
    let region: Region<'a> = value.into();
    region.first_byte().is_none_or(|b| b == 0)
}

/// Returns true iff the region is absent, `n == 0`, or every one of its
/// first `n` bytes is zero.
#[inline]
pub fn array_is_false<'a>(value: impl Into<Region<'a>>, n: usize) -> bool {
    let region: Region<'a> = value.into();
    match region.prefix(n) {
        Some(bytes) => bytes.iter().all(|&b| b == 0),
        None => true,
    }
}

/// Decide falsity from a declared size.
///
/// Absent or zero-size regions are false; a size of one byte probes the
/// first byte; any other size scans that many bytes.
#[inline]
pub fn is_false<'a>(value: impl Into<Region<'a>>, size: usize) -> bool {
    let region: Region<'a> = value.into();
    match Dispatch::of(region, size) {
        Dispatch::Empty => true,
        Dispatch::Scalar => scalar_is_false(region),
        Dispatch::Array(n) => array_is_false(region, n),
    }
}
