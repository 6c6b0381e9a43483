//! Property-based tests using proptest.
//!
//! These tests check the predicate laws over random buffers and sizes.

mod common;

use common::{bytes_strategy, maybe_bytes_strategy, size_strategy};
use proptest::prelude::*;
use truthiness::{
    array_is_false, array_is_true, classify, is_false, is_true, scalar_is_false, scalar_is_true,
    Region, Truthiness,
};

proptest! {
    /// Absent regions are never true and always false, for any size.
    #[test]
    fn prop_null_is_false(size in any::<usize>()) {
        prop_assert!(!is_true(Region::NULL, size));
        prop_assert!(is_false(Region::NULL, size));
        prop_assert!(!array_is_true(Region::NULL, size));
        prop_assert!(array_is_false(Region::NULL, size));
    }

    /// Zero size is never true and always false, for any region.
    #[test]
    fn prop_zero_size_is_false(bytes in maybe_bytes_strategy()) {
        let region = Region::new(bytes.as_deref());
        prop_assert!(!is_true(region, 0));
        prop_assert!(is_false(region, 0));
    }

    /// Scalars have no third state.
    #[test]
    fn prop_scalar_duality(bytes in maybe_bytes_strategy()) {
        let region = Region::new(bytes.as_deref());
        prop_assert_eq!(scalar_is_true(region), !scalar_is_false(region));
    }

    /// A false array is never true.
    #[test]
    fn prop_array_false_implies_not_true(
        bytes in maybe_bytes_strategy(),
        n in size_strategy()
    ) {
        let region = Region::new(bytes.as_deref());
        if array_is_false(region, n) {
            prop_assert!(!array_is_true(region, n));
        }
    }

    /// The dispatchers never agree on both verdicts.
    #[test]
    fn prop_dispatch_complement(
        bytes in maybe_bytes_strategy(),
        size in size_strategy()
    ) {
        let region = Region::new(bytes.as_deref());
        prop_assert_eq!(is_true(region, size), !is_false(region, size));
        let expected = if is_true(region, size) { Truthiness::True } else { Truthiness::False };
        prop_assert_eq!(classify(region, size), expected);
    }

    /// Width one delegates to the scalar probe, wider sizes to the scan.
    #[test]
    fn prop_dispatch_width_branch(bytes in bytes_strategy(), size in 2usize..96) {
        let region = Region::from(&bytes);
        prop_assert_eq!(is_true(region, 1), scalar_is_true(region));
        prop_assert_eq!(is_false(region, 1), scalar_is_false(region));
        prop_assert_eq!(is_true(region, size), array_is_true(region, size));
        prop_assert_eq!(is_false(region, size), array_is_false(region, size));
    }

    /// The array scan means "some byte in the first n is non-zero".
    #[test]
    fn prop_array_matches_any_nonzero(bytes in bytes_strategy(), n in size_strategy()) {
        let span = &bytes[..n.min(bytes.len())];
        prop_assert_eq!(array_is_true(&bytes, n), span.iter().any(|&b| b != 0));
        prop_assert_eq!(array_is_false(&bytes, n), span.iter().all(|&b| b == 0));
    }

    /// Bytes past the scanned count never influence the result.
    #[test]
    fn prop_trailing_bytes_ignored(
        head in bytes_strategy(),
        tail in bytes_strategy()
    ) {
        let mut joined = head.clone();
        joined.extend_from_slice(&tail);
        let n = head.len();
        prop_assert_eq!(array_is_true(&joined, n), array_is_true(&head, n));
        prop_assert_eq!(array_is_false(&joined, n), array_is_false(&head, n));
    }

    /// Calling twice on the same region gives the same answer.
    #[test]
    fn prop_idempotent(bytes in maybe_bytes_strategy(), size in size_strategy()) {
        let region = Region::new(bytes.as_deref());
        prop_assert_eq!(is_true(region, size), is_true(region, size));
        prop_assert_eq!(is_false(region, size), is_false(region, size));
    }
}
