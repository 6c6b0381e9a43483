//! Common test utilities and helpers.
//!
//! Shared fixtures for the integration and property tests.

#![allow(dead_code)]

use proptest::prelude::*;

/// Raw bytes of a slice of `i32`s, as the typed literal cases lay them out.
pub fn i32_bytes(values: &[i32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_ne_bytes()).collect()
}

/// Arbitrary byte buffers, biased towards zero so all-zero spans show up.
pub fn bytes_strategy() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop_oneof![3 => Just(0u8), 1 => any::<u8>()], 0..64)
}

/// Optional buffers: `None` models a missing region.
pub fn maybe_bytes_strategy() -> impl Strategy<Value = Option<Vec<u8>>> {
    prop::option::of(bytes_strategy())
}

/// Declared sizes, including zero, one, and sizes past the buffer end.
pub fn size_strategy() -> impl Strategy<Value = usize> {
    prop_oneof![Just(0usize), Just(1usize), 0usize..96]
}
