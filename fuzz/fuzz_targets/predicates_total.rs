#![no_main]
use libfuzzer_sys::fuzz_target;
use truthiness::{array_is_false, array_is_true, is_false, is_true, Region};

fuzz_target!(|data: &[u8]| {
    // First two bytes pick the declared size; the rest is the region.
    let (size, body) = match data {
        [hi, lo, rest @ ..] => (usize::from(u16::from_be_bytes([*hi, *lo])), rest),
        _ => (data.len(), data),
    };
    let region = Region::from(body);
    assert_ne!(is_true(region, size), is_false(region, size));
    if array_is_false(region, size) {
        assert!(!array_is_true(region, size));
    }
});
