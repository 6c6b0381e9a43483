//! Literal cases exercised by the bundled self-test.

use crate::region::Region;
use bytemuck::Pod;
use serde::{Deserialize, Serialize};
use std::mem::size_of;

/// One literal input and the verdict the "true" family should reach.
///
/// The "false" family is expected to reach the opposite verdict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelfTestCase {
    pub name: String,
    /// Backing bytes; `None` stands for a null reference.
    pub bytes: Option<Vec<u8>>,
    /// Declared size handed to the dispatcher.
    pub size: usize,
    pub expected: bool,
}

impl SelfTestCase {
    /// A case over an absent region.
    pub fn null(name: impl Into<String>, size: usize, expected: bool) -> Self {
        Self {
            name: name.into(),
            bytes: None,
            size,
            expected,
        }
    }

    /// A case over the raw bytes of a single value.
    pub fn value<T: Pod>(name: impl Into<String>, value: &T, size: usize, expected: bool) -> Self {
        Self {
            name: name.into(),
            bytes: Some(bytemuck::bytes_of(value).to_vec()),
            size,
            expected,
        }
    }

    /// A case over the raw bytes of a slice of values.
    pub fn slice<T: Pod>(
        name: impl Into<String>,
        values: &[T],
        size: usize,
        expected: bool,
    ) -> Self {
        Self {
            name: name.into(),
            bytes: Some(bytemuck::cast_slice::<T, u8>(values).to_vec()),
            size,
            expected,
        }
    }

    /// The region this case evaluates.
    pub fn region(&self) -> Region<'_> {
        Region::new(self.bytes.as_deref())
    }
}

/// The built-in case table.
///
/// The two `i32` cases declared with size 1 probe only the first byte, so
/// they are true on little-endian targets and false on big-endian ones.
#[allow(clippy::approx_constant)]
pub fn default_cases() -> Vec<SelfTestCase> {
    let le = cfg!(target_endian = "little");
    vec![
        SelfTestCase::null("Test with NULL pointer", 0, false),
        SelfTestCase::value("Test with integer value 0", &0i32, 1, false),
        SelfTestCase::value("Test with integer value 1", &1i32, 1, le),
        SelfTestCase::value(
            "Test with non-zero float",
            &3.14f32,
            size_of::<f32>(),
            true,
        ),
        SelfTestCase::value(
            "Test with pointer to non-null, non-zero value",
            &5i32,
            1,
            le,
        ),
        SelfTestCase::slice(
            "Test with array of integers, all zero",
            &[0i32, 0, 0, 0, 0],
            size_of::<i32>() * 5,
            false,
        ),
        SelfTestCase::slice(
            "Test with array of integers, some non-zero",
            &[0i32, 0, 1, 0, 0],
            size_of::<i32>() * 5,
            true,
        ),
    ]
}
