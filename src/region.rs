//! Read-only byte views evaluated by the predicates.
//!
//! A [`Region`] is an optional borrowed byte slice. `None` stands for a
//! missing value (a null reference); `Some` borrows the caller's memory for
//! the duration of a call and is never written through.

use bytemuck::Pod;
use std::fmt;

/// A read-only view over a contiguous byte span, or no span at all.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Region<'a> {
    bytes: Option<&'a [u8]>,
}

impl<'a> Region<'a> {
    /// The absent region.
    pub const NULL: Self = Self { bytes: None };

    /// Create a region from an optional byte slice.
    #[inline]
    pub const fn new(bytes: Option<&'a [u8]>) -> Self {
        Self { bytes }
    }

    /// Create a present region over `bytes`.
    #[inline]
    pub const fn from_bytes(bytes: &'a [u8]) -> Self {
        Self { bytes: Some(bytes) }
    }

    /// View a single plain value as its native-endian backing bytes.
    ///
    /// A 4-byte `i32` yields a 4-byte region; the element type is not
    /// remembered, only the raw bytes.
    #[inline]
    pub fn of<T: Pod>(value: &'a T) -> Self {
        Self::from_bytes(bytemuck::bytes_of(value))
    }

    /// View a slice of plain values as one contiguous byte span.
    #[inline]
    pub fn of_slice<T: Pod>(values: &'a [T]) -> Self {
        Self::from_bytes(bytemuck::cast_slice(values))
    }

    /// Returns true if no span was supplied.
    #[inline]
    pub const fn is_null(&self) -> bool {
        self.bytes.is_none()
    }

    /// The underlying bytes, if present.
    #[inline]
    pub const fn bytes(&self) -> Option<&'a [u8]> {
        self.bytes
    }

    /// Number of bytes in the view; 0 when absent.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.map_or(0, <[u8]>::len)
    }

    /// Returns true if the view is absent or has no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The first byte of the view, if there is one.
    #[inline]
    pub fn first_byte(&self) -> Option<u8> {
        self.bytes.and_then(|b| b.first().copied())
    }

    /// The first `min(n, len)` bytes, or `None` when absent.
    ///
    /// Bytes beyond the view are never reachable, so an oversized `n`
    /// shrinks to the view's length.
    #[inline]
    pub fn prefix(&self, n: usize) -> Option<&'a [u8]> {
        self.bytes.map(|b| &b[..n.min(b.len())])
    }
}

impl fmt::Debug for Region<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.bytes {
            None => f.write_str("Region(NULL)"),
            Some(b) => write!(f, "Region({} bytes: {:02x?})", b.len(), b),
        }
    }
}

impl<'a> From<&'a [u8]> for Region<'a> {
    fn from(bytes: &'a [u8]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Region<'a> {
    fn from(bytes: &'a [u8; N]) -> Self {
        Self::from_bytes(bytes)
    }
}

impl<'a> From<&'a Vec<u8>> for Region<'a> {
    fn from(bytes: &'a Vec<u8>) -> Self {
        Self::from_bytes(bytes)
    }
}

impl<'a> From<Option<&'a [u8]>> for Region<'a> {
    fn from(bytes: Option<&'a [u8]>) -> Self {
        Self::new(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_region() {
        let r = Region::NULL;
        assert!(r.is_null());
        assert!(r.is_empty());
        assert_eq!(r.len(), 0);
        assert_eq!(r.first_byte(), None);
        assert_eq!(r.prefix(10), None);
        assert_eq!(Region::default(), Region::NULL);
    }

    #[test]
    fn test_present_but_empty() {
        let r = Region::from_bytes(&[]);
        assert!(!r.is_null());
        assert!(r.is_empty());
        assert_eq!(r.first_byte(), None);
        assert_eq!(r.prefix(3), Some(&[][..]));
    }

    #[test]
    #[allow(clippy::approx_constant)]
    fn test_typed_views() {
        let value: i32 = 1;
        let r = Region::of(&value);
        assert_eq!(r.len(), 4);
        assert_eq!(r.bytes(), Some(&1i32.to_ne_bytes()[..]));

        let f = 3.14f32;
        assert_eq!(Region::of(&f).bytes(), Some(&3.14f32.to_ne_bytes()[..]));

        let arr = [0i32, 0, 1, 0, 0];
        let r = Region::of_slice(&arr);
        assert_eq!(r.len(), 20);
        assert_eq!(r.bytes().unwrap().iter().filter(|&&b| b != 0).count(), 1);
    }

    #[test]
    fn test_prefix_clamps() {
        let data = [1u8, 2, 3];
        let r = Region::from(&data);
        assert_eq!(r.prefix(2), Some(&[1u8, 2][..]));
        assert_eq!(r.prefix(100), Some(&[1u8, 2, 3][..]));
        assert_eq!(r.prefix(0), Some(&[][..]));
    }

    #[test]
    fn test_conversions() {
        let v = vec![9u8, 8];
        assert_eq!(Region::from(&v).first_byte(), Some(9));
        assert_eq!(Region::from(&v[..]).len(), 2);
        assert!(Region::from(None::<&[u8]>).is_null());
        assert_eq!(Region::from(Some(&v[..1])).len(), 1);
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", Region::NULL), "Region(NULL)");
        assert_eq!(
            format!("{:?}", Region::from(&[0u8, 0xff])),
            "Region(2 bytes: [00, ff])"
        );
    }
}
