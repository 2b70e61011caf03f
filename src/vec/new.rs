// This file is part of carray.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{raw::RawBuf, vec::CArray};

impl<T> CArray<T> {
    /// Constructs an empty array with [`DEFAULT_CAPACITY`](CArray::DEFAULT_CAPACITY)
    /// allocated slots.
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_CAPACITY)
    }

    /// Constructs an empty array with exactly `capacity` allocated slots.
    ///
    /// `with_capacity(0)` allocates nothing; the first append then allocates
    /// [`DEFAULT_CAPACITY`](CArray::DEFAULT_CAPACITY) slots.
    ///
    /// # Panics
    ///
    /// Panics if the buffer size would exceed `isize::MAX` bytes.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buf: RawBuf::with_capacity(capacity),
            len: 0,
        }
    }

    /// The state left behind by [`take`](CArray::take): no buffer, no elements.
    #[inline]
    pub(crate) const fn unallocated() -> Self {
        Self {
            buf: RawBuf::dangling(),
            len: 0,
        }
    }
}

impl<T> Default for CArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use crate::CArray;

    #[test]
    fn test_with_capacity_is_exact() {
        let v: CArray<u16> = CArray::with_capacity(7);
        assert_eq!(v.capacity(), 7);
        assert!(v.is_empty());
    }

    #[test]
    fn test_zero_capacity_grows_to_default_on_first_push() {
        let mut v: CArray<u16> = CArray::with_capacity(0);
        assert_eq!(v.capacity(), 0);
        v.push(1);
        assert_eq!(v.capacity(), 2);
        v.push(2);
        v.push(3);
        assert_eq!(v.capacity(), 3);
    }

    #[test]
    fn test_capacity_one_still_grows() {
        let mut v: CArray<u16> = CArray::with_capacity(1);
        v.push(1);
        v.push(2);
        assert_eq!(v.capacity(), 2);
        assert_eq!(v.as_slice(), &[1, 2]);
    }
}
