// This file is part of carray.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    raw::{capacity_overflow, RawBuf},
    vec::CArray,
};

/// Next capacity on the append path: `cap + cap / 2`, never below
/// [`CArray::DEFAULT_CAPACITY`].
#[inline]
pub(crate) fn grown_capacity(cap: usize) -> usize {
    let Some(next) = cap.checked_add(cap / 2) else {
        capacity_overflow()
    };
    next.max(CArray::<()>::DEFAULT_CAPACITY)
}

impl<T> CArray<T> {
    /// Reallocates to exactly `capacity` slots if that is more than the
    /// current capacity; otherwise a no-op.
    ///
    /// Live elements are moved to the new buffer in ascending index order.
    ///
    /// # Panics
    ///
    /// Panics if the buffer size would exceed `isize::MAX` bytes.
    pub fn reserve(&mut self, capacity: usize) {
        if capacity > self.capacity() {
            self.reallocate(capacity);
        }
    }

    /// Grows by the 1.5× rule if there is no free slot left.
    #[inline]
    pub(crate) fn grow_if_full(&mut self) {
        if self.len == self.capacity() {
            self.reallocate(grown_capacity(self.capacity()));
        }
    }

    /// Moves every live element into a fresh buffer of `capacity` slots and
    /// releases the old one.
    pub(crate) fn reallocate(&mut self, capacity: usize) {
        debug_assert!(capacity >= self.len);
        // Allocate before touching `self`: a failure leaves the array as is.
        let mut fresh = RawBuf::with_capacity(capacity);
        // SAFETY: `[0..len)` is live in the old buffer and fits in the new
        // one; the old slots are not read again, and dropping the old
        // `RawBuf` only deallocates.
        unsafe { fresh.move_from(0, &self.buf, 0, self.len) };
        self.buf = fresh;
    }
}
