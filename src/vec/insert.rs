// This file is part of carray.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{
    error::Error,
    raw::{capacity_overflow, RawBuf},
    vec::CArray,
};

impl<T> CArray<T> {
    /// Inserts `value` at `index`, shifting `[index..len)` one slot later.
    ///
    /// - `index == len` **and `index == 0`** take the append path (1.5×
    ///   growth when full). Inserting at `0` into a non-empty array therefore
    ///   appends rather than prepends.
    /// - `0 < index < len` on a full array reallocates to exactly
    ///   `capacity + 1` slots, placing the tail one slot later while moving.
    /// - `0 < index < len` with spare capacity shifts the tail in place.
    ///
    /// # Panics
    ///
    /// Panics if `index > len`. See [`try_insert`](CArray::try_insert) for a
    /// non-panicking variant.
    pub fn insert(&mut self, index: usize, value: T) {
        let len = self.len;
        if index > len {
            panic!("insertion index (is {index}) should be <= len (is {len})");
        }
        if index == 0 || index == len {
            self.push(value);
            return;
        }

        if len == self.capacity() {
            let Some(capacity) = self.capacity().checked_add(1) else {
                capacity_overflow()
            };
            let mut fresh = RawBuf::with_capacity(capacity);
            // SAFETY: `[0..len)` is live in the old buffer; the head lands on
            // `[0..index)`, the tail on `[index + 1..len + 1)`, both within
            // `capacity == len + 1`. Slot `index` stays free for `value`.
            unsafe {
                fresh.move_from(0, &self.buf, 0, index);
                fresh.move_from(index + 1, &self.buf, index, len - index);
                fresh.write(index, value);
            }
            self.buf = fresh;
        } else {
            // SAFETY: `len < capacity`, so `[index + 1..len + 1)` is in bounds;
            // after the shift slot `index` no longer holds a live value.
            unsafe {
                self.buf.shift(index, index + 1, len - index);
                self.buf.write(index, value);
            }
        }

        self.len = len + 1;
    }

    /// Fallible variant of [`insert`](CArray::insert).
    ///
    /// Returns [`Error::OutOfBounds`] if `index > len`, dropping `value` and
    /// leaving the array unchanged.
    #[inline]
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), Error> {
        if index > self.len {
            return Err(Error::OutOfBounds);
        }
        self.insert(index, value);
        Ok(())
    }
}
