// This file is part of carray.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::CArray;

impl<T> CArray<T> {
    /// Removes the last element and returns it, or `None` if empty.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            None
        } else {
            self.len -= 1;
            // SAFETY: before decrementing, `buf[self.len]` was the last live
            // slot; it is now outside `[0..len)` and read exactly once.
            Some(unsafe { self.buf.read(self.len) })
        }
    }

    /// Drops the last element. A no-op on an empty array.
    #[inline]
    pub fn pop_back(&mut self) {
        drop(self.pop());
    }
}
