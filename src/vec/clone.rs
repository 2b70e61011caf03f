// This file is part of carray.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::CArray;

impl<T: Clone> Clone for CArray<T> {
    /// Allocates a buffer with the **same capacity** as `self` and clones
    /// every live element into it, in order.
    ///
    /// If an element's `clone` panics, the elements cloned so far are dropped
    /// and `self` is untouched.
    fn clone(&self) -> Self {
        let mut out = Self::with_capacity(self.capacity());
        for item in self.iter() {
            // Never grows: `out` has the full source capacity.
            out.push(item.clone());
        }
        out
    }
}
