// This file is part of carray.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::CArray;

impl<T> CArray<T> {
    /// Appends `value`, growing by the 1.5× rule when full.
    ///
    /// Amortized `O(1)`.
    #[inline]
    pub fn push(&mut self, value: T) {
        self.grow_if_full();
        // SAFETY: `grow_if_full` guarantees `len < capacity`, and slot `len`
        // lies in the uninitialized tail.
        unsafe { self.buf.write(self.len, value) };
        self.len += 1;
    }

    /// Grows first if needed, then constructs the new last element from
    /// `make` directly in its slot. Returns a reference to it.
    ///
    /// If `make` panics the array is left valid (possibly with a larger
    /// capacity) and unchanged in content.
    #[inline]
    pub fn emplace_back<F: FnOnce() -> T>(&mut self, make: F) -> &mut T {
        self.grow_if_full();
        let len = self.len;
        // SAFETY: as in `push`.
        unsafe { self.buf.write(len, make()) };
        self.len = len + 1;
        // SAFETY: slot `len` was just initialized and is inside `[0..self.len)`.
        unsafe { &mut *self.buf.as_ptr().add(len) }
    }

    /// Appends a clone of every element of `src`, in order.
    pub fn extend_from_slice(&mut self, src: &[T])
    where
        T: Clone,
    {
        for item in src {
            self.push(item.clone());
        }
    }
}

impl<T> Extend<T> for CArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<'a, T: Copy + 'a> Extend<&'a T> for CArray<T> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}
