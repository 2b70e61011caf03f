// This file is part of carray.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::CArray;

impl<T> CArray<T> {
    /// Views the live prefix `[0..len)` as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: by invariant `buf[..len]` is initialized and `len <= capacity`.
        // A dangling pointer is valid for the zero-length or zero-sized case.
        unsafe { core::slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    /// Views the live prefix `[0..len)` as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // SAFETY: as in `as_slice`, and `&mut self` guarantees exclusivity.
        unsafe { core::slice::from_raw_parts_mut(self.buf.as_ptr(), self.len) }
    }

    /// Returns a raw pointer to the start of the buffer.
    ///
    /// Only the first `len` slots hold initialized values; reading from
    /// `ptr.add(i)` for `i >= len` is undefined behavior. The pointer is
    /// invalidated by any reallocation (append or insert on a full array,
    /// [`reserve`](CArray::reserve)).
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Returns a mutable raw pointer to the start of the buffer.
    ///
    /// Writing past `len` does **not** update `len`; such writes are not part
    /// of the logical contents and are never dropped.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_ptr()
    }
}
