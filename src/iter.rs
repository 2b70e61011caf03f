// This file is part of carray.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`CArray`](crate::CArray).
//!
//! - `IntoIter<T>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`. Elements it has not yielded are
//!   dropped together with the iterator.
//! - `&CArray` and `&mut CArray` iterate as slices; `.rev()` gives reverse
//!   traversal in both cases.

mod from_iterator;

// Crate imports
use crate::{raw::RawBuf, vec::CArray};

// Core imports
use core::{fmt, iter::FusedIterator, mem};

/// Owned iterator returned by `CArray::into_iter()`.
///
/// Takes over the array's buffer; slots `[front..back)` are the elements not
/// yet yielded.
pub struct IntoIter<T> {
    buf: RawBuf<T>,
    front: usize,
    back: usize, // exclusive
}

impl<T> IntoIter<T> {
    /// Returns the elements not yet yielded, as a slice.
    pub fn as_slice(&self) -> &[T] {
        // SAFETY: `[front..back)` is exactly the set of live slots.
        unsafe {
            core::slice::from_raw_parts(self.buf.as_ptr().add(self.front), self.back - self.front)
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        if self.front < self.back {
            let i = self.front;
            self.front += 1;
            // SAFETY: `i` was live and is now outside `[front..back)`.
            Some(unsafe { self.buf.read(i) })
        } else {
            None
        }
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rem = self.back - self.front;
        (rem, Some(rem))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.front < self.back {
            self.back -= 1;
            // SAFETY: `back` was live and is now outside `[front..back)`.
            Some(unsafe { self.buf.read(self.back) })
        } else {
            None
        }
    }
}
impl<T> FusedIterator for IntoIter<T> {}
impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> Drop for IntoIter<T> {
    fn drop(&mut self) {
        let (front, rem) = (self.front, self.back - self.front);
        self.front = self.back;
        // SAFETY: `[front..front + rem)` were the remaining live slots.
        unsafe { self.buf.drop_range(front, rem) }
    }
}

impl<T: fmt::Debug> fmt::Debug for IntoIter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("IntoIter").field(&self.as_slice()).finish()
    }
}

impl<'a, T> IntoIterator for &'a CArray<T> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T> IntoIterator for &'a mut CArray<T> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T> IntoIterator for CArray<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;
    fn into_iter(mut self) -> Self::IntoIter {
        let back = mem::replace(&mut self.len, 0);
        // `self` is left unallocated and empty, so its own drop is a no-op.
        let buf = mem::replace(&mut self.buf, RawBuf::dangling());
        IntoIter {
            buf,
            front: 0,
            back,
        }
    }
}
