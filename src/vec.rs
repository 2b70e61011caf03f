// This file is part of carray.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `CArray` type and its inherent API.
//!
//! `CArray<T>` is a growable array over a single heap buffer. The buffer is
//! split into a live prefix `[0..len)` and an uninitialized tail
//! `[len..capacity)`; every method keeps that split exact.

mod access;
mod clone;
mod erase;
mod from;
mod insert;
mod new;
mod pop;
mod push;
mod reserve;
mod slice;

// Crate imports
use crate::raw::RawBuf;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
    ptr,
};

/// A growable, heap-allocated contiguous array.
///
/// # Layout and invariants
///
/// Internally, `CArray<T>` maintains:
///
/// - a buffer of `capacity` slots, exclusively owned by this value; and
/// - a logical length `len` with `0 <= len <= capacity`.
///
/// Slots `[0..len)` hold live values. Slots `[len..capacity)` are
/// uninitialized: they are never read, dropped, or assumed to hold a default.
/// Every element is dropped exactly once, whether it leaves through
/// [`erase`](CArray::erase), [`pop_back`](CArray::pop_back),
/// [`clear`](CArray::clear), an owning iterator, or the array's own `Drop`.
///
/// # Growth
///
/// - [`new`](CArray::new) allocates [`DEFAULT_CAPACITY`](CArray::DEFAULT_CAPACITY)
///   slots.
/// - Appending to a full array reallocates to `cap + cap / 2`.
/// - Inserting strictly inside a full array reallocates to `cap + 1`.
/// - [`reserve`](CArray::reserve) reallocates to exactly the requested
///   capacity.
///
/// Reallocation always builds a fresh buffer, moves the live values across in
/// ascending index order, and only then releases the old buffer. Nothing
/// shrinks the buffer: [`clear`](CArray::clear) keeps it.
///
/// # Complexity
///
/// - `push` / `emplace_back`: amortized `O(1)`.
/// - `insert` / `erase`: `O(len - index)` moves, plus an `O(len)`
///   reallocation when `insert` finds the array full.
/// - `pop_back`, `len`, `capacity`, indexing: `O(1)`.
/// - `clear`: `O(len)` destructor calls, no deallocation.
///
/// # Slice access
///
/// `CArray<T>` dereferences to `[T]` over the live prefix, so slice methods
/// (`iter`, `sort`, `contains`, `binary_search`, …) apply directly, and
/// `.iter().rev()` gives reverse traversal.
pub struct CArray<T> {
    pub(crate) buf: RawBuf<T>,
    pub(crate) len: usize,
}

impl<T> CArray<T> {
    /// Capacity allocated by [`CArray::new`], and the floor the append path
    /// grows to from an unallocated array.
    pub const DEFAULT_CAPACITY: usize = 2;

    /// Returns the number of allocated slots, live or not.
    #[inline]
    pub const fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Returns the number of live elements.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Drops every live element in ascending index order and sets `len = 0`.
    ///
    /// Capacity and the buffer are retained.
    pub fn clear(&mut self) {
        let len = self.len;
        // Shrink first: if a destructor panics the array is already empty.
        self.len = 0;
        // SAFETY: `[0..len)` was the live prefix and is no longer counted.
        unsafe { self.buf.drop_range(0, len) }
    }

    /// Moves the contents out into a new array, leaving `self` with no
    /// buffer at all (`len() == 0`, `capacity() == 0`).
    ///
    /// The source stays usable: the next append allocates
    /// [`DEFAULT_CAPACITY`](CArray::DEFAULT_CAPACITY) slots.
    #[inline]
    pub fn take(&mut self) -> Self {
        core::mem::replace(self, Self::unallocated())
    }
}

impl<T> Drop for CArray<T> {
    fn drop(&mut self) {
        // SAFETY: `[0..len)` is live; the buffer itself is released by
        // `RawBuf::drop` right after.
        unsafe { ptr::drop_in_place(self.as_mut_slice() as *mut [T]) }
    }
}

impl<T: fmt::Debug> fmt::Debug for CArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CArray")
            .field("len", &self.len)
            .field("capacity", &self.capacity())
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: PartialEq> PartialEq for CArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}
impl<T: Eq> Eq for CArray<T> {}
impl<T: Ord> Ord for CArray<T> {
    fn cmp(&self, other: &Self) -> core::cmp::Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}
impl<T: PartialOrd> PartialOrd for CArray<T> {
    fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}
impl<T: Hash> Hash for CArray<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> Deref for CArray<T> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T> DerefMut for CArray<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T> AsRef<[T]> for CArray<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> AsMut<[T]> for CArray<T> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T> Borrow<[T]> for CArray<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T> BorrowMut<[T]> for CArray<T> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
