// This file is part of carray.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Indexing support for [`CArray`](crate::CArray).
//!
//! `Index` and `IndexMut` accept anything a slice accepts (`usize` and every
//! range form) and are restricted to the live prefix `[0..len)`. An index
//! past `len` panics even when it lies inside the allocated capacity; use
//! [`CArray::at`](crate::CArray::at) for a checked lookup or
//! [`CArray::get_unchecked`](crate::CArray::get_unchecked) to skip the check.

// Crate imports
use crate::vec::CArray;

// Core imports
use core::{
    ops::{Index, IndexMut},
    slice::SliceIndex,
};

impl<T, I: SliceIndex<[T]>> Index<I> for CArray<T> {
    type Output = I::Output;
    #[inline]
    fn index(&self, index: I) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T, I: SliceIndex<[T]>> IndexMut<I> for CArray<T> {
    #[inline]
    fn index_mut(&mut self, index: I) -> &mut Self::Output {
        &mut self.as_mut_slice()[index]
    }
}
