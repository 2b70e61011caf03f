// This file is part of carray.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate import
use crate::vec::CArray;

impl<T, const N: usize> From<[T; N]> for CArray<T> {
    /// Builds an array of exactly `N` elements and capacity `N`.
    fn from(src: [T; N]) -> Self {
        let mut v = Self::with_capacity(N);
        for item in src {
            v.push(item);
        }
        v
    }
}

impl<T: Clone> From<&[T]> for CArray<T> {
    /// Clones `src` into an array with capacity `src.len()`.
    fn from(src: &[T]) -> Self {
        let mut v = Self::with_capacity(src.len());
        v.extend_from_slice(src);
        v
    }
}
