// This file is part of carray.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::CArray;

impl<T> FromIterator<T> for CArray<T> {
    /// Collects through the append path: starts at the default capacity and
    /// grows by 1.5× as needed.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut v = Self::new();
        v.extend(iter);
        v
    }
}
