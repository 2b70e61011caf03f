// This file is part of carray.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::CArray};

impl<T> CArray<T> {
    /// Returns the element at `index`, or [`Error::OutOfBounds`] if
    /// `index >= len`.
    #[inline]
    pub fn at(&self, index: usize) -> Result<&T, Error> {
        self.as_slice().get(index).ok_or(Error::OutOfBounds)
    }

    /// Mutable counterpart of [`at`](CArray::at).
    #[inline]
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        self.as_mut_slice().get_mut(index).ok_or(Error::OutOfBounds)
    }

    /// Returns the element at `index` without a bounds check.
    ///
    /// # Safety
    ///
    /// `index < len` must hold. Calling this with an out-of-range index is
    /// undefined behavior, even if the result is never used.
    #[inline]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.len);
        // SAFETY: `index < len` per the caller's contract.
        unsafe { &*self.buf.as_ptr().add(index) }
    }

    /// Mutable counterpart of [`get_unchecked`](CArray::get_unchecked).
    ///
    /// # Safety
    ///
    /// `index < len` must hold.
    #[inline]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.len);
        // SAFETY: `index < len` per the caller's contract.
        unsafe { &mut *self.buf.as_ptr().add(index) }
    }

    /// Returns the first element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    #[inline]
    pub fn front(&self) -> &T {
        match self.as_slice().first() {
            Some(x) => x,
            None => empty_access("front"),
        }
    }

    /// Returns the first element mutably.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    #[inline]
    pub fn front_mut(&mut self) -> &mut T {
        match self.as_mut_slice().first_mut() {
            Some(x) => x,
            None => empty_access("front_mut"),
        }
    }

    /// Returns the last element.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    #[inline]
    pub fn back(&self) -> &T {
        match self.as_slice().last() {
            Some(x) => x,
            None => empty_access("back"),
        }
    }

    /// Returns the last element mutably.
    ///
    /// # Panics
    ///
    /// Panics if the array is empty.
    #[inline]
    pub fn back_mut(&mut self) -> &mut T {
        match self.as_mut_slice().last_mut() {
            Some(x) => x,
            None => empty_access("back_mut"),
        }
    }
}

#[cold]
#[inline(never)]
fn empty_access(method: &str) -> ! {
    panic!("{method}() called on an empty CArray");
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::CArray;

    #[test]
    fn test_at_in_and_out_of_range() {
        let mut v: CArray<i32> = [7, 8, 9].into();
        assert_eq!(v.at(0), Ok(&7));
        assert_eq!(v.at(2), Ok(&9));
        assert_eq!(v.at(3), Err(crate::Error::OutOfBounds));
        *v.at_mut(1).unwrap() = 80;
        assert_eq!(v.as_slice(), &[7, 80, 9]);
        assert_eq!(v.at_mut(3), Err(crate::Error::OutOfBounds));
    }

    #[test]
    fn test_at_len_fails_for_every_len() {
        let mut v: CArray<u8> = CArray::new();
        for n in 0..10u8 {
            assert_eq!(v.at(v.len()), Err(crate::Error::OutOfBounds));
            v.push(n);
        }
    }

    #[test]
    fn test_at_ignores_reserved_slots() {
        let mut v: CArray<u8> = CArray::with_capacity(16);
        v.push(1);
        assert!(v.at(1).is_err());
        assert!(v.at(15).is_err());
    }

    #[test]
    fn test_front_and_back() {
        let mut v: CArray<i32> = [1, 2, 3].into();
        assert_eq!(*v.front(), 1);
        assert_eq!(*v.back(), 3);
        *v.front_mut() = 10;
        *v.back_mut() = 30;
        assert_eq!(v.as_slice(), &[10, 2, 30]);

        let single: CArray<i32> = [5].into();
        assert!(core::ptr::eq(single.front(), single.back()));
    }

    #[test]
    #[should_panic(expected = "front() called on an empty CArray")]
    fn test_front_on_empty_panics() {
        let v: CArray<i32> = CArray::new();
        let _ = v.front();
    }

    #[test]
    #[should_panic(expected = "back() called on an empty CArray")]
    fn test_back_on_empty_panics() {
        let v: CArray<i32> = CArray::new();
        let _ = v.back();
    }

    #[test]
    fn test_get_unchecked_matches_checked() {
        let mut v: CArray<i32> = [4, 5, 6].into();
        for i in 0..v.len() {
            // SAFETY: `i < len`.
            let x = unsafe { *v.get_unchecked(i) };
            assert_eq!(Ok(&x), v.at(i));
        }
        // SAFETY: `1 < len`.
        unsafe { *v.get_unchecked_mut(1) = 50 };
        assert_eq!(v.as_slice(), &[4, 50, 6]);
    }
}
