// This file is part of carray.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::CArray};

impl<T> CArray<T> {
    /// Drops the element at `index` and shifts `[index + 1..len)` one slot
    /// earlier.
    ///
    /// Returns the position of the element that now follows the erased one:
    /// always `index`, which equals the new [`len`](CArray::len) when the last
    /// element was erased. This makes "erase while walking" loops
    /// straightforward:
    ///
    /// ```
    /// # use carray::CArray;
    /// let mut v: CArray<i32> = [1, 2, 3, 4, 5, 6].into();
    /// let mut i = 0;
    /// while i < v.len() {
    ///     if v[i] % 2 == 0 {
    ///         i = v.erase(i);
    ///     } else {
    ///         i += 1;
    ///     }
    /// }
    /// assert_eq!(v.as_slice(), &[1, 3, 5]);
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if `index >= len`. See [`try_erase`](CArray::try_erase).
    pub fn erase(&mut self, index: usize) -> usize {
        let len = self.len;
        if index >= len {
            panic!("removal index (is {index}) should be < len (is {len})");
        }
        if index == len - 1 {
            self.pop_back();
            return self.len;
        }

        // SAFETY: `index < len`, so the slot is live. It is moved out, the
        // tail `[index + 1..len)` is shifted over it, and `len` shrinks so the
        // stale last slot is no longer counted. The removed value is
        // dropped only once the array is consistent again.
        let removed = unsafe {
            let removed = self.buf.read(index);
            self.buf.shift(index + 1, index, len - index - 1);
            removed
        };
        self.len = len - 1;
        drop(removed);

        index
    }

    /// Fallible variant of [`erase`](CArray::erase), returning
    /// [`Error::OutOfBounds`] when `index >= len`.
    #[inline]
    pub fn try_erase(&mut self, index: usize) -> Result<usize, Error> {
        if index >= self.len {
            return Err(Error::OutOfBounds);
        }
        Ok(self.erase(index))
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::test_util::{ids, Drops};
    use crate::CArray;

    #[test]
    fn test_erase_shifts_tail_down() {
        let mut v: CArray<i32> = [1, 2, 3, 4].into();
        assert_eq!(v.erase(1), 1);
        assert_eq!(v.as_slice(), &[1, 3, 4]);
        assert_eq!(v[1], 3);
    }

    #[test]
    fn test_erase_last_returns_end() {
        let mut v: CArray<i32> = [1, 2, 3].into();
        let pos = v.erase(2);
        assert_eq!(pos, v.len());
        assert_eq!(v.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_erase_first_and_only() {
        let mut v: CArray<i32> = [7, 8].into();
        assert_eq!(v.erase(0), 0);
        assert_eq!(v.as_slice(), &[8]);
        assert_eq!(v.erase(0), 0);
        assert!(v.is_empty());
    }

    #[test]
    fn test_erase_keeps_capacity() {
        let mut v: CArray<i32> = [1, 2, 3, 4, 5].into();
        let cap = v.capacity();
        v.erase(2);
        v.erase(0);
        assert_eq!(v.capacity(), cap);
    }

    #[test]
    #[should_panic(expected = "removal index (is 0) should be < len (is 0)")]
    fn test_erase_on_empty_panics() {
        let mut v: CArray<i32> = CArray::new();
        v.erase(0);
    }

    #[test]
    fn test_try_erase_out_of_bounds() {
        let mut v: CArray<i32> = [1, 2].into();
        assert_eq!(v.try_erase(2), Err(crate::Error::OutOfBounds));
        assert_eq!(v.as_slice(), &[1, 2]);
        assert_eq!(v.try_erase(0), Ok(0));
        assert_eq!(v.as_slice(), &[2]);
    }

    #[test]
    fn test_erase_drops_exactly_the_erased_element() {
        let drops = Drops::new();
        let mut v = CArray::new();
        for id in 0..5 {
            v.push(drops.make(id));
        }
        v.erase(1);
        assert_eq!(drops.count(), 1);
        assert_eq!(ids(&v), [0, 2, 3, 4]);
        v.erase(3);
        assert_eq!(drops.count(), 2);
        assert_eq!(ids(&v), [0, 2, 3]);
        drop(v);
        assert_eq!(drops.count(), 5);
    }

    #[test]
    fn test_remove_every_second_by_ascending_erase() {
        let mut v: CArray<i32> = (0..10).collect();
        let half = v.len() / 2;
        for i in 0..half {
            v.erase(i);
        }
        assert_eq!(v.as_slice(), &[1, 3, 5, 7, 9]);
    }
}
