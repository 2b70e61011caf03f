// This file is part of carray.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Raw slot storage backing [`CArray`](crate::CArray).
//!
//! `RawBuf<T>` owns an allocation of `capacity` slots and knows nothing about
//! which of them hold live values. Constructing, moving out of, and
//! destroying a slot are separate unsafe operations; the owner tracks
//! liveness. Dropping a `RawBuf` releases the allocation only and never runs
//! element destructors.

// Alloc imports
use alloc::alloc::{alloc, dealloc, handle_alloc_error, Layout};

// Core imports
use core::{
    marker::PhantomData,
    mem,
    ptr::{self, NonNull},
};

pub(crate) struct RawBuf<T> {
    ptr: NonNull<T>,
    cap: usize,
    _marker: PhantomData<T>,
}

// SAFETY: `RawBuf<T>` uniquely owns its allocation, like `Box<[T]>`.
unsafe impl<T: Send> Send for RawBuf<T> {}
// SAFETY: shared access only hands out `&T`-level access to the slots.
unsafe impl<T: Sync> Sync for RawBuf<T> {}

#[cold]
#[inline(never)]
pub(crate) fn capacity_overflow() -> ! {
    panic!("capacity overflow");
}

impl<T> RawBuf<T> {
    /// A buffer with no allocation and zero capacity.
    pub(crate) const fn dangling() -> Self {
        Self {
            ptr: NonNull::dangling(),
            cap: 0,
            _marker: PhantomData,
        }
    }

    /// Allocates `cap` uninitialized slots.
    ///
    /// Zero-sized requests (either `cap == 0` or a zero-sized `T`) do not
    /// touch the allocator.
    pub(crate) fn with_capacity(cap: usize) -> Self {
        let layout = Self::layout(cap);
        if layout.size() == 0 {
            return Self {
                ptr: NonNull::dangling(),
                cap,
                _marker: PhantomData,
            };
        }

        // SAFETY: `layout` has a non-zero size.
        let raw = unsafe { alloc(layout) };
        let Some(ptr) = NonNull::new(raw.cast::<T>()) else {
            handle_alloc_error(layout)
        };

        Self {
            ptr,
            cap,
            _marker: PhantomData,
        }
    }

    fn layout(cap: usize) -> Layout {
        match Layout::array::<T>(cap) {
            Ok(layout) => layout,
            Err(_) => capacity_overflow(),
        }
    }

    #[inline]
    pub(crate) const fn capacity(&self) -> usize {
        self.cap
    }

    #[inline]
    pub(crate) const fn as_ptr(&self) -> *mut T {
        self.ptr.as_ptr()
    }

    /// Constructs `value` in slot `i`.
    ///
    /// # Safety
    ///
    /// `i < capacity` and slot `i` must not hold a live value (it would be
    /// overwritten without being dropped).
    #[inline]
    pub(crate) unsafe fn write(&mut self, i: usize, value: T) {
        debug_assert!(i < self.cap);
        // SAFETY: in bounds per the caller's contract.
        unsafe { ptr::write(self.as_ptr().add(i), value) }
    }

    /// Moves the value out of slot `i`, leaving the slot uninitialized.
    ///
    /// # Safety
    ///
    /// Slot `i` must hold a live value, and the caller must stop treating
    /// it as live.
    #[inline]
    pub(crate) unsafe fn read(&self, i: usize) -> T {
        debug_assert!(i < self.cap);
        // SAFETY: slot `i` is live per the caller's contract.
        unsafe { ptr::read(self.as_ptr().add(i)) }
    }

    /// Runs the destructors of the values in slots `[start..start + count)`.
    ///
    /// # Safety
    ///
    /// Every slot in the range must hold a live value, and none of them may
    /// be used as live afterwards.
    #[inline]
    pub(crate) unsafe fn drop_range(&mut self, start: usize, count: usize) {
        debug_assert!(start + count <= self.cap);
        // SAFETY: the range is live per the caller's contract.
        unsafe {
            let live = ptr::slice_from_raw_parts_mut(self.as_ptr().add(start), count);
            ptr::drop_in_place(live);
        }
    }

    /// Moves `count` values from slots `[from..)` to `[to..)` within this
    /// buffer. The ranges may overlap.
    ///
    /// # Safety
    ///
    /// Both ranges must lie within the capacity, the source slots must be
    /// live, and afterwards only the destination slots count as live.
    #[inline]
    pub(crate) unsafe fn shift(&mut self, from: usize, to: usize, count: usize) {
        debug_assert!(from + count <= self.cap && to + count <= self.cap);
        // SAFETY: bounds and liveness per the caller's contract.
        unsafe {
            let base = self.as_ptr();
            ptr::copy(base.add(from), base.add(to), count);
        }
    }

    /// Moves `count` values from `src[from..]` into `self[to..]`.
    ///
    /// # Safety
    ///
    /// `src[from..from + count]` must be live and is no longer live
    /// afterwards; `self[to..to + count]` must be in bounds and not live.
    #[inline]
    pub(crate) unsafe fn move_from(&mut self, to: usize, src: &RawBuf<T>, from: usize, count: usize) {
        debug_assert!(to + count <= self.cap && from + count <= src.cap);
        // SAFETY: distinct allocations never overlap; bounds per the caller.
        unsafe {
            ptr::copy_nonoverlapping(src.as_ptr().add(from), self.as_ptr().add(to), count);
        }
    }
}

impl<T> Drop for RawBuf<T> {
    fn drop(&mut self) {
        if self.cap == 0 || mem::size_of::<T>() == 0 {
            return;
        }
        // SAFETY: a non-zero-sized buffer was obtained from `alloc` with
        // exactly this layout in `with_capacity`.
        unsafe { dealloc(self.ptr.as_ptr().cast::<u8>(), Self::layout(self.cap)) }
    }
}
