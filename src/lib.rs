// This file is part of carray.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `carray`
//!
//! A `no_std` + `alloc`, growable, heap-allocated contiguous array with
//! explicit storage and element lifecycle management.
//!
//! The core type, [`CArray<T>`], owns a single buffer of `capacity` slots,
//! of which the prefix `[0..len)` holds live values and the remainder is
//! uninitialized memory. Allocating a slot and constructing a value in it are
//! separate steps, so the container never default-constructs unused slots.
//!
//! ## Growth policy
//!
//! Two growth rules are applied, and both are observable through
//! [`CArray::capacity`]:
//!
//! - **Append path** ([`CArray::push`], [`CArray::emplace_back`], [`Extend`]):
//!   when full, capacity becomes `cap + cap / 2` (1.5×, truncating). A fresh
//!   container starts at [`CArray::DEFAULT_CAPACITY`] (`2`).
//! - **Mid-sequence insert** ([`CArray::insert`] with `0 < index < len`):
//!   when full, capacity grows by exactly one slot.
//!
//! [`CArray::reserve`] reallocates to exactly the requested capacity and
//! never rounds up.
//!
//! ## Checked vs. unchecked access
//!
//! - [`CArray::at`] / [`CArray::at_mut`] return [`Error::OutOfBounds`] when
//!   `index >= len`.
//! - `v[i]`, [`CArray::front`] and [`CArray::back`] treat a bad index as a
//!   caller bug and **panic**, like slices.
//! - [`CArray::get_unchecked`] skips the check entirely for hot loops; an
//!   out-of-range index is undefined behavior.
//!
//! Range and position arguments to [`CArray::insert`] and [`CArray::erase`]
//! also panic when out of range; [`CArray::try_insert`] and
//! [`CArray::try_erase`] report [`Error::OutOfBounds`] instead and leave the
//! array unchanged.
//!
//! ## Ownership
//!
//! The buffer is owned by exactly one `CArray` at a time. Cloning duplicates
//! both the elements and the capacity. Moving is a plain Rust move;
//! [`CArray::take`] additionally moves the contents out of a `&mut CArray`
//! and leaves the source without any buffer (`len() == 0`,
//! `capacity() == 0`).
//!
//! Allocation failure is fatal: it is routed to
//! [`handle_alloc_error`](alloc::alloc::handle_alloc_error).
//!
//! ## Features
//!
//! - `serde`: `Serialize` / `Deserialize` for `CArray<T>` as a plain sequence.
//! - `demo`: builds the `carray-demo` binary.
//!
//! ## Example
//!
//! ```rust
//! use carray::CArray;
//!
//! let mut v: CArray<i32> = CArray::new();
//! assert_eq!(v.capacity(), 2);
//! v.push(1);
//! v.push(2);
//! v.push(4);
//! assert_eq!(v.capacity(), 3);
//!
//! v.insert(2, 3);
//! assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
//! assert_eq!(v.capacity(), 4);
//!
//! v.erase(1);
//! assert_eq!(v.as_slice(), &[1, 3, 4]);
//! assert!(v.at(3).is_err());
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

// Modules
mod error;
mod index;
mod iter;
mod raw;
#[cfg(feature = "serde")]
mod serde;
#[cfg(test)]
mod test_util;
mod vec;

// Public exports (crate API surface)
pub use error::Error;
pub use iter::IntoIter;
pub use vec::CArray;
