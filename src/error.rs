// This file is part of carray.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `CArray`.
//!
//! Only bounds conditions are reported as values. Allocation failure is
//! fatal and never surfaces here.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by the checked operations of [`CArray`](crate::CArray).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// An index or position was outside the live range `[0..len)`
    /// (or `[0..=len]` for insertion).
    OutOfBounds,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds => f.write_str("index out of bounds"),
        }
    }
}

impl CoreError for Error {}
