// This file is part of carray.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test-only element type that counts its destructions.

// Alloc imports
use alloc::rc::Rc;

// Core imports
use core::cell::Cell;

/// Shared drop counter handed to every [`Tracked`] value of one test.
#[derive(Clone, Default)]
pub(crate) struct Drops(Rc<Cell<usize>>);

impl Drops {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn count(&self) -> usize {
        self.0.get()
    }

    pub(crate) fn make(&self, id: u32) -> Tracked {
        Tracked {
            id,
            drops: self.clone(),
        }
    }
}

/// An element that bumps its [`Drops`] counter exactly when it is dropped.
#[derive(Debug)]
pub(crate) struct Tracked {
    pub(crate) id: u32,
    drops: Drops,
}

impl core::fmt::Debug for Drops {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Drops({})", self.count())
    }
}

impl Drop for Tracked {
    fn drop(&mut self) {
        let c = &self.drops.0;
        c.set(c.get() + 1);
    }
}

/// Collects the ids of a run of tracked values.
pub(crate) fn ids<'a>(it: impl IntoIterator<Item = &'a Tracked>) -> alloc::vec::Vec<u32> {
    it.into_iter().map(|t| t.id).collect()
}
