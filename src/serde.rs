// This file is part of carray.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `serde` support for [`CArray`](crate::CArray).
//!
//! - **Serialize**: as a sequence of the `len` live elements. Capacity is
//!   not part of the serialized form.
//! - **Deserialize**: from any sequence, through the append path. When the
//!   format reports a length up front, that many slots are reserved first
//!   (capped, so a hostile length hint cannot force a huge allocation).

// Crate imports
use crate::vec::CArray;

// Core imports
use core::{fmt, marker::PhantomData};

// External imports - serde
use serde::{de, ser, Deserialize, Deserializer, Serialize, Serializer};

/// Upper bound on slots reserved from a sequence length hint.
const MAX_PREALLOC: usize = 4096;

impl<T: Serialize> Serialize for CArray<T> {
    fn serialize<S: Serializer>(&self, s: S) -> Result<S::Ok, S::Error> {
        use ser::SerializeSeq;
        let sl = self.as_slice();
        let mut seq = s.serialize_seq(Some(sl.len()))?;
        for item in sl {
            seq.serialize_element(item)?;
        }
        seq.end()
    }
}

struct CArrayVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> de::Visitor<'de> for CArrayVisitor<T> {
    type Value = CArray<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a sequence")
    }

    fn visit_seq<A: de::SeqAccess<'de>>(self, mut a: A) -> Result<Self::Value, A::Error> {
        let mut out = CArray::new();
        if let Some(hint) = a.size_hint() {
            out.reserve(hint.min(MAX_PREALLOC));
        }
        while let Some(elem) = a.next_element::<T>()? {
            out.push(elem);
        }
        Ok(out)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for CArray<T> {
    fn deserialize<D: Deserializer<'de>>(d: D) -> Result<Self, D::Error> {
        d.deserialize_seq(CArrayVisitor(PhantomData))
    }
}
