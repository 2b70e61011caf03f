// This file is part of carray.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The two demonstration runs: integers and strings.

use crate::{
    cli::Scenario,
    random::{random_integer, random_string},
    report::print_array,
};
use anyhow::{Context, Result};
use carray::CArray;
use rand::Rng;
use std::io::Write;

const TOTAL_NUMBERS: usize = 20;
const NUMBER_INSERTS: usize = 10;
const TOTAL_STRINGS: usize = 15;
const STRING_INSERTS: usize = 3;
const FORBIDDEN_CHARS: &[u8] = b"abcde";

impl Scenario {
    /// Runs this scenario, reporting every intermediate state to `out`.
    pub fn run<R: Rng, W: Write>(self, rng: &mut R, out: &mut W) -> Result<()> {
        match self {
            Scenario::Integers => with_integers(rng, out).context("integer scenario failed"),
            Scenario::Strings => with_strings(rng, out).context("string scenario failed"),
            Scenario::All => {
                for scenario in self.selected() {
                    scenario.run(rng, out)?;
                }
                Ok(())
            }
        }
    }
}

fn with_integers<R: Rng, W: Write>(rng: &mut R, out: &mut W) -> Result<()> {
    let mut v: CArray<i32> = CArray::new();

    v.reserve(TOTAL_NUMBERS);
    for _ in 0..TOTAL_NUMBERS {
        let x = random_integer(rng, 0, 100)?;
        v.emplace_back(|| x);
    }
    print_array(out, &v)?;

    v.sort();
    print_array(out, &v)?;

    remove_every_second(&mut v);
    print_array(out, &v)?;

    for _ in 0..NUMBER_INSERTS {
        let pos = random_integer(rng, 0, v.len() as i64 - 1)?;
        let x = random_integer(rng, 0, 100)?;
        v.try_insert(pos as usize, x)
            .with_context(|| format!("insert at {pos} into {} elements", v.len()))?;
    }
    print_array(out, &v)?;

    v.clear();
    print_array(out, &v)?;
    Ok(())
}

/// Erases index `i` for every `i` below half the original length, which
/// removes the elements at even positions of the original order.
fn remove_every_second<T>(v: &mut CArray<T>) {
    let half = v.len() / 2;
    for i in 0..half {
        v.erase(i);
    }
}

fn with_strings<R: Rng, W: Write>(rng: &mut R, out: &mut W) -> Result<()> {
    let mut v: CArray<String> = CArray::new();

    v.reserve(TOTAL_STRINGS);
    for _ in 0..TOTAL_STRINGS {
        let len = random_integer(rng, 3, 9)?;
        v.push(random_string(rng, len));
    }
    print_array(out, &v)?;

    v.sort_by(|lhs, rhs| rhs.cmp(lhs));
    print_array(out, &v)?;

    remove_forbidden(&mut v);
    print_array(out, &v)?;

    for _ in 0..STRING_INSERTS {
        let len = random_integer(rng, 3, 15)?;
        let s = random_string(rng, len);
        let pos = random_integer(rng, 0, v.len().saturating_sub(1))?;
        v.insert(pos, s);
    }
    print_array(out, &v)?;
    Ok(())
}

fn is_forbidden(s: &str) -> bool {
    s.bytes().any(|b| FORBIDDEN_CHARS.contains(&b))
}

/// Erases every string containing one of the forbidden characters, walking
/// forward with the position `erase` hands back.
fn remove_forbidden(v: &mut CArray<String>) {
    let mut i = 0;
    while i < v.len() {
        if is_forbidden(&v[i]) {
            i = v.erase(i);
        } else {
            i += 1;
        }
    }
}
