// This file is part of carray.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `carray-demo`: fills a `CArray` with random integers and strings and
//! prints it after every mutation.

mod cli;
mod random;
mod report;
mod scenario;

use cli::Cli;
use rand::{rngs::StdRng, SeedableRng};
use std::io;

fn main() {
    let cli = Cli::parse_args();

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();

    // A failing scenario is reported and the next one still runs.
    for scenario in cli.scenario.selected() {
        if let Err(err) = scenario.run(&mut rng, &mut out) {
            eprintln!("error: {err:#}");
        }
    }
}
