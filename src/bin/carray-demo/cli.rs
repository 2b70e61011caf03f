// This file is part of carray.
// SPDX-License-Identifier: MIT OR Apache-2.0

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "carray-demo")]
#[command(version, about = "Exercises CArray with random integers and strings", long_about = None)]
pub struct Cli {
    /// Which scenario to run
    #[arg(short, long, value_enum, default_value_t = Scenario::All)]
    pub scenario: Scenario,

    /// Seed for a reproducible run (defaults to OS entropy)
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Scenario {
    /// 20 integers: sort, drop every second, random inserts, clear
    Integers,
    /// 15 strings: sort descending, filter, random inserts
    Strings,
    /// Both, integers first
    All,
}

impl Scenario {
    pub fn selected(self) -> &'static [Scenario] {
        match self {
            Scenario::Integers => &[Scenario::Integers],
            Scenario::Strings => &[Scenario::Strings],
            Scenario::All => &[Scenario::Integers, Scenario::Strings],
        }
    }
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::{Cli, Scenario};
    use clap::Parser;

    #[test]
    fn test_defaults_to_all_scenarios_unseeded() {
        let cli = Cli::try_parse_from(["carray-demo"]).unwrap();
        assert_eq!(cli.scenario, Scenario::All);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.scenario.selected(), &[Scenario::Integers, Scenario::Strings]);
    }

    #[test]
    fn test_parses_scenario_and_seed() {
        let cli = Cli::try_parse_from(["carray-demo", "--scenario", "strings", "--seed", "42"]).unwrap();
        assert_eq!(cli.scenario, Scenario::Strings);
        assert_eq!(cli.seed, Some(42));
    }

    #[test]
    fn test_rejects_unknown_scenario() {
        assert!(Cli::try_parse_from(["carray-demo", "-s", "floats"]).is_err());
    }
}
