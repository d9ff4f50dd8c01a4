use anyhow::{anyhow, Result};
use maxdefense_catalog::{Challenge, Selection};
use std::{fmt, str::FromStr};

pub mod dynamic;
pub mod exhaustive;

pub use dynamic::{dynamic_max_defense, DefenseTable};
pub use exhaustive::exhaustive_max_defense;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    Dynamic,
    Exhaustive,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Dynamic, Algorithm::Exhaustive];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Dynamic => "dynamic",
            Algorithm::Exhaustive => "exhaustive",
        }
    }

    pub fn solve_challenge(&self, challenge: &Challenge) -> Result<Selection> {
        match self {
            Algorithm::Dynamic => dynamic::solve_challenge(challenge),
            Algorithm::Exhaustive => exhaustive::solve_challenge(challenge),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dynamic" => Ok(Algorithm::Dynamic),
            "exhaustive" => Ok(Algorithm::Exhaustive),
            _ => Err(anyhow!("Unknown algorithm: {}", s)),
        }
    }
}
