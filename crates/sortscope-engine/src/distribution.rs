//! Seeded input generators.
//!
//! Each [`Distribution`] produces positive integers, so every generated
//! input is inside the domain of all ten algorithms (radix included).
//! Generation is driven by the caller's RNG; seed it with
//! `ChaCha8Rng::seed_from_u64` to reproduce an input.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Values drawn by [`Distribution::Random`] lie in `1..=RANDOM_MAX`.
pub const RANDOM_MAX: u32 = 100;

/// Values drawn by [`Distribution::FewUnique`] lie in `1..=FEW_UNIQUE_MAX`.
pub const FEW_UNIQUE_MAX: u32 = 5;

/// Shapes of generated input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Distribution {
    /// Independent uniform values in `1..=100`.
    Random,
    /// `1..=n` in order with `ceil(n / 10)` random transpositions.
    NearlySorted,
    /// `n` down to `1`.
    Reversed,
    /// Independent uniform values in `1..=5`.
    FewUnique,
}

impl Distribution {
    pub const ALL: [Distribution; 4] = [
        Distribution::Random,
        Distribution::NearlySorted,
        Distribution::Reversed,
        Distribution::FewUnique,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Distribution::Random => "random",
            Distribution::NearlySorted => "nearly-sorted",
            Distribution::Reversed => "reversed",
            Distribution::FewUnique => "few-unique",
        }
    }

    pub fn from_id(id: &str) -> Option<Distribution> {
        Distribution::ALL.into_iter().find(|d| d.id() == id)
    }

    /// Shorthand for [`generate`].
    pub fn generate<R: Rng + ?Sized>(self, size: usize, rng: &mut R) -> Vec<f64> {
        generate(self, size, rng)
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Distribution {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Distribution::from_id(s).ok_or_else(|| EngineError::UnknownDistribution {
            id: s.to_string(),
        })
    }
}

/// Generates `size` values shaped by `distribution`.
pub fn generate<R: Rng + ?Sized>(
    distribution: Distribution,
    size: usize,
    rng: &mut R,
) -> Vec<f64> {
    match distribution {
        Distribution::Random => uniform(size, RANDOM_MAX, rng),
        Distribution::FewUnique => uniform(size, FEW_UNIQUE_MAX, rng),
        Distribution::Reversed => (1..=size).rev().map(|v| v as f64).collect(),
        Distribution::NearlySorted => {
            let mut values: Vec<f64> = (1..=size).map(|v| v as f64).collect();
            if size > 0 {
                for _ in 0..size.div_ceil(10) {
                    let a = rng.gen_range(0..size);
                    let b = rng.gen_range(0..size);
                    values.swap(a, b);
                }
            }
            values
        }
    }
}

fn uniform<R: Rng + ?Sized>(size: usize, max: u32, rng: &mut R) -> Vec<f64> {
    (0..size).map(|_| f64::from(rng.gen_range(1..=max))).collect()
}
