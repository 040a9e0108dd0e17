//! Randomized self-check of the algorithm library.
//!
//! Each algorithm is run over caller-provided seed inputs followed by
//! randomly generated ones. Random rounds cycle through the configured
//! [`Distribution`]s and then a wide uniform draw that includes negative
//! and fractional keys. Every run is checked for ordering, permutation,
//! replay equivalence, statistics consistency and balanced memory accounting.
//! Failures keep the counterexample input.
//!
//! Reproducibility: given the same `random_seed`, the same inputs are
//! generated and the same report is produced.

use indexmap::IndexMap;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::debug;

use sortscope_core::{ActionKind, Algorithm, RunResult};

use crate::algorithms::radix;
use crate::distribution::Distribution;
use crate::engine::Engine;
use crate::error::{EngineError, ReplayError};
use crate::replay::replay;

/// Configuration for a verification run.
#[derive(Debug, Clone)]
pub struct VerifyConfig {
    /// Inputs run before the random ones. Seeds outside radix's domain are
    /// skipped for radix.
    pub seeds: Vec<Vec<f64>>,
    /// Random inputs per algorithm.
    pub iterations: u32,
    /// PRNG seed.
    pub random_seed: u64,
    /// Random inputs have between 0 and `max_len` elements.
    pub max_len: usize,
    /// Wide uniform values lie in `-max_value..=max_value` (radix: `0..=max_value`).
    pub max_value: u32,
    /// Shapes drawn in turn before each wide uniform round.
    pub distributions: Vec<Distribution>,
}

impl Default for VerifyConfig {
    fn default() -> Self {
        VerifyConfig {
            seeds: default_seeds(),
            iterations: 100,
            random_seed: 0,
            max_len: 32,
            max_value: 1000,
            distributions: Distribution::ALL.to_vec(),
        }
    }
}

/// Edge cases every algorithm should handle.
pub fn default_seeds() -> Vec<Vec<f64>> {
    vec![
        vec![],
        vec![42.0],
        vec![1.0, 2.0, 3.0, 4.0, 5.0],
        vec![5.0, 4.0, 3.0, 2.0, 1.0],
        vec![7.0, 7.0, 7.0, 7.0],
        vec![3.0, 1.0, 3.0, 0.0, 1.0, 3.0],
        vec![170.0, 45.0, 75.0, 90.0, 802.0, 24.0, 2.0, 66.0],
    ]
}

/// What went wrong in a single run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Violation {
    /// The engine refused an input it should accept.
    Rejected(EngineError),
    NotSorted { index: usize },
    NotPermutation,
    /// The log could not be replayed against the input.
    ReplayInvalid(ReplayError),
    /// Replaying the log produced a different sequence.
    ReplayMismatch,
    /// Replayed statistics, action counts, or the engine's snapshot disagree.
    StatsMismatch { detail: String },
    /// Auxiliary memory was not fully released.
    MemoryLeak { remaining: usize },
}

/// A single failing run.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyFailure {
    pub algorithm: Algorithm,
    pub input: Vec<f64>,
    pub violation: Violation,
}

/// Per-algorithm totals.
#[derive(Debug, Clone, Default, Serialize)]
pub struct AlgorithmSummary {
    pub total_run: u32,
    pub passed: u32,
}

/// Result of a verification run.
#[derive(Debug, Clone, Serialize)]
pub struct VerifyReport {
    pub total_run: u32,
    pub passed: u32,
    pub failures: Vec<VerifyFailure>,
    pub per_algorithm: IndexMap<Algorithm, AlgorithmSummary>,
    /// The seed used, for reproduction.
    pub random_seed: u64,
}

impl VerifyReport {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Runs every algorithm in `algorithms` over the seeds and random inputs.
pub fn verify(algorithms: &[Algorithm], config: &VerifyConfig) -> VerifyReport {
    let mut rng = ChaCha8Rng::seed_from_u64(config.random_seed);
    let mut report = VerifyReport {
        total_run: 0,
        passed: 0,
        failures: Vec::new(),
        per_algorithm: IndexMap::new(),
        random_seed: config.random_seed,
    };

    for &algorithm in algorithms {
        let mut summary = AlgorithmSummary::default();

        let seeds = config
            .seeds
            .iter()
            .filter(|seed| accepts(algorithm, seed))
            .cloned();
        let random = (0..config.iterations)
            .map(|round| random_input(algorithm, config, round, &mut rng))
            .collect::<Vec<_>>();

        for input in seeds.chain(random) {
            summary.total_run += 1;
            match check_run(algorithm, &input) {
                Ok(()) => summary.passed += 1,
                Err(violation) => report.failures.push(VerifyFailure {
                    algorithm,
                    input,
                    violation,
                }),
            }
        }

        debug!(
            %algorithm,
            total = summary.total_run,
            passed = summary.passed,
            "verified"
        );
        report.total_run += summary.total_run;
        report.passed += summary.passed;
        report.per_algorithm.insert(algorithm, summary);
    }

    report
}

fn accepts(algorithm: Algorithm, input: &[f64]) -> bool {
    algorithm != Algorithm::Radix || radix::check_domain(input).is_none()
}

/// Generates the input for random round `round` of `algorithm`.
///
/// Rounds cycle through `config.distributions`; every cycle ends with one
/// wide uniform draw.
pub fn random_input(
    algorithm: Algorithm,
    config: &VerifyConfig,
    round: u32,
    rng: &mut ChaCha8Rng,
) -> Vec<f64> {
    let len = rng.gen_range(0..=config.max_len);
    let slot = round as usize % (config.distributions.len() + 1);
    match config.distributions.get(slot) {
        Some(&distribution) => distribution.generate(len, rng),
        None => uniform_input(algorithm, config, len, rng),
    }
}

fn uniform_input(
    algorithm: Algorithm,
    config: &VerifyConfig,
    len: usize,
    rng: &mut ChaCha8Rng,
) -> Vec<f64> {
    let max = i64::from(config.max_value);
    (0..len)
        .map(|_| {
            if algorithm == Algorithm::Radix {
                rng.gen_range(0..=max) as f64
            } else if rng.gen_ratio(1, 4) {
                // Half-integers exercise non-integral keys.
                rng.gen_range(-max..=max) as f64 + 0.5
            } else {
                rng.gen_range(-max..=max) as f64
            }
        })
        .collect()
}

/// Runs `algorithm` once over `input` and checks every run invariant.
pub fn check_run(algorithm: Algorithm, input: &[f64]) -> Result<(), Violation> {
    let mut engine = Engine::default();
    let result = engine
        .run_algorithm(algorithm, input)
        .map_err(Violation::Rejected)?;

    check_order(input, &result)?;

    let (replayed, replay_stats) =
        replay(input, &result.actions).map_err(Violation::ReplayInvalid)?;
    if replayed != result.sorted {
        return Err(Violation::ReplayMismatch);
    }
    if replay_stats != result.stats {
        return Err(Violation::StatsMismatch {
            detail: "replayed statistics differ from the run".into(),
        });
    }
    if engine.stats() != Some(&result.stats) {
        return Err(Violation::StatsMismatch {
            detail: "engine snapshot differs from the run".into(),
        });
    }
    check_counts(&result)?;

    if result.stats.current_memory != 0 {
        return Err(Violation::MemoryLeak {
            remaining: result.stats.current_memory,
        });
    }
    Ok(())
}

fn check_order(input: &[f64], result: &RunResult) -> Result<(), Violation> {
    if let Some(index) = result.sorted.windows(2).position(|w| w[0] > w[1]) {
        return Err(Violation::NotSorted { index });
    }

    let mut expected = input.to_vec();
    expected.sort_by(f64::total_cmp);
    let mut actual = result.sorted.clone();
    actual.sort_by(f64::total_cmp);
    if expected != actual {
        return Err(Violation::NotPermutation);
    }
    Ok(())
}

fn check_counts(result: &RunResult) -> Result<(), Violation> {
    let count = |kind: ActionKind| result.actions.iter().filter(|a| a.kind == kind).count() as u64;
    let stats = &result.stats;
    let pairs = [
        (ActionKind::Compare, stats.comparisons),
        (ActionKind::Swap, stats.swaps),
        (ActionKind::Access, stats.accesses),
    ];
    for (kind, expected) in pairs {
        let logged = count(kind);
        if logged != expected {
            return Err(Violation::StatsMismatch {
                detail: format!("{logged} {kind} actions logged, statistics say {expected}"),
            });
        }
    }
    Ok(())
}
