//! The engine: dispatch from an algorithm identifier to a recorded run.
//!
//! An [`Engine`] owns nothing but its configuration and the statistics of
//! its most recent run. Each run gets a fresh [`Recorder`] and works on a
//! private copy of the input, so the caller's slice is never touched and two
//! runs never share counters. Runs are synchronous: the whole action log
//! exists before `run` returns.
//!
//! For concurrent use, create one engine per thread.

use tracing::{debug, warn};

use sortscope_core::{Algorithm, Complexity, RunResult, Statistics};

use crate::algorithms;
use crate::algorithms::radix;
use crate::error::EngineError;
use crate::recorder::Recorder;

/// Configuration for the engine.
#[derive(Debug, Clone, Default)]
pub struct EngineConfig {
    /// Reject inputs longer than this. Quadratic sorts log O(n²) actions.
    pub max_len: Option<usize>,
    /// Reject unknown identifiers instead of running bubble sort.
    pub strict_ids: bool,
}

/// Runs algorithms and remembers the statistics of the last run.
#[derive(Debug, Default)]
pub struct Engine {
    config: EngineConfig,
    last_stats: Option<Statistics>,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Engine {
            config,
            last_stats: None,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Runs the algorithm named `id` over a copy of `input`.
    ///
    /// Unknown identifiers run bubble sort unless `strict_ids` is set.
    pub fn run(&mut self, id: &str, input: &[f64]) -> Result<RunResult, EngineError> {
        let algorithm = match Algorithm::from_id(id) {
            Some(algorithm) => algorithm,
            None if self.config.strict_ids => {
                self.last_stats = None;
                return Err(EngineError::UnknownAlgorithm { id: id.to_string() });
            }
            None => {
                warn!(id, "unknown algorithm, falling back to bubble sort");
                Algorithm::Bubble
            }
        };
        self.run_algorithm(algorithm, input)
    }

    /// Runs `algorithm` over a copy of `input`.
    pub fn run_algorithm(
        &mut self,
        algorithm: Algorithm,
        input: &[f64],
    ) -> Result<RunResult, EngineError> {
        self.last_stats = None;
        self.validate(algorithm, input)?;

        let mut sorted = input.to_vec();
        let mut recorder = Recorder::new();
        algorithms::sort_with(algorithm, &mut recorder, &mut sorted);
        let (actions, stats) = recorder.finish();

        debug!(
            %algorithm,
            len = input.len(),
            actions = actions.len(),
            comparisons = stats.comparisons,
            swaps = stats.swaps,
            peak_memory = stats.peak_memory,
            "run complete"
        );

        self.last_stats = Some(stats.clone());
        Ok(RunResult {
            algorithm,
            sorted,
            actions,
            stats,
        })
    }

    /// Statistics of the most recent successful run.
    pub fn stats(&self) -> Option<&Statistics> {
        self.last_stats.as_ref()
    }

    pub fn complexity(&self, id: &str) -> Complexity {
        sortscope_core::complexity(id)
    }

    pub fn description(&self, id: &str) -> &'static str {
        sortscope_core::description(id)
    }

    fn validate(&self, algorithm: Algorithm, input: &[f64]) -> Result<(), EngineError> {
        if let Some(max) = self.config.max_len {
            if input.len() > max {
                return Err(EngineError::InputTooLong {
                    len: input.len(),
                    max,
                });
            }
        }

        if let Some(index) = input.iter().position(|v| !v.is_finite()) {
            return Err(EngineError::NonFiniteValue {
                index,
                value: input[index],
            });
        }

        if algorithm == Algorithm::Radix {
            if let Some(index) = radix::check_domain(input) {
                return Err(EngineError::RadixDomain {
                    index,
                    value: input[index],
                });
            }
        }

        Ok(())
    }
}
