//! Engine error types.
//!
//! Inside the documented input domain `Engine::run` never fails. These
//! variants reject input outside that domain before any action is recorded.

use serde::{Deserialize, Serialize};

/// Reasons the engine refuses to run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, thiserror::Error)]
pub enum EngineError {
    /// Only produced when `EngineConfig::strict_ids` is set.
    #[error("unknown algorithm: '{id}'")]
    UnknownAlgorithm { id: String },

    /// Produced when parsing a [`Distribution`](crate::Distribution) id.
    #[error("unknown distribution: '{id}'")]
    UnknownDistribution { id: String },

    #[error("input of {len} elements exceeds the configured limit of {max}")]
    InputTooLong { len: usize, max: usize },

    /// NaN and infinities have no place in an ascending order.
    #[error("non-finite value {value} at index {index}")]
    NonFiniteValue { index: usize, value: f64 },

    #[error("radix sort needs non-negative integers, got {value} at index {index}")]
    RadixDomain { index: usize, value: f64 },
}

/// Errors from replaying an action log that does not fit its input.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum ReplayError {
    #[error("action {position}: index {index} out of range for length {len}")]
    IndexOutOfRange {
        position: usize,
        index: usize,
        len: usize,
    },

    #[error("action {position}: {reason}")]
    MalformedAction { position: usize, reason: String },

    /// A release larger than the memory currently held by the log.
    #[error("action {position}: free of {size} exceeds {allocated} allocated")]
    MemoryUnderflow {
        position: usize,
        size: usize,
        allocated: usize,
    },
}
