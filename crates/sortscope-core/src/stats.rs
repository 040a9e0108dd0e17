//! Running statistics and the per-run result.
//!
//! [`Statistics`] is a plain value owned by whoever drives a run. The
//! recorder updates one while an algorithm executes, and a replay rebuilds
//! an identical one from the action log alone.

use serde::{Deserialize, Serialize};

use crate::action::Action;
use crate::algorithm::Algorithm;

/// Direction of an auxiliary-memory event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MemoryOp {
    Allocate,
    Deallocate,
}

/// One point on the memory timeline, recorded per memory event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemorySnapshot {
    pub operation: MemoryOp,
    pub size: usize,
    /// Auxiliary memory in use after the event.
    pub running_total: usize,
}

/// Counters accumulated over one run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statistics {
    pub comparisons: u64,
    pub swaps: u64,
    /// Element reads. Writes are not counted.
    pub accesses: u64,
    /// Auxiliary elements currently allocated.
    pub current_memory: usize,
    /// Maximum of `current_memory` over the run so far.
    pub peak_memory: usize,
    pub memory_timeline: Vec<MemorySnapshot>,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one memory event and returns the running total afterwards.
    ///
    /// Releasing more than is allocated is an algorithm bug; in release
    /// builds the total saturates at zero.
    pub fn record_memory(&mut self, operation: MemoryOp, size: usize) -> usize {
        match operation {
            MemoryOp::Allocate => {
                self.current_memory += size;
                self.peak_memory = self.peak_memory.max(self.current_memory);
            }
            MemoryOp::Deallocate => {
                debug_assert!(
                    size <= self.current_memory,
                    "releasing {} with only {} allocated",
                    size,
                    self.current_memory
                );
                self.current_memory = self.current_memory.saturating_sub(size);
            }
        }
        self.memory_timeline.push(MemorySnapshot {
            operation,
            size,
            running_total: self.current_memory,
        });
        self.current_memory
    }

    /// Zeroes every counter and clears the timeline.
    pub fn reset(&mut self) {
        *self = Statistics::default();
    }
}

/// Everything a single run produces. Immutable once returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunResult {
    /// The algorithm that actually ran (after identifier fallback).
    pub algorithm: Algorithm,
    /// The sorted copy of the input.
    pub sorted: Vec<f64>,
    /// Complete, ordered action log.
    pub actions: Vec<Action>,
    /// Statistics at the end of the run.
    pub stats: Statistics,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_accounting_tracks_peak() {
        let mut stats = Statistics::new();
        assert_eq!(stats.record_memory(MemoryOp::Allocate, 3), 3);
        assert_eq!(stats.record_memory(MemoryOp::Allocate, 2), 5);
        assert_eq!(stats.record_memory(MemoryOp::Deallocate, 3), 2);
        assert_eq!(stats.record_memory(MemoryOp::Allocate, 1), 3);

        assert_eq!(stats.current_memory, 3);
        assert_eq!(stats.peak_memory, 5);
        assert_eq!(stats.memory_timeline.len(), 4);
        assert_eq!(
            stats.memory_timeline[2],
            MemorySnapshot {
                operation: MemoryOp::Deallocate,
                size: 3,
                running_total: 2,
            }
        );
    }

    #[test]
    fn reset_clears_everything() {
        let mut stats = Statistics::new();
        stats.comparisons = 4;
        stats.swaps = 2;
        stats.accesses = 8;
        stats.record_memory(MemoryOp::Allocate, 1);

        stats.reset();
        assert_eq!(stats, Statistics::default());
        assert!(stats.memory_timeline.is_empty());
    }

    #[test]
    fn default_statistics_snapshot() {
        insta::assert_json_snapshot!(Statistics::default(), @r###"
        {
          "comparisons": 0,
          "swaps": 0,
          "accesses": 0,
          "current_memory": 0,
          "peak_memory": 0,
          "memory_timeline": []
        }
        "###);
    }
}
