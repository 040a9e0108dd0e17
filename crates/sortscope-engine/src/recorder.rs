//! The recorder: the only gateway through which algorithms touch elements.
//!
//! Every primitive updates the running [`Statistics`] and appends exactly the
//! actions a replay needs to reproduce its effect. A [`Recorder`] is created
//! fresh for every run and consumed by [`Recorder::finish`], so statistics
//! from two runs can never mix.
//!
//! Index arguments must be in bounds. An out-of-range index is a bug in the
//! calling algorithm and panics through slice indexing.

use sortscope_core::{Action, MemoryOp, Statistics};

use crate::element::SortElement;

/// Records actions and statistics for one run.
#[derive(Debug, Default)]
pub struct Recorder {
    actions: Vec<Action>,
    stats: Statistics,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `seq[i] > seq[j]`.
    ///
    /// Logs two accesses (`i` then `j`) followed by the comparison. Equal
    /// elements compare false, so callers that swap on `true` never reorder
    /// ties.
    pub fn compare<T: SortElement>(&mut self, seq: &[T], i: usize, j: usize) -> bool {
        self.stats.comparisons += 1;
        let a = self.access(seq, i);
        let b = self.access(seq, j);
        self.actions.push(Action::compare(i, j));
        a > b
    }

    /// Reads `seq[i]`.
    pub fn access<T: SortElement>(&mut self, seq: &[T], i: usize) -> T {
        let value = seq[i];
        self.stats.accesses += 1;
        self.actions.push(Action::access(i));
        value
    }

    /// Writes `value` into `seq[i]`. Writes do not count as accesses.
    pub fn assign<T: SortElement>(&mut self, seq: &mut [T], i: usize, value: T) {
        seq[i] = value;
        self.actions.push(Action::assign(i, value.key()));
    }

    /// Exchanges `seq[i]` and `seq[j]` in place.
    pub fn swap<T: SortElement>(&mut self, seq: &mut [T], i: usize, j: usize) {
        seq.swap(i, j);
        self.stats.swaps += 1;
        self.actions
            .push(Action::swap(i, j, seq[i].key(), seq[j].key()));
    }

    /// Models an auxiliary buffer (or stack frame) of `size` elements.
    pub fn allocate(&mut self, size: usize) {
        let total = self.stats.record_memory(MemoryOp::Allocate, size);
        self.actions
            .push(Action::memory(MemoryOp::Allocate, size, total));
    }

    /// Releases `size` auxiliary elements.
    pub fn deallocate(&mut self, size: usize) {
        let total = self.stats.record_memory(MemoryOp::Deallocate, size);
        self.actions
            .push(Action::memory(MemoryOp::Deallocate, size, total));
    }

    /// Zeroes every counter and clears the log.
    pub fn reset(&mut self) {
        self.actions.clear();
        self.stats.reset();
    }

    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Hands the log and statistics over to the caller.
    pub fn finish(self) -> (Vec<Action>, Statistics) {
        (self.actions, self.stats)
    }
}
