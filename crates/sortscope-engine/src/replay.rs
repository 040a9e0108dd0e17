//! Cursor-based replay of an action log.
//!
//! A [`Replay`] applies actions one at a time to its own working copy of the
//! original input and rebuilds the statistics from the log alone. It holds
//! no timers; pacing belongs to whoever drives the cursor.
//!
//! Applying an action:
//! - `Swap`: writes both post-swap values, counts a swap.
//! - `Assign`: writes the value.
//! - `Compare` / `Access`: count only.
//! - memory events: update current/peak memory and the timeline.
//!
//! Stepping backwards rebuilds the state from the start of the log, since
//! assignments do not record what they overwrote.

use sortscope_core::{Action, ActionKind, Statistics};

use crate::error::ReplayError;

/// A replay cursor over an immutable action log.
#[derive(Debug, Clone)]
pub struct Replay<'a> {
    initial: Vec<f64>,
    actions: &'a [Action],
    working: Vec<f64>,
    stats: Statistics,
    position: usize,
}

impl<'a> Replay<'a> {
    /// Validates `actions` against `input` and positions the cursor at the start.
    pub fn new(input: &[f64], actions: &'a [Action]) -> Result<Self, ReplayError> {
        let mut allocated = 0usize;
        for (position, action) in actions.iter().enumerate() {
            validate(position, action, input.len())?;
            allocated = track_memory(position, action, allocated)?;
        }
        Ok(Replay {
            initial: input.to_vec(),
            actions,
            working: input.to_vec(),
            stats: Statistics::default(),
            position: 0,
        })
    }

    /// Number of actions applied so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Total number of actions in the log.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn is_finished(&self) -> bool {
        self.position == self.actions.len()
    }

    /// The working sequence after the applied prefix.
    pub fn current(&self) -> &[f64] {
        &self.working
    }

    /// Statistics of the applied prefix.
    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    /// The most recently applied action.
    pub fn last(&self) -> Option<&'a Action> {
        let actions = self.actions;
        self.position.checked_sub(1).map(|i| &actions[i])
    }

    /// Indices touched by the most recently applied action.
    pub fn highlighted(&self) -> &'a [usize] {
        self.last().map(Action::touches).unwrap_or(&[])
    }

    /// Applies the next action and returns it, or `None` at the end.
    pub fn step(&mut self) -> Option<&'a Action> {
        let action = self.actions.get(self.position)?;
        apply(&mut self.working, &mut self.stats, action);
        self.position += 1;
        Some(action)
    }

    /// Undoes the last action. Returns `false` at the start of the log.
    pub fn step_back(&mut self) -> bool {
        match self.position.checked_sub(1) {
            Some(target) => {
                self.seek(target);
                true
            }
            None => false,
        }
    }

    /// Moves the cursor so that exactly `position` actions are applied.
    /// Positions past the end clamp to the end.
    pub fn seek(&mut self, position: usize) {
        let target = position.min(self.actions.len());
        if target < self.position {
            self.reset();
        }
        while self.position < target {
            self.step();
        }
    }

    /// Returns to the original input with zeroed statistics.
    pub fn reset(&mut self) {
        self.working.clone_from(&self.initial);
        self.stats.reset();
        self.position = 0;
    }

    /// Applies every remaining action and returns the final sequence.
    pub fn run_to_end(&mut self) -> &[f64] {
        self.seek(self.actions.len());
        &self.working
    }

    /// Consumes the replay, returning the working sequence and statistics.
    pub fn into_parts(self) -> (Vec<f64>, Statistics) {
        (self.working, self.stats)
    }
}

/// Replays a complete log against `input`.
pub fn replay(input: &[f64], actions: &[Action]) -> Result<(Vec<f64>, Statistics), ReplayError> {
    let mut replay = Replay::new(input, actions)?;
    replay.run_to_end();
    Ok(replay.into_parts())
}

fn validate(position: usize, action: &Action, len: usize) -> Result<(), ReplayError> {
    let (indices, values) = match action.kind {
        ActionKind::Compare => (2, 0),
        ActionKind::Access => (1, 0),
        ActionKind::Assign => (1, 1),
        ActionKind::Swap => (2, 2),
        ActionKind::MemoryAlloc | ActionKind::MemoryFree => {
            if action.size.is_none() {
                return Err(ReplayError::MalformedAction {
                    position,
                    reason: format!("{} without a size", action.kind),
                });
            }
            (0, 0)
        }
    };

    if action.indices.len() != indices || action.values.len() < values {
        return Err(ReplayError::MalformedAction {
            position,
            reason: format!(
                "{} expects {} indices and {} values, got {} and {}",
                action.kind,
                indices,
                values,
                action.indices.len(),
                action.values.len()
            ),
        });
    }

    match action.indices.iter().find(|&&index| index >= len) {
        Some(&index) => Err(ReplayError::IndexOutOfRange {
            position,
            index,
            len,
        }),
        None => Ok(()),
    }
}

/// Returns the memory held after `action`, rejecting releases that would
/// take the running total below zero.
fn track_memory(position: usize, action: &Action, allocated: usize) -> Result<usize, ReplayError> {
    match (action.kind, action.size) {
        (ActionKind::MemoryAlloc, Some(size)) => Ok(allocated.saturating_add(size)),
        (ActionKind::MemoryFree, Some(size)) => {
            allocated
                .checked_sub(size)
                .ok_or(ReplayError::MemoryUnderflow {
                    position,
                    size,
                    allocated,
                })
        }
        _ => Ok(allocated),
    }
}

fn apply(working: &mut [f64], stats: &mut Statistics, action: &Action) {
    match action.kind {
        ActionKind::Compare => stats.comparisons += 1,
        ActionKind::Access => stats.accesses += 1,
        ActionKind::Assign => working[action.indices[0]] = action.values[0],
        ActionKind::Swap => {
            working[action.indices[0]] = action.values[0];
            working[action.indices[1]] = action.values[1];
            stats.swaps += 1;
        }
        ActionKind::MemoryAlloc | ActionKind::MemoryFree => {
            if let (Some(op), Some(size)) = (action.memory_op(), action.size) {
                stats.record_memory(op, size);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use sortscope_core::MemoryOp;

    use super::*;
    use crate::engine::Engine;

    #[test]
    fn replay_reproduces_run() {
        let input = [5.0, 3.0, 8.0, 1.0, 9.0, 2.0];
        let result = Engine::default().run("merge", &input).unwrap();

        let (sorted, stats) = replay(&input, &result.actions).unwrap();
        assert_eq!(sorted, result.sorted);
        assert_eq!(stats, result.stats);
    }

    #[test]
    fn step_applies_one_action_at_a_time() {
        let input = [2.0, 1.0];
        let result = Engine::default().run("bubble", &input).unwrap();
        // access, access, compare, swap
        assert_eq!(result.actions.len(), 4);

        let mut replay = Replay::new(&input, &result.actions).unwrap();
        for _ in 0..3 {
            replay.step();
            assert_eq!(replay.current(), &[2.0, 1.0]);
        }
        assert_eq!(replay.highlighted(), &[0, 1]);
        assert_eq!(replay.stats().comparisons, 1);

        let swap = replay.step().unwrap();
        assert_eq!(swap.kind, ActionKind::Swap);
        assert_eq!(replay.current(), &[1.0, 2.0]);
        assert!(replay.is_finished());
        assert!(replay.step().is_none());
    }

    #[test]
    fn step_back_and_seek() {
        let input = [3.0, 1.0, 2.0];
        let result = Engine::default().run("insertion", &input).unwrap();
        let mut replay = Replay::new(&input, &result.actions).unwrap();

        replay.run_to_end();
        assert_eq!(replay.current(), result.sorted.as_slice());
        let end_stats = replay.stats().clone();

        assert!(replay.step_back());
        assert_eq!(replay.position(), result.actions.len() - 1);

        replay.seek(0);
        assert_eq!(replay.current(), &input);
        assert_eq!(replay.stats(), &Statistics::default());
        assert!(!replay.step_back());

        replay.seek(usize::MAX);
        assert!(replay.is_finished());
        assert_eq!(replay.stats(), &end_stats);
    }

    #[test]
    fn memory_events_rebuild_timeline() {
        let actions = vec![
            Action::memory(MemoryOp::Allocate, 2, 2),
            Action::memory(MemoryOp::Allocate, 3, 5),
            Action::memory(MemoryOp::Deallocate, 2, 3),
        ];
        let (_, stats) = replay(&[], &actions).unwrap();
        assert_eq!(stats.current_memory, 3);
        assert_eq!(stats.peak_memory, 5);
        assert_eq!(stats.memory_timeline.len(), 3);
    }

    #[test]
    fn rejects_out_of_range_index() {
        let actions = vec![Action::access(0), Action::swap(0, 4, 1.0, 2.0)];
        let err = Replay::new(&[1.0, 2.0], &actions).unwrap_err();
        assert_eq!(
            err,
            ReplayError::IndexOutOfRange {
                position: 1,
                index: 4,
                len: 2
            }
        );
    }

    #[test]
    fn rejects_malformed_action() {
        let mut assign = Action::assign(0, 1.0);
        assign.values.clear();
        let err = Replay::new(&[0.0], &[assign]).unwrap_err();
        assert!(matches!(err, ReplayError::MalformedAction { position: 0, .. }));
    }

    #[test]
    fn rejects_release_beyond_allocation() {
        let free = Action::memory(MemoryOp::Deallocate, 3, 0);
        let err = Replay::new(&[1.0], &[free]).unwrap_err();
        assert_eq!(
            err,
            ReplayError::MemoryUnderflow {
                position: 0,
                size: 3,
                allocated: 0
            }
        );

        let actions = vec![
            Action::memory(MemoryOp::Allocate, 2, 2),
            Action::memory(MemoryOp::Deallocate, 2, 0),
            Action::memory(MemoryOp::Deallocate, 1, 0),
        ];
        let err = replay(&[], &actions).unwrap_err();
        assert!(matches!(err, ReplayError::MemoryUnderflow { position: 2, .. }));
    }
}
