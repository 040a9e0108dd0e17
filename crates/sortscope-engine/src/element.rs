//! Elements the recorder can operate on.
//!
//! The engine's public surface sorts `f64` sequences. Algorithms are written
//! against [`SortElement`] instead so the same code can be driven with
//! tagged elements, which is how stability is observed in tests.

use std::fmt;

/// A sortable element with a numeric key.
///
/// Ordering (`PartialOrd`) must agree with the ordering of [`key`](Self::key).
/// Actions record the key, so a replay over plain numbers stays faithful.
pub trait SortElement: Copy + PartialOrd + fmt::Debug {
    fn key(&self) -> f64;
}

impl SortElement for f64 {
    fn key(&self) -> f64 {
        *self
    }
}
