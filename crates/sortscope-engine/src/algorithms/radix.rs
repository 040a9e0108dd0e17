//! LSD radix sort over decimal digits.
//!
//! Defined for non-negative integers up to 2^53 - 1 only. Callers must
//! check [`check_domain`] first; the engine rejects out-of-domain input
//! before any action is recorded. Inside the domain, digit extraction on
//! `f64` keys is exact.
//!
//! Each digit position is handled by [`counting_pass`], a stable counting
//! sort keyed on that digit.

use crate::element::SortElement;
use crate::recorder::Recorder;

/// Largest integer every `f64` below it represents exactly.
pub const MAX_KEY: f64 = 9_007_199_254_740_991.0;

const RADIX: u64 = 10;

/// Returns the index of the first element outside the radix domain, if any.
pub fn check_domain<T: SortElement>(seq: &[T]) -> Option<usize> {
    seq.iter().position(|element| {
        let key = element.key();
        !(key.is_finite() && key >= 0.0 && key.fract() == 0.0 && key <= MAX_KEY)
    })
}

pub fn sort<T: SortElement>(rec: &mut Recorder, seq: &mut [T]) {
    let mut max = 0.0_f64;
    for i in 0..seq.len() {
        max = max.max(rec.access(seq, i).key());
    }

    let max = max as u64;
    let mut exp: u64 = 1;
    while max / exp > 0 {
        counting_pass(rec, seq, exp);
        exp = match exp.checked_mul(RADIX) {
            Some(next) => next,
            None => break,
        };
    }
}

fn digit(key: f64, exp: u64) -> usize {
    ((key as u64 / exp) % RADIX) as usize
}

/// Stable counting sort on the digit selected by `exp` (1, 10, 100, ...).
///
/// Builds a histogram of the digit, turns it into prefix sums, scatters the
/// elements into an output buffer in reverse input order, then copies the
/// buffer back through recorded assignments.
pub fn counting_pass<T: SortElement>(rec: &mut Recorder, seq: &mut [T], exp: u64) {
    let n = seq.len();
    let mut count = [0usize; RADIX as usize];
    let mut output: Vec<Option<T>> = vec![None; n];

    for i in 0..n {
        count[digit(rec.access(seq, i).key(), exp)] += 1;
    }

    for d in 1..count.len() {
        count[d] += count[d - 1];
    }

    // Reverse order keeps equal digits in input order.
    for i in (0..n).rev() {
        let value = rec.access(seq, i);
        let d = digit(value.key(), exp);
        count[d] -= 1;
        output[count[d]] = Some(value);
    }

    for (i, slot) in output.into_iter().enumerate() {
        // Every slot is filled: the prefix sums partition 0..n exactly.
        if let Some(value) = slot {
            rec.assign(seq, i, value);
        }
    }
}
