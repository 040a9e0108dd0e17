//! Comb sort.
//!
//! The gap starts at `n` and shrinks by a factor of 1.3 before every pass,
//! floored and clamped to 1. The sort ends after a pass at gap 1 with no
//! swaps.

use crate::element::SortElement;
use crate::recorder::Recorder;

const SHRINK: f64 = 1.3;

pub fn sort<T: SortElement>(rec: &mut Recorder, seq: &mut [T]) {
    let n = seq.len();
    let mut gap = n;
    let mut sorted = false;

    while !sorted {
        gap = (gap as f64 / SHRINK).floor() as usize;
        if gap <= 1 {
            gap = 1;
            sorted = true;
        }

        let mut i = 0;
        while i + gap < n {
            if rec.compare(seq, i, i + gap) {
                rec.swap(seq, i, i + gap);
                sorted = false;
            }
            i += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_support::*;
    use super::*;

    #[test]
    fn sorts() {
        let input = [8.0, 4.0, 1.0, 56.0, 3.0, -44.0, 23.0, -6.0, 28.0, 0.0];
        let (sorted, _, _) = record(sort, &input);
        assert_eq!(
            sorted,
            vec![-44.0, -6.0, 0.0, 1.0, 3.0, 4.0, 8.0, 23.0, 28.0, 56.0]
        );
    }

    #[test]
    fn first_pass_uses_shrunk_gap() {
        let (_, actions, _) = record(sort, &[1.0, 2.0, 3.0, 4.0, 5.0]);
        // floor(5 / 1.3) = 3.
        let first = actions
            .iter()
            .find(|a| a.kind == sortscope_core::ActionKind::Compare)
            .unwrap();
        assert_eq!(first.touches(), &[0, 3]);
    }

    #[test]
    fn two_elements() {
        let (sorted, _, stats) = record(sort, &[2.0, 1.0]);
        assert_eq!(sorted, vec![1.0, 2.0]);
        assert_eq!(stats.swaps, 1);
        // gap 1 swaps, then a clean gap-1 pass.
        assert_eq!(stats.comparisons, 2);
    }
}
