//! The algorithm library.
//!
//! Each submodule exposes `sort(&mut Recorder, &mut [T])`, which sorts the
//! slice in ascending order touching elements only through the recorder.
//! [`strategy_for`] maps every [`Algorithm`] to its implementation with an
//! exhaustive match, so adding a variant without an implementation does not
//! compile.
//!
//! | Algorithm | Memory events |
//! |-----------|---------------|
//! | merge     | two temporary halves per merge step |
//! | quick     | one unit per non-root recursive call |
//! | others    | none |

pub mod bubble;
pub mod cocktail;
pub mod comb;
pub mod heap;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod radix;
pub mod selection;
pub mod shell;

use sortscope_core::Algorithm;

use crate::element::SortElement;
use crate::recorder::Recorder;

/// Signature shared by every algorithm implementation.
pub type SortFn<T> = fn(&mut Recorder, &mut [T]);

/// Returns the implementation for `algorithm`.
pub fn strategy_for<T: SortElement>(algorithm: Algorithm) -> SortFn<T> {
    match algorithm {
        Algorithm::Bubble => bubble::sort::<T>,
        Algorithm::Insertion => insertion::sort::<T>,
        Algorithm::Selection => selection::sort::<T>,
        Algorithm::Merge => merge::sort::<T>,
        Algorithm::Quick => quick::sort::<T>,
        Algorithm::Heap => heap::sort::<T>,
        Algorithm::Shell => shell::sort::<T>,
        Algorithm::Comb => comb::sort::<T>,
        Algorithm::Cocktail => cocktail::sort::<T>,
        Algorithm::Radix => radix::sort::<T>,
    }
}

/// Runs `algorithm` over `seq` in place, recording into `recorder`.
pub fn sort_with<T: SortElement>(algorithm: Algorithm, recorder: &mut Recorder, seq: &mut [T]) {
    strategy_for::<T>(algorithm)(recorder, seq)
}


#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [f64; 9] = [9.0, 3.0, 7.0, 3.0, 0.0, 12.0, 5.0, 5.0, 1.0];

    #[test]
    fn every_strategy_sorts_the_sample() {
        let mut expected = SAMPLE.to_vec();
        expected.sort_by(|a, b| a.total_cmp(b));

        for algorithm in Algorithm::ALL {
            let mut seq = SAMPLE.to_vec();
            let mut rec = Recorder::new();
            sort_with(algorithm, &mut rec, &mut seq);
            assert_eq!(seq, expected, "{} produced a wrong order", algorithm);
        }
    }

    #[test]
    fn trivial_inputs_produce_no_writes() {
        for algorithm in Algorithm::ALL {
            for input in [&[][..], &[4.0][..]] {
                let mut seq = input.to_vec();
                let mut rec = Recorder::new();
                sort_with(algorithm, &mut rec, &mut seq);
                assert_eq!(seq, input, "{} changed a trivial input", algorithm);
                assert_eq!(rec.stats().swaps, 0);
                assert_eq!(rec.stats().comparisons, 0);
            }
        }
    }
}
