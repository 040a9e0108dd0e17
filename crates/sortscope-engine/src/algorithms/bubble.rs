//! Bubble sort with early exit.
//!
//! Each pass bubbles the largest remaining element to the end of the active
//! window. A pass without swaps ends the sort, so sorted input costs a
//! single pass of `n - 1` comparisons.

use crate::element::SortElement;
use crate::recorder::Recorder;

pub fn sort<T: SortElement>(rec: &mut Recorder, seq: &mut [T]) {
    let n = seq.len();
    for pass in 0..n {
        let mut swapped = false;
        for j in 0..n - pass - 1 {
            if rec.compare(seq, j, j + 1) {
                rec.swap(seq, j, j + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}
