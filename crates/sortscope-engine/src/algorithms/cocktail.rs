//! Cocktail shaker sort (bidirectional bubble sort).
//!
//! A forward pass carries the largest element to the top of the window, then
//! a backward pass carries the smallest to the bottom. The window shrinks
//! from both ends. A forward pass without swaps ends the sort.

use crate::element::SortElement;
use crate::recorder::Recorder;

pub fn sort<T: SortElement>(rec: &mut Recorder, seq: &mut [T]) {
    let n = seq.len();
    if n < 2 {
        return;
    }

    let mut start = 0;
    let mut end = n - 1;
    loop {
        let mut swapped = false;
        for i in start..end {
            if rec.compare(seq, i, i + 1) {
                rec.swap(seq, i, i + 1);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }

        // The largest element of the window is now at `end`.
        end -= 1;

        swapped = false;
        for i in (start..end).rev() {
            if rec.compare(seq, i, i + 1) {
                rec.swap(seq, i, i + 1);
                swapped = true;
            }
        }
        start += 1;

        if !swapped {
            break;
        }
    }
}
