//! Selection sort.
//!
//! For each position, the remainder is scanned for its minimum and swapped
//! in only if it is not already in place.

use crate::element::SortElement;
use crate::recorder::Recorder;

pub fn sort<T: SortElement>(rec: &mut Recorder, seq: &mut [T]) {
    let n = seq.len();
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            if rec.compare(seq, min, j) {
                min = j;
            }
        }
        if min != i {
            rec.swap(seq, i, min);
        }
    }
}
