//! Shell sort with the halving gap sequence `n/2, n/4, ..., 1`.

use crate::element::SortElement;
use crate::recorder::Recorder;

pub fn sort<T: SortElement>(rec: &mut Recorder, seq: &mut [T]) {
    let n = seq.len();
    let mut gap = n / 2;
    while gap > 0 {
        // Gapped insertion sort.
        for i in gap..n {
            let temp = rec.access(seq, i);
            let mut j = i;
            while j >= gap {
                let prev = rec.access(seq, j - gap);
                if prev <= temp {
                    break;
                }
                rec.assign(seq, j, prev);
                j -= gap;
            }
            rec.assign(seq, j, temp);
        }
        gap /= 2;
    }
}
