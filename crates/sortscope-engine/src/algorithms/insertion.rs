//! Insertion sort.
//!
//! The element at `i` is held as a key (one access), larger predecessors are
//! shifted right one slot at a time, then the key is written into the gap.

use crate::element::SortElement;
use crate::recorder::Recorder;

pub fn sort<T: SortElement>(rec: &mut Recorder, seq: &mut [T]) {
    for i in 1..seq.len() {
        let key = rec.access(seq, i);
        let mut slot = i;
        while slot > 0 {
            let prev = rec.access(seq, slot - 1);
            if prev <= key {
                break;
            }
            rec.assign(seq, slot, prev);
            slot -= 1;
        }
        rec.assign(seq, slot, key);
    }
}
