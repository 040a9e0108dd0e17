//! Heap sort.
//!
//! Builds a max-heap bottom-up, then repeatedly swaps the root with the last
//! unsorted slot and sifts the new root down through the shrinking heap.

use crate::element::SortElement;
use crate::recorder::Recorder;

pub fn sort<T: SortElement>(rec: &mut Recorder, seq: &mut [T]) {
    let n = seq.len();
    for root in (0..n / 2).rev() {
        sift_down(rec, seq, n, root);
    }
    for end in (1..n).rev() {
        rec.swap(seq, 0, end);
        sift_down(rec, seq, end, 0);
    }
}

/// Restores the max-heap property for the subtree at `root` within `seq[..size]`.
fn sift_down<T: SortElement>(rec: &mut Recorder, seq: &mut [T], size: usize, root: usize) {
    let mut largest = root;
    let left = 2 * root + 1;
    let right = 2 * root + 2;

    if left < size && rec.compare(seq, left, largest) {
        largest = left;
    }
    if right < size && rec.compare(seq, right, largest) {
        largest = right;
    }

    if largest != root {
        rec.swap(seq, root, largest);
        sift_down(rec, seq, size, largest);
    }
}
