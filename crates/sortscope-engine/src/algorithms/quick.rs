//! Quicksort with the Lomuto partition scheme.
//!
//! The pivot is the last element of the range. Every non-root recursive call
//! brackets its body with a one-unit allocation, so the log shows the
//! recursion depth as auxiliary memory.

use std::ops::Range;

use crate::element::SortElement;
use crate::recorder::Recorder;

pub fn sort<T: SortElement>(rec: &mut Recorder, seq: &mut [T]) {
    let n = seq.len();
    sort_range(rec, seq, 0..n, 0);
}

fn sort_range<T: SortElement>(
    rec: &mut Recorder,
    seq: &mut [T],
    range: Range<usize>,
    depth: usize,
) {
    if depth > 0 {
        rec.allocate(1);
    }

    if range.len() > 1 {
        let pivot = partition(rec, seq, range.start, range.end - 1);
        sort_range(rec, seq, range.start..pivot, depth + 1);
        sort_range(rec, seq, pivot + 1..range.end, depth + 1);
    }

    if depth > 0 {
        rec.deallocate(1);
    }
}

/// Partitions `low..=high` around `seq[high]` and returns the pivot's final index.
fn partition<T: SortElement>(rec: &mut Recorder, seq: &mut [T], low: usize, high: usize) -> usize {
    let pivot = rec.access(seq, high);
    // Everything left of `boundary` is <= pivot.
    let mut boundary = low;
    for j in low..high {
        if rec.access(seq, j) <= pivot {
            rec.swap(seq, boundary, j);
            boundary += 1;
        }
    }
    rec.swap(seq, boundary, high);
    boundary
}
