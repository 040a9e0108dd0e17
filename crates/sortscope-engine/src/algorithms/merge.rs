//! Top-down merge sort.
//!
//! Each merge step allocates two temporary halves (modelled as memory
//! events), copies the halves out through recorded accesses, and writes the
//! merge back through recorded assignments. Values in the temporary buffers
//! are compared directly since they are not positions in the sequence. The
//! left half wins ties, which keeps the sort stable.

use crate::element::SortElement;
use crate::recorder::Recorder;

pub fn sort<T: SortElement>(rec: &mut Recorder, seq: &mut [T]) {
    if seq.len() > 1 {
        let right = seq.len() - 1;
        sort_range(rec, seq, 0, right);
    }
}

/// Sorts the inclusive range `left..=right`.
fn sort_range<T: SortElement>(rec: &mut Recorder, seq: &mut [T], left: usize, right: usize) {
    if left < right {
        let mid = left + (right - left) / 2;
        sort_range(rec, seq, left, mid);
        sort_range(rec, seq, mid + 1, right);
        merge(rec, seq, left, mid, right);
    }
}

/// Merges the sorted runs `left..=mid` and `mid+1..=right`.
fn merge<T: SortElement>(rec: &mut Recorder, seq: &mut [T], left: usize, mid: usize, right: usize) {
    let n1 = mid - left + 1;
    let n2 = right - mid;

    rec.allocate(n1);
    rec.allocate(n2);
    let mut lower = Vec::with_capacity(n1);
    for i in 0..n1 {
        lower.push(rec.access(seq, left + i));
    }
    let mut upper = Vec::with_capacity(n2);
    for j in 0..n2 {
        upper.push(rec.access(seq, mid + 1 + j));
    }

    let (mut i, mut j, mut k) = (0, 0, left);
    while i < n1 && j < n2 {
        if lower[i] <= upper[j] {
            rec.assign(seq, k, lower[i]);
            i += 1;
        } else {
            rec.assign(seq, k, upper[j]);
            j += 1;
        }
        k += 1;
    }
    for &value in &lower[i..] {
        rec.assign(seq, k, value);
        k += 1;
    }
    for &value in &upper[j..] {
        rec.assign(seq, k, value);
        k += 1;
    }

    rec.deallocate(n1);
    rec.deallocate(n2);
}
