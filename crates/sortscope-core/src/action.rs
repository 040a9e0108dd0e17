//! Action records: one entry per elementary operation performed by a sort.
//!
//! The action log is append-only. Replaying it in order against a copy of
//! the original input reproduces the sorted output and the run statistics,
//! so every [`Action`] carries exactly the data a player needs to apply it:
//! - `Compare` / `Access`: indices only (no state change).
//! - `Assign`: one index and the written value.
//! - `Swap`: two indices and the two post-swap values.
//! - `MemoryAlloc` / `MemoryFree`: a size and the running total afterwards.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};

use crate::stats::MemoryOp;

/// The kind of elementary operation an [`Action`] records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionKind {
    Compare,
    Access,
    Assign,
    Swap,
    MemoryAlloc,
    MemoryFree,
}

impl ActionKind {
    /// Whether this kind changes the working sequence when replayed.
    pub fn is_write(self) -> bool {
        matches!(self, ActionKind::Assign | ActionKind::Swap)
    }

    /// Whether this kind is an auxiliary-memory event.
    pub fn is_memory(self) -> bool {
        matches!(self, ActionKind::MemoryAlloc | ActionKind::MemoryFree)
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ActionKind::Compare => "compare",
            ActionKind::Access => "access",
            ActionKind::Assign => "assign",
            ActionKind::Swap => "swap",
            ActionKind::MemoryAlloc => "alloc",
            ActionKind::MemoryFree => "free",
        };
        f.write_str(name)
    }
}

/// One logged elementary operation.
///
/// Use the per-kind constructors; they fix the label and notation for each
/// kind so that two runs of the same algorithm produce identical logs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    /// What kind of operation this is.
    pub kind: ActionKind,
    /// Positions in the working sequence involved, in operand order.
    pub indices: SmallVec<[usize; 2]>,
    /// Values written (assign) or the post-swap values (swap).
    pub values: SmallVec<[f64; 2]>,
    /// Number of elements allocated or released (memory events only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<usize>,
    /// Auxiliary memory in use after this event (memory events only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub running_total: Option<usize>,
    /// Short human-readable label of the operation's intent.
    pub description: Cow<'static, str>,
    /// Symbolic rendering for display. Never evaluated.
    pub notation: Cow<'static, str>,
}

impl Action {
    /// A comparison of `a[i] > a[j]`.
    pub fn compare(i: usize, j: usize) -> Self {
        Action {
            kind: ActionKind::Compare,
            indices: smallvec![i, j],
            values: SmallVec::new(),
            size: None,
            running_total: None,
            description: Cow::Borrowed("Comparing elements"),
            notation: Cow::Borrowed("a[i] > a[j]"),
        }
    }

    /// A read of `a[i]`.
    pub fn access(i: usize) -> Self {
        Action {
            kind: ActionKind::Access,
            indices: smallvec![i],
            values: SmallVec::new(),
            size: None,
            running_total: None,
            description: Cow::Borrowed("Accessing array element"),
            notation: Cow::Borrowed("v = a[i]"),
        }
    }

    /// A write of `value` into `a[i]`.
    pub fn assign(i: usize, value: f64) -> Self {
        Action {
            kind: ActionKind::Assign,
            indices: smallvec![i],
            values: smallvec![value],
            size: None,
            running_total: None,
            description: Cow::Borrowed("Assigning value to array element"),
            notation: Cow::Borrowed("a[i] = v"),
        }
    }

    /// An exchange of `a[i]` and `a[j]`; `vi`/`vj` are the values after the swap.
    pub fn swap(i: usize, j: usize, vi: f64, vj: f64) -> Self {
        Action {
            kind: ActionKind::Swap,
            indices: smallvec![i, j],
            values: smallvec![vi, vj],
            size: None,
            running_total: None,
            description: Cow::Borrowed("Swapping elements"),
            notation: Cow::Borrowed("swap(a[i], a[j])"),
        }
    }

    /// An auxiliary-memory event of `size` elements leaving `running_total` in use.
    pub fn memory(op: MemoryOp, size: usize, running_total: usize) -> Self {
        let (kind, description, notation) = match op {
            MemoryOp::Allocate => (ActionKind::MemoryAlloc, "Allocating memory", "new buf[n]"),
            MemoryOp::Deallocate => (ActionKind::MemoryFree, "Releasing memory", "free(buf)"),
        };
        Action {
            kind,
            indices: SmallVec::new(),
            values: SmallVec::new(),
            size: Some(size),
            running_total: Some(running_total),
            description: Cow::Borrowed(description),
            notation: Cow::Borrowed(notation),
        }
    }

    /// Indices of the working sequence this action touches.
    pub fn touches(&self) -> &[usize] {
        &self.indices
    }

    pub fn is_memory(&self) -> bool {
        self.kind.is_memory()
    }

    /// The memory operation this action represents, if any.
    pub fn memory_op(&self) -> Option<MemoryOp> {
        match self.kind {
            ActionKind::MemoryAlloc => Some(MemoryOp::Allocate),
            ActionKind::MemoryFree => Some(MemoryOp::Deallocate),
            _ => None,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            ActionKind::Compare => {
                write!(f, "compare a[{}] > a[{}]", self.indices[0], self.indices[1])
            }
            ActionKind::Access => write!(f, "access a[{}]", self.indices[0]),
            ActionKind::Assign => {
                write!(f, "assign a[{}] = {}", self.indices[0], self.values[0])
            }
            ActionKind::Swap => {
                write!(f, "swap a[{}] <-> a[{}]", self.indices[0], self.indices[1])
            }
            ActionKind::MemoryAlloc | ActionKind::MemoryFree => write!(
                f,
                "{} {} (in use: {})",
                self.kind,
                self.size.unwrap_or(0),
                self.running_total.unwrap_or(0)
            ),
        }
    }
}
