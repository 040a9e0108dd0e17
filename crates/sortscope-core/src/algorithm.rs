//! Algorithm identifiers and their static descriptors.
//!
//! [`Algorithm`] is the closed set of sorts the engine can run. Each one has
//! exactly one entry in [`DESCRIPTORS`]; the table is immutable and shared
//! by every run.
//!
//! Lookups by string come in two flavours:
//! - [`Algorithm::from_id`] / [`str::parse`] are strict and reject unknown ids.
//! - [`Algorithm::resolve`] never fails and falls back to [`Algorithm::Bubble`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The ten supported sorting algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bubble,
    Insertion,
    Selection,
    Merge,
    Quick,
    Heap,
    Shell,
    Comb,
    Cocktail,
    /// LSD radix sort. Defined for non-negative integers only.
    Radix,
}

impl Algorithm {
    /// Every algorithm, in declaration order.
    pub const ALL: [Algorithm; 10] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
        Algorithm::Shell,
        Algorithm::Comb,
        Algorithm::Cocktail,
        Algorithm::Radix,
    ];

    /// The lowercase identifier used by callers ("bubble", "merge", ...).
    pub fn id(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Selection => "selection",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Heap => "heap",
            Algorithm::Shell => "shell",
            Algorithm::Comb => "comb",
            Algorithm::Cocktail => "cocktail",
            Algorithm::Radix => "radix",
        }
    }

    /// Strict lookup. Identifiers are matched exactly.
    pub fn from_id(id: &str) -> Option<Algorithm> {
        Algorithm::ALL.into_iter().find(|a| a.id() == id)
    }

    /// Lenient lookup: unknown identifiers run as bubble sort.
    pub fn resolve(id: &str) -> Algorithm {
        Algorithm::from_id(id).unwrap_or(Algorithm::Bubble)
    }

    /// The static descriptor for this algorithm.
    pub fn descriptor(self) -> &'static Descriptor {
        // DESCRIPTORS is laid out in `ALL` order.
        &DESCRIPTORS[self as usize]
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Algorithm {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::from_id(s).ok_or_else(|| CoreError::UnknownAlgorithm { id: s.to_string() })
    }
}

/// Asymptotic time and space classes, as display strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Complexity {
    pub time: &'static str,
    pub space: &'static str,
}

impl Complexity {
    /// Returned for identifiers that are not in the table.
    pub const UNKNOWN: Complexity = Complexity {
        time: "Unknown",
        space: "Unknown",
    };
}

/// Read-only metadata for one algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Descriptor {
    pub algorithm: Algorithm,
    /// Display name.
    pub name: &'static str,
    pub complexity: Complexity,
    pub description: &'static str,
    /// Equal elements keep their relative order.
    pub stable: bool,
    /// Uses O(1) auxiliary elements.
    pub in_place: bool,
}

/// Fallback text for identifiers that are not in the table.
pub const NO_DESCRIPTION: &str = "No description available.";

/// The descriptor table, one entry per [`Algorithm`] in `ALL` order.
pub static DESCRIPTORS: [Descriptor; 10] = [
    Descriptor {
        algorithm: Algorithm::Bubble,
        name: "Bubble Sort",
        complexity: Complexity { time: "O(n²)", space: "O(1)" },
        description: "Bubble sort is a simple sorting algorithm that repeatedly steps through the list, compares adjacent elements, and swaps them if they are in the wrong order. The pass through the list is repeated until the list is sorted.",
        stable: true,
        in_place: true,
    },
    Descriptor {
        algorithm: Algorithm::Insertion,
        name: "Insertion Sort",
        complexity: Complexity { time: "O(n²)", space: "O(1)" },
        description: "Insertion sort builds the final sorted array one item at a time. It's much less efficient on large lists than more advanced algorithms such as quicksort, heapsort, or merge sort but can be efficient for small data sets, especially if partially sorted.",
        stable: true,
        in_place: true,
    },
    Descriptor {
        algorithm: Algorithm::Selection,
        name: "Selection Sort",
        complexity: Complexity { time: "O(n²)", space: "O(1)" },
        description: "Selection sort divides the input list into two parts: a sorted sublist of items which is built up from left to right and a sublist of the remaining unsorted items. The algorithm repeatedly selects the smallest element from the unsorted sublist and moves it to the end of the sorted sublist.",
        stable: false,
        in_place: true,
    },
    Descriptor {
        algorithm: Algorithm::Merge,
        name: "Merge Sort",
        complexity: Complexity { time: "O(n log n)", space: "O(n)" },
        description: "Merge sort is an efficient, stable, comparison-based, divide and conquer sorting algorithm. It divides the input array into two halves, calls itself for the two halves, and then merges the two sorted halves.",
        stable: true,
        in_place: false,
    },
    Descriptor {
        algorithm: Algorithm::Quick,
        name: "Quick Sort",
        complexity: Complexity { time: "O(n log n) avg", space: "O(log n) avg" },
        description: "Quick sort is an efficient sorting algorithm that uses a divide-and-conquer strategy. It works by selecting a 'pivot' element from the array and partitioning the other elements into two sub-arrays according to whether they are less than or greater than the pivot.",
        stable: false,
        in_place: false,
    },
    Descriptor {
        algorithm: Algorithm::Heap,
        name: "Heap Sort",
        complexity: Complexity { time: "O(n log n)", space: "O(1)" },
        description: "Heap sort is a comparison-based sorting algorithm that uses a binary heap data structure. It divides its input into a sorted and an unsorted region, and it iteratively shrinks the unsorted region by extracting the largest element and moving it to the sorted region.",
        stable: false,
        in_place: true,
    },
    Descriptor {
        algorithm: Algorithm::Shell,
        name: "Shell Sort",
        complexity: Complexity { time: "O(n log² n)", space: "O(1)" },
        description: "Shell sort is an optimization of insertion sort that allows the exchange of items that are far apart. The idea is to arrange the list of elements so that, starting anywhere, taking every hth element produces a sorted list.",
        stable: false,
        in_place: true,
    },
    Descriptor {
        algorithm: Algorithm::Comb,
        name: "Comb Sort",
        complexity: Complexity { time: "O(n²)", space: "O(1)" },
        description: "Comb sort is a relatively simple sorting algorithm and improves on bubble sort by using a gap sequence to remove small values at the end of the list. It eliminates turtles, or small values near the end of the list, which are known to greatly slow bubble sort.",
        stable: false,
        in_place: true,
    },
    Descriptor {
        algorithm: Algorithm::Cocktail,
        name: "Cocktail Shaker Sort",
        complexity: Complexity { time: "O(n²)", space: "O(1)" },
        description: "Cocktail shaker sort, also known as bidirectional bubble sort, is a variation of bubble sort that sorts in both directions on each pass through the list. This sorting algorithm is only marginally more difficult to implement than bubble sort, and solves the problem of turtles effectively.",
        stable: true,
        in_place: true,
    },
    Descriptor {
        algorithm: Algorithm::Radix,
        name: "Radix Sort",
        complexity: Complexity { time: "O(nk)", space: "O(n + k)" },
        description: "Radix sort is a non-comparative sorting algorithm that sorts data with integer keys by grouping keys by individual digits which share the same position and value. It processes the digits from the least significant digit to the most significant digit.",
        stable: true,
        in_place: false,
    },
];

/// Complexity classes for an identifier, or [`Complexity::UNKNOWN`].
pub fn complexity(id: &str) -> Complexity {
    Algorithm::from_id(id)
        .map(|a| a.descriptor().complexity)
        .unwrap_or(Complexity::UNKNOWN)
}

/// Description for an identifier, or [`NO_DESCRIPTION`].
pub fn description(id: &str) -> &'static str {
    Algorithm::from_id(id)
        .map(|a| a.descriptor().description)
        .unwrap_or(NO_DESCRIPTION)
}
