//! The instrumented algorithm set.
//!
//! Six classic in-place sorting routines, each counting comparisons and
//! assignments under a fixed policy so the counts are comparable across
//! algorithms:
//!
//! - every check performed counts as one comparison (candidate-minimum checks,
//!   adjacent-pair checks, pivot checks, merge-head checks, sift-down child
//!   checks), whether or not the branch is taken; insertion's shift loop
//!   counts one comparison per shift actually taken;
//! - a swap counts as two assignments, a single element write as one.
//!
//! Each routine sorts ascending, performs no I/O, and touches nothing beyond
//! its buffer and the two counters. Only merge sort is stable.

use crate::value::SortValue;

/// Comparison and assignment counters for one sort invocation.
///
/// Machine-independent proxies for algorithmic work.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct OpCounts {
    /// Element comparisons performed.
    pub comparisons: u64,
    /// Element writes performed (a swap counts as two).
    pub assignments: u64,
}

/// Identifier for one of the six instrumented sorting routines.
///
/// The set is fixed and immutable for the process lifetime; each variant pairs
/// a display name with its routine, reachable through [`Algorithm::sort`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Selection sort: unconditional swap once per outer pass.
    Selection,
    /// Bubble sort: adjacent-pair swaps.
    Bubble,
    /// Quicksort with Lomuto partitioning, pivot = last element.
    Quick,
    /// Top-down stable merge sort.
    Merge,
    /// Insertion sort: shift-while-greater.
    Insertion,
    /// Heapsort over a binary max-heap built bottom-up.
    Heap,
}

impl Algorithm {
    /// Number of algorithms in the set.
    pub const COUNT: usize = 6;

    /// All six algorithms in their fixed display order.
    pub const ALL: [Algorithm; Self::COUNT] = [
        Algorithm::Selection,
        Algorithm::Bubble,
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::Insertion,
        Algorithm::Heap,
    ];

    /// Display name of the algorithm.
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Selection => "selection",
            Algorithm::Bubble => "bubble",
            Algorithm::Quick => "quick",
            Algorithm::Merge => "merge",
            Algorithm::Insertion => "insertion",
            Algorithm::Heap => "heap",
        }
    }

    /// Look up an algorithm by its display name.
    pub fn from_name(name: &str) -> Option<Algorithm> {
        Self::ALL.iter().copied().find(|a| a.name() == name)
    }

    /// Position in [`Algorithm::ALL`], also the selection-set bit index.
    pub fn index(self) -> usize {
        match self {
            Algorithm::Selection => 0,
            Algorithm::Bubble => 1,
            Algorithm::Quick => 2,
            Algorithm::Merge => 3,
            Algorithm::Insertion => 4,
            Algorithm::Heap => 5,
        }
    }

    /// Sort `values` ascending in place, accumulating into `counts`.
    pub fn sort<T: SortValue>(self, values: &mut [T], counts: &mut OpCounts) {
        match self {
            Algorithm::Selection => selection_sort(values, counts),
            Algorithm::Bubble => bubble_sort(values, counts),
            Algorithm::Quick => quick_sort(values, counts),
            Algorithm::Merge => merge_sort(values, counts),
            Algorithm::Insertion => insertion_sort(values, counts),
            Algorithm::Heap => heap_sort(values, counts),
        }
    }
}

/// A fixed-size selection of algorithms, one bit per routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmSet(u8);

impl AlgorithmSet {
    /// No algorithms selected.
    pub const EMPTY: AlgorithmSet = AlgorithmSet(0);

    /// All six algorithms selected.
    pub const ALL: AlgorithmSet = AlgorithmSet((1 << Algorithm::COUNT) - 1);

    /// A set containing exactly one algorithm.
    pub fn single(algorithm: Algorithm) -> AlgorithmSet {
        AlgorithmSet(1 << algorithm.index())
    }

    /// This set with `algorithm` added.
    #[must_use]
    pub fn with(self, algorithm: Algorithm) -> AlgorithmSet {
        AlgorithmSet(self.0 | 1 << algorithm.index())
    }

    /// Whether `algorithm` is selected.
    pub fn contains(self, algorithm: Algorithm) -> bool {
        self.0 & (1 << algorithm.index()) != 0
    }

    /// Whether nothing is selected.
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of selected algorithms.
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Selected algorithms in their fixed display order.
    pub fn iter(self) -> impl Iterator<Item = Algorithm> {
        Algorithm::ALL.into_iter().filter(move |a| self.contains(*a))
    }
}

impl FromIterator<Algorithm> for AlgorithmSet {
    fn from_iter<I: IntoIterator<Item = Algorithm>>(iter: I) -> Self {
        iter.into_iter()
            .fold(AlgorithmSet::EMPTY, AlgorithmSet::with)
    }
}

impl Default for AlgorithmSet {
    fn default() -> Self {
        AlgorithmSet::ALL
    }
}

// All six routines take `T: Copy + PartialOrd` rather than `SortValue` so the
// stable merge can be exercised against an order-witness type in tests; the
// public surface narrows to `SortValue` in `Algorithm::sort`.

/// One candidate-minimum check per inner-scan element; one unconditional swap
/// (two assignments) per outer pass, even when the minimum is already in place.
fn selection_sort<T: Copy + PartialOrd>(v: &mut [T], counts: &mut OpCounts) {
    let n = v.len();
    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            counts.comparisons += 1;
            if v[j] < v[min] {
                min = j;
            }
        }
        counts.assignments += 2;
        v.swap(i, min);
    }
}

/// One comparison per adjacent-pair check; two assignments per swap, only when
/// the pair is out of order.
fn bubble_sort<T: Copy + PartialOrd>(v: &mut [T], counts: &mut OpCounts) {
    let n = v.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - 1 - i {
            counts.comparisons += 1;
            if v[j + 1] < v[j] {
                counts.assignments += 2;
                v.swap(j, j + 1);
            }
        }
    }
}

/// Lomuto partitioning with the last element as pivot: one comparison per
/// element checked against the pivot, two assignments per partition swap and
/// two for the final pivot placement.
fn quick_sort<T: Copy + PartialOrd>(v: &mut [T], counts: &mut OpCounts) {
    let n = v.len();
    if n <= 1 {
        return;
    }
    let pivot = v[n - 1];
    let mut i = 0;
    for j in 0..n - 1 {
        counts.comparisons += 1;
        if v[j] <= pivot {
            counts.assignments += 2;
            v.swap(i, j);
            i += 1;
        }
    }
    counts.assignments += 2;
    v.swap(i, n - 1);
    let (lower, upper) = v.split_at_mut(i);
    quick_sort(lower, counts);
    quick_sort(&mut upper[1..], counts);
}

/// Top-down stable merge sort; the left half takes the ceiling of n/2.
///
/// One comparison per element consumed while both halves remain non-empty;
/// one assignment per element written, including the tail-copy phases (which
/// add assignments but no comparisons).
fn merge_sort<T: Copy + PartialOrd>(v: &mut [T], counts: &mut OpCounts) {
    let n = v.len();
    if n <= 1 {
        return;
    }
    let mid = n.div_ceil(2);
    merge_sort(&mut v[..mid], counts);
    merge_sort(&mut v[mid..], counts);
    merge_halves(v, mid, counts);
}

fn merge_halves<T: Copy + PartialOrd>(v: &mut [T], mid: usize, counts: &mut OpCounts) {
    let left = v[..mid].to_vec();
    let right = v[mid..].to_vec();
    let (mut i, mut j, mut k) = (0, 0, 0);
    while i < left.len() && j < right.len() {
        counts.comparisons += 1;
        counts.assignments += 1;
        if left[i] <= right[j] {
            v[k] = left[i];
            i += 1;
        } else {
            v[k] = right[j];
            j += 1;
        }
        k += 1;
    }
    while i < left.len() {
        counts.assignments += 1;
        v[k] = left[i];
        i += 1;
        k += 1;
    }
    while j < right.len() {
        counts.assignments += 1;
        v[k] = right[j];
        j += 1;
        k += 1;
    }
}

/// One comparison per shift-while-greater iteration; one assignment per shift
/// plus one for the final placement of the key.
fn insertion_sort<T: Copy + PartialOrd>(v: &mut [T], counts: &mut OpCounts) {
    for i in 1..v.len() {
        let key = v[i];
        let mut j = i;
        while j > 0 && key < v[j - 1] {
            counts.comparisons += 1;
            counts.assignments += 1;
            v[j] = v[j - 1];
            j -= 1;
        }
        counts.assignments += 1;
        v[j] = key;
    }
}

/// Binary max-heap: bottom-up sift-down build, then repeated root extraction.
///
/// One comparison per child evaluated against the current largest during
/// sift-down; two assignments per swap, for heap-build and extraction swaps
/// alike. The extraction loop runs down to the root itself, so the final
/// self-swap is counted like any other extraction swap.
fn heap_sort<T: Copy + PartialOrd>(v: &mut [T], counts: &mut OpCounts) {
    let n = v.len();
    if n == 0 {
        return;
    }
    for i in (0..n / 2).rev() {
        sift_down(v, n, i, counts);
    }
    for i in (0..n).rev() {
        counts.assignments += 2;
        v.swap(0, i);
        sift_down(v, i, 0, counts);
    }
}

fn sift_down<T: Copy + PartialOrd>(v: &mut [T], size: usize, i: usize, counts: &mut OpCounts) {
    let mut largest = i;
    let left = 2 * i + 1;
    let right = 2 * i + 2;
    if left < size {
        counts.comparisons += 1;
        if v[left] > v[largest] {
            largest = left;
        }
    }
    if right < size {
        counts.comparisons += 1;
        if v[right] > v[largest] {
            largest = right;
        }
    }
    if largest != i {
        counts.assignments += 2;
        v.swap(i, largest);
        sift_down(v, size, largest, counts);
    }
}
