//! Multiplicity map and rank queries for distinct values
//!
//! The index keeps a hash map from distinct value to occurrence count plus
//! a descending-sorted list of the distinct values. The sorted list is
//! maintained lazily: registering a new value only marks it stale, and the
//! next rank query re-sorts it in place.
//!
//! # Thread Safety
//!
//! `RankIndex` is `Send` but **not `Sync`**: the lazy re-sort happens behind
//! a `RefCell` so that queries can take `&self`. For concurrent read access,
//! wrap in `Mutex` or `RwLock`.

use core::cell::{Ref, RefCell};
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use ordered_float::OrderedFloat;

/// Distinct keys plus the staleness flag for their ordering.
///
/// Separated from the outer struct so it can live in a `RefCell` and be
/// re-sorted on read without requiring `&mut self`.
#[derive(Clone, Debug)]
struct KeyList {
    /// Distinct values, descending when `sorted` is true
    keys: Vec<OrderedFloat<f64>>,
    sorted: bool,
}

/// Competition-ranking index over the distinct values of a score set.
///
/// Tracks how many times each distinct value has been registered and
/// answers rank queries under competition ("1224") ranking: tied values
/// share the same rank, and the next distinct value's rank skips ahead by
/// the size of the tie block.
///
/// Absence is reported through sentinels rather than errors: [`rank`]
/// returns `0` for a value that was never registered, and [`value_at`]
/// returns NaN for a rank outside `1..=total`.
///
/// [`rank`]: RankIndex::rank
/// [`value_at`]: RankIndex::value_at
///
/// # Example
///
/// ```
/// use rankstats::ranking::RankIndex;
///
/// let mut index = RankIndex::new();
/// for v in [100.0, 100.0, 90.0] {
///     index.add(v);
/// }
///
/// assert_eq!(index.rank(100.0), 1);
/// assert_eq!(index.rank(90.0), 3);
/// assert_eq!(index.rank(42.0), 0); // never registered
///
/// assert_eq!(index.value_at(1), 100.0);
/// assert_eq!(index.value_at(3), 90.0);
/// assert!(index.value_at(4).is_nan());
/// ```
#[derive(Debug)]
pub struct RankIndex {
    /// Occurrence count per distinct value
    multiplicity: HashMap<OrderedFloat<f64>, usize>,
    /// Interior mutable state: distinct keys, lazily sorted descending
    keys: RefCell<KeyList>,
    /// Sum of all multiplicities
    total: usize,
}

impl Default for RankIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for RankIndex {
    fn clone(&self) -> Self {
        Self {
            multiplicity: self.multiplicity.clone(),
            keys: RefCell::new(KeyList {
                keys: self.keys.borrow().keys.clone(),
                sorted: false,
            }),
            total: self.total,
        }
    }
}

impl RankIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self {
            multiplicity: HashMap::new(),
            keys: RefCell::new(KeyList {
                keys: Vec::new(),
                sorted: false,
            }),
            total: 0,
        }
    }

    /// Register one occurrence of `value`.
    ///
    /// A value seen for the first time is inserted at count 1 and stales
    /// the sorted key list; repeat occurrences only bump the count.
    pub fn add(&mut self, value: f64) {
        let key = OrderedFloat(value);
        let list = self.keys.get_mut();
        match self.multiplicity.entry(key) {
            Entry::Occupied(mut occupied) => *occupied.get_mut() += 1,
            Entry::Vacant(vacant) => {
                vacant.insert(1);
                list.keys.push(key);
                list.sorted = false;
            }
        }
        self.total += 1;
    }

    /// Number of **distinct** values registered.
    pub fn len(&self) -> usize {
        self.multiplicity.len()
    }

    /// Check if no values have been registered.
    pub fn is_empty(&self) -> bool {
        self.multiplicity.is_empty()
    }

    /// Total number of occurrences across all distinct values.
    ///
    /// Always equals the element count of the owning score set.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Check if `value` has been registered at least once.
    pub fn contains(&self, value: f64) -> bool {
        self.multiplicity.contains_key(&OrderedFloat(value))
    }

    /// Occurrence count for `value`, `0` when never registered.
    pub fn multiplicity(&self, value: f64) -> usize {
        self.multiplicity
            .get(&OrderedFloat(value))
            .copied()
            .unwrap_or(0)
    }

    /// Re-sort the distinct keys descending if stale.
    ///
    /// Staleness is probed through a shared borrow so that a settled index
    /// can keep answering queries while a [`RankIter`] holds the key list.
    fn settle(&self) {
        if self.keys.borrow().sorted {
            return;
        }
        let mut list = self.keys.borrow_mut();
        list.keys.sort_unstable_by(|a, b| b.cmp(a));
        list.sorted = true;
    }

    /// Competition rank of `value`: `1 +` the number of occurrences of all
    /// strictly greater distinct values.
    ///
    /// Tied values share the same rank. Returns the sentinel `0` when
    /// `value` was never registered; `0` is never a valid rank.
    pub fn rank(&self, value: f64) -> usize {
        let key = OrderedFloat(value);
        if !self.multiplicity.contains_key(&key) {
            return 0;
        }
        self.settle();
        let list = self.keys.borrow();
        let mut rank = 1;
        for k in &list.keys {
            if *k == key {
                break;
            }
            rank += self.multiplicity[k];
        }
        rank
    }

    /// Value occupying ordinal position `rank` under descending order,
    /// 1-based (rank 1 is the highest value).
    ///
    /// Tied occurrences cover a contiguous block of ordinal positions, and
    /// every rank inside the block resolves to that block's value. Returns
    /// NaN for ranks outside `1..=total`.
    pub fn value_at(&self, rank: usize) -> f64 {
        if rank == 0 || rank > self.total {
            return f64::NAN;
        }
        self.settle();
        let list = self.keys.borrow();
        let mut covered = 0;
        for k in &list.keys {
            covered += self.multiplicity[k];
            if rank <= covered {
                return k.0;
            }
        }
        // Unreachable while total stays consistent with the counts
        f64::NAN
    }

    /// Iterate over distinct values in descending order.
    ///
    /// Each [`RankEntry`] carries the value, its occurrence count, and the
    /// competition rank its tie block starts at. Dropping the iterator early
    /// (e.g. `break`) is the early-exit path.
    ///
    /// # Example
    ///
    /// ```
    /// use rankstats::ranking::RankIndex;
    ///
    /// let mut index = RankIndex::new();
    /// for v in [100.0, 100.0, 90.0] {
    ///     index.add(v);
    /// }
    ///
    /// let entries: Vec<_> = index.iter().map(|e| (e.value, e.count, e.rank)).collect();
    /// assert_eq!(entries, vec![(100.0, 2, 1), (90.0, 1, 3)]);
    /// ```
    pub fn iter(&self) -> RankIter<'_> {
        self.settle();
        RankIter {
            keys: self.keys.borrow(),
            multiplicity: &self.multiplicity,
            index: 0,
            rank: 1,
        }
    }
}

/// One distinct value in a [`RankIndex`] traversal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RankEntry {
    /// The distinct value
    pub value: f64,
    /// Number of occurrences of the value
    pub count: usize,
    /// Competition rank at which the value's tie block starts
    pub rank: usize,
}

/// Descending iterator over the distinct values of a [`RankIndex`].
///
/// Holds the index's sorted key list borrowed for the iterator's lifetime,
/// so the index cannot be mutated while iterating.
pub struct RankIter<'a> {
    keys: Ref<'a, KeyList>,
    multiplicity: &'a HashMap<OrderedFloat<f64>, usize>,
    index: usize,
    rank: usize,
}

impl Iterator for RankIter<'_> {
    type Item = RankEntry;

    fn next(&mut self) -> Option<Self::Item> {
        let key = *self.keys.keys.get(self.index)?;
        let count = self.multiplicity[&key];
        let entry = RankEntry {
            value: key.0,
            count,
            rank: self.rank,
        };
        self.index += 1;
        self.rank += count;
        Some(entry)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.keys.keys.len() - self.index;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RankIter<'_> {}
