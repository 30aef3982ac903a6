//! Growable multiset of scored elements with memoized statistics
//!
//! # Performance Note
//!
//! Aggregate statistics are recomputed lazily: every insertion marks the
//! memoized mean/variance/stddev stale, and the next statistics query runs
//! one full pass over the elements behind a `RefCell`, so read accessors
//! stay `&self`. Repeated queries between insertions hit the memo.
//!
//! # Thread Safety
//!
//! `ScoreSet` is `Send` but **not `Sync`** due to the internal `RefCell`.
//! For concurrent read access, wrap in `Mutex` or `RwLock`.

use core::cell::RefCell;
use core::cmp::{Ordering, Reverse};

use ordered_float::OrderedFloat;

use crate::element::Element;
use crate::ranking::RankIndex;

/// Memoized statistics, gated by the `settled` flag.
#[derive(Clone, Copy, Debug)]
struct StatsCache {
    mean: f64,
    total_squared_deviation: f64,
    variance: f64,
    stddev: f64,
    settled: bool,
}

impl StatsCache {
    fn stale() -> Self {
        Self {
            mean: 0.0,
            total_squared_deviation: 0.0,
            variance: 0.0,
            stddev: 0.0,
            settled: false,
        }
    }
}

/// A growable multiset of scored elements with aggregate statistics and a
/// co-owned [`RankIndex`].
///
/// Elements are kept in insertion order until explicitly re-sorted. Every
/// insertion updates the running total and extrema, registers the value in
/// the rank index, and stales the memoized statistics; the data model is
/// insert-only (no removal exists).
///
/// Arithmetic edge cases follow IEEE-754 rather than being intercepted:
/// the mean of an empty set is NaN, and the deviation score of a set with
/// zero standard deviation is NaN or infinite.
///
/// # Example
///
/// ```
/// use rankstats::ScoreSet;
///
/// let mut scores: ScoreSet = ScoreSet::new();
/// for v in [0.0, 0.0, 0.0, 0.0, 50.0, 50.0, 100.0, 100.0, 100.0, 100.0] {
///     scores.add(v);
/// }
///
/// assert!((scores.stddev() - 44.72136).abs() < 1e-5);
/// assert!((scores.deviation_score(0.0) - 38.81966).abs() < 1e-5);
/// assert!((scores.deviation_score(100.0) - 61.18034).abs() < 1e-5);
/// assert_eq!(scores.ranking().rank(50.0), 5);
/// ```
///
/// # Payloads
///
/// Each element may carry an opaque handle, typically a reference to a
/// caller-owned record:
///
/// ```
/// use rankstats::ScoreSet;
///
/// let mut exam: ScoreSet<&str> = ScoreSet::new();
/// exam.add_with(92.0, "alice").add_with(55.0, "bob");
///
/// let top = exam.elements_at_rank(1);
/// assert_eq!(top[0].attached(), Some("alice"));
/// ```
#[derive(Debug)]
pub struct ScoreSet<P: Copy = ()> {
    /// Elements in insertion order, unless explicitly re-sorted
    elements: Vec<Element<P>>,
    /// Running sum of all inserted values
    total: f64,
    /// Running minimum, +inf while empty
    min: f64,
    /// Running maximum, -inf while empty
    max: f64,
    /// Multiplicities and rank queries over the distinct values
    ranking: RankIndex,
    /// Interior mutable state: memoized statistics
    stats: RefCell<StatsCache>,
}

impl<P: Copy> Default for ScoreSet<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Copy> Clone for ScoreSet<P> {
    /// Deep copy: new element sequence, new rank index, and a reset
    /// statistics memo so the copy recomputes from its own elements.
    fn clone(&self) -> Self {
        Self {
            elements: self.elements.clone(),
            total: self.total,
            min: self.min,
            max: self.max,
            ranking: self.ranking.clone(),
            stats: RefCell::new(StatsCache::stale()),
        }
    }
}

impl<P: Copy> ScoreSet<P> {
    /// Create an empty score set.
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create an empty score set with room for `capacity` elements.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
            total: 0.0,
            min: f64::INFINITY,
            max: f64::NEG_INFINITY,
            ranking: RankIndex::new(),
            stats: RefCell::new(StatsCache::stale()),
        }
    }

    /// Append an element: update total and extrema, register the value in
    /// the rank index, stale the statistics memo.
    fn push(&mut self, elm: Element<P>) {
        let v = elm.value();
        self.elements.push(elm);
        self.total += v;
        self.ranking.add(v);
        if v < self.min {
            self.min = v;
        }
        if v > self.max {
            self.max = v;
        }
        self.stats.get_mut().settled = false;
    }

    /// Insert a value with no payload. Never fails.
    pub fn add(&mut self, value: f64) -> &mut Self {
        self.push(Element::new(value));
        self
    }

    /// Insert a value carrying a payload handle.
    pub fn add_with(&mut self, value: f64, attached: P) -> &mut Self {
        self.push(Element::with_attached(value, attached));
        self
    }

    /// Number of elements (occurrences, not distinct values).
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Running sum of all inserted values.
    pub fn total(&self) -> f64 {
        self.total
    }

    /// Minimum inserted value, `None` while empty.
    pub fn min(&self) -> Option<f64> {
        if self.elements.is_empty() {
            None
        } else {
            Some(self.min)
        }
    }

    /// Maximum inserted value, `None` while empty.
    pub fn max(&self) -> Option<f64> {
        if self.elements.is_empty() {
            None
        } else {
            Some(self.max)
        }
    }

    /// Range (max - min), `None` while empty.
    pub fn range(&self) -> Option<f64> {
        if self.elements.is_empty() {
            None
        } else {
            Some(self.max - self.min)
        }
    }

    /// The co-owned rank index over this set's distinct values.
    pub fn ranking(&self) -> &RankIndex {
        &self.ranking
    }

    /// O(1)-average membership test via the rank index key set.
    pub fn contains(&self, value: f64) -> bool {
        self.ranking.contains(value)
    }

    /// Recompute the memoized statistics if stale, then return `self` for
    /// chaining.
    ///
    /// The pass replaces every memoized value from scratch: `mean =
    /// total / count` (NaN on an empty set), the total squared deviation
    /// accumulated from zero over the current elements, `variance = tsd /
    /// count`, `stddev = sqrt(variance)`. Idempotent: repeated calls with
    /// no intervening insert leave the memo untouched.
    pub fn settle(&self) -> &Self {
        let mut cache = self.stats.borrow_mut();
        if !cache.settled {
            let count = self.elements.len() as f64;
            let mean = self.total / count;
            let total_squared_deviation: f64 = self
                .elements
                .iter()
                .map(|e| e.squared_deviation(mean))
                .sum();
            let variance = total_squared_deviation / count;
            *cache = StatsCache {
                mean,
                total_squared_deviation,
                variance,
                stddev: variance.sqrt(),
                settled: true,
            };
        }
        self
    }

    /// Arithmetic mean. NaN on an empty set.
    pub fn mean(&self) -> f64 {
        self.settle();
        self.stats.borrow().mean
    }

    /// Sum of squared deviations from the mean.
    pub fn total_squared_deviation(&self) -> f64 {
        self.settle();
        self.stats.borrow().total_squared_deviation
    }

    /// Population variance.
    pub fn variance(&self) -> f64 {
        self.settle();
        self.stats.borrow().variance
    }

    /// Population standard deviation.
    pub fn stddev(&self) -> f64 {
        self.settle();
        self.stats.borrow().stddev
    }

    /// Deviation of `value` from the current mean.
    pub fn deviation(&self, value: f64) -> f64 {
        value - self.mean()
    }

    /// Normalized deviation score: `(value - mean) / stddev * 10 + 50`.
    ///
    /// When the standard deviation is zero (all elements equal) the result
    /// is NaN or infinite per IEEE semantics, intentionally not
    /// special-cased.
    pub fn deviation_score(&self, value: f64) -> f64 {
        self.settle();
        let cache = self.stats.borrow();
        (value - cache.mean) / cache.stddev * 10.0 + 50.0
    }

    /// Sort the elements in place by value.
    ///
    /// `ascending = true` yields non-decreasing order, `false` yields
    /// non-increasing order. Ties land in arbitrary order. Values are
    /// ordered under the same total order the rank index keys use, so
    /// NaNs group as the greatest block and `-0.0` ties with `0.0`.
    pub fn sort_by_value(&mut self, ascending: bool) -> &mut Self {
        if ascending {
            self.elements
                .sort_unstable_by_key(|e| OrderedFloat(e.value()));
        } else {
            self.elements
                .sort_unstable_by_key(|e| Reverse(OrderedFloat(e.value())));
        }
        self
    }

    /// Sort the elements in place with a caller-supplied comparator.
    pub fn sort_by(
        &mut self,
        compare: impl FnMut(&Element<P>, &Element<P>) -> Ordering,
    ) -> &mut Self {
        self.elements.sort_by(compare);
        self
    }

    /// Every element whose value equals `value`.
    ///
    /// Re-sorts the elements ascending, binary-searches the first position
    /// at or above `value`, and slices the contiguous run whose length is
    /// the rank index multiplicity. Returns an empty slice, never an
    /// error, when the value is absent.
    ///
    /// The probe uses the same total order as the rank index keys, so
    /// searching for NaN finds inserted NaNs and `search(0.0)` also covers
    /// inserted `-0.0`s.
    pub fn search(&mut self, value: f64) -> &[Element<P>] {
        self.sort_by_value(true);
        let count = self.ranking.multiplicity(value);
        if count == 0 {
            return &[];
        }
        let key = OrderedFloat(value);
        let start = self
            .elements
            .partition_point(|e| OrderedFloat(e.value()) < key);
        &self.elements[start..start + count]
    }

    /// Every element tied at competition rank `rank`.
    ///
    /// Resolves the rank through the rank index, then searches for the
    /// resolved value. Returns an empty slice when the rank is outside
    /// `1..=len`. The range check happens on the rank itself, so a block
    /// of inserted NaNs is still retrievable by its rank.
    pub fn elements_at_rank(&mut self, rank: usize) -> &[Element<P>] {
        if rank == 0 || rank > self.len() {
            return &[];
        }
        let value = self.ranking.value_at(rank);
        self.search(value)
    }

    /// Iterate over the elements in their current order.
    ///
    /// The iterator is double-ended, so `.rev()` traverses in reverse, and
    /// `break`/`take_while` cover early exit.
    pub fn iter(&self) -> core::slice::Iter<'_, Element<P>> {
        self.elements.iter()
    }

    /// New independent set holding the elements matching `predicate`.
    /// Payload handles are carried over unchanged.
    pub fn filter(&self, mut predicate: impl FnMut(&Element<P>) -> bool) -> ScoreSet<P> {
        let mut out = ScoreSet::new();
        for elm in &self.elements {
            if predicate(elm) {
                out.push(*elm);
            }
        }
        out
    }

    /// Multiset union: every element of both operands, duplicates
    /// preserved, so `union(a, b).len() == a.len() + b.len()`.
    pub fn union(&self, other: &ScoreSet<P>) -> ScoreSet<P> {
        let mut out = ScoreSet::with_capacity(self.len() + other.len());
        for elm in &self.elements {
            out.push(*elm);
        }
        for elm in &other.elements {
            out.push(*elm);
        }
        out
    }

    /// Presence-based intersection: every element of either operand whose
    /// value occurs in the other operand.
    ///
    /// This is deliberately not strict multiset intersection: a value
    /// occurring 3x here and 1x in `other` contributes all four elements,
    /// not the multiset-min count of 1.
    pub fn intersection(&self, other: &ScoreSet<P>) -> ScoreSet<P> {
        let mut out = ScoreSet::new();
        for elm in &self.elements {
            if other.ranking.contains(elm.value()) {
                out.push(*elm);
            }
        }
        for elm in &other.elements {
            if self.ranking.contains(elm.value()) {
                out.push(*elm);
            }
        }
        out
    }

    /// Both one-directional differences in one call: elements of `self`
    /// whose value is absent from `other`, and elements of `other` whose
    /// value is absent from `self`.
    pub fn difference(&self, other: &ScoreSet<P>) -> (ScoreSet<P>, ScoreSet<P>) {
        let mut self_only = ScoreSet::new();
        for elm in &self.elements {
            if !other.ranking.contains(elm.value()) {
                self_only.push(*elm);
            }
        }
        let mut other_only = ScoreSet::new();
        for elm in &other.elements {
            if !self.ranking.contains(elm.value()) {
                other_only.push(*elm);
            }
        }
        (self_only, other_only)
    }

    /// Union of the two one-directional differences as a single set.
    pub fn symmetric_difference(&self, other: &ScoreSet<P>) -> ScoreSet<P> {
        let mut out = ScoreSet::new();
        for elm in &self.elements {
            if !other.ranking.contains(elm.value()) {
                out.push(*elm);
            }
        }
        for elm in &other.elements {
            if !self.ranking.contains(elm.value()) {
                out.push(*elm);
            }
        }
        out
    }
}

impl<'a, P: Copy> IntoIterator for &'a ScoreSet<P> {
    type Item = &'a Element<P>;
    type IntoIter = core::slice::Iter<'a, Element<P>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<P: Copy> Extend<f64> for ScoreSet<P> {
    fn extend<I: IntoIterator<Item = f64>>(&mut self, iter: I) {
        for value in iter {
            self.add(value);
        }
    }
}

impl FromIterator<f64> for ScoreSet {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        let mut set = ScoreSet::new();
        set.extend(iter);
        set
    }
}
