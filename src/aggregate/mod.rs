//! Score-set aggregation and multiset algebra
//!
//! This module owns the elements of a score set and their aggregate
//! statistics: running total and extrema, lazily memoized mean, variance,
//! and standard deviation, plus the normalized deviation score
//! `(v - mean) / stddev * 10 + 50`. Set algebra (union, intersection,
//! difference, symmetric difference) and filtering build brand-new sets.
//!
//! # Example
//!
//! ```
//! use rankstats::ScoreSet;
//!
//! let mut scores: ScoreSet = ScoreSet::new();
//! for v in [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
//!     scores.add(v);
//! }
//!
//! assert!((scores.mean() - 5.0).abs() < 1e-9);
//! assert!((scores.variance() - 4.0).abs() < 1e-9);
//! assert!((scores.stddev() - 2.0).abs() < 1e-9);
//! ```

mod score_set;

pub use score_set::ScoreSet;
