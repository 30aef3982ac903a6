//! # Rankstats
//!
//! In-memory statistics and order statistics over growable score multisets.
//!
//! Rankstats aggregates real-valued scores (e.g. test results), each
//! optionally carrying an opaque caller-owned payload, and answers the
//! classic questions about them in one place:
//!
//! - **Aggregate statistics**: mean, variance, standard deviation, running
//!   total and extrema, recomputed lazily and memoized between insertions
//! - **Deviation scores**: the mean-centered, stddev-scaled score
//!   `(v - mean) / stddev * 10 + 50`, analogous to a T-score
//! - **Multiset algebra**: union, intersection, difference, and symmetric
//!   difference, each producing an independent new set
//! - **Order statistics**: competition rank of a value, value at a rank,
//!   and all elements tied at a rank
//!
//! ## Quick Start
//!
//! ```rust
//! use rankstats::ScoreSet;
//!
//! let mut scores: ScoreSet = ScoreSet::new();
//! for v in [0.0, 0.0, 0.0, 0.0, 50.0, 50.0, 100.0, 100.0, 100.0, 100.0] {
//!     scores.add(v);
//! }
//!
//! println!("mean   = {}", scores.mean());
//! println!("stddev = {}", scores.stddev());
//! println!("score  = {}", scores.deviation_score(100.0));
//!
//! // Competition ranking: the four 100s tie for first, so 50 ranks fifth
//! assert_eq!(scores.ranking().rank(50.0), 5);
//! assert_eq!(scores.elements_at_rank(6).len(), 2);
//! ```
//!
//! ## Payloads
//!
//! Elements can carry an opaque handle back to caller-owned data, typically
//! a reference. The engine stores the handle and hands it back on query but
//! never inspects it:
//!
//! ```rust
//! use rankstats::ScoreSet;
//!
//! struct Student<'n> {
//!     name: &'n str,
//!     score: f64,
//! }
//!
//! let class = [
//!     Student { name: "alice", score: 92.0 },
//!     Student { name: "bob", score: 55.0 },
//! ];
//!
//! let mut exam: ScoreSet<&Student> = ScoreSet::new();
//! for student in &class {
//!     exam.add_with(student.score, student);
//! }
//!
//! let top = exam.elements_at_rank(1);
//! assert_eq!(top[0].attached().unwrap().name, "alice");
//! ```
//!
//! ## Semantics
//!
//! Absence and arithmetic edge cases are reported through sentinels rather
//! than errors: an unregistered value ranks `0`, an out-of-range rank
//! resolves to NaN, a missing search hit is an empty slice, and empty-set or
//! zero-variance statistics propagate IEEE NaN/Infinity. Intersection is
//! presence-based, not strict multiset intersection: every element whose
//! value occurs anywhere in the other operand is kept.

pub mod aggregate;
pub mod element;
pub mod ranking;

pub mod prelude {
    pub use crate::aggregate::ScoreSet;
    pub use crate::element::Element;
    pub use crate::ranking::{RankEntry, RankIndex};
}

pub use aggregate::ScoreSet;
pub use element::Element;
pub use ranking::{RankEntry, RankIndex};
