//! Competition rankings over distinct values
//!
//! This module tracks the multiplicity of every distinct value in a score
//! set and answers order-statistics queries: the competition rank of a
//! value, the value occupying a given rank, and descending traversal of
//! the distinct values with their counts and starting ranks.
//!
//! # Example
//!
//! ```
//! use rankstats::ranking::RankIndex;
//!
//! let mut index = RankIndex::new();
//! for v in [100.0, 100.0, 90.0, 70.0] {
//!     index.add(v);
//! }
//!
//! assert_eq!(index.rank(100.0), 1); // two-way tie for first
//! assert_eq!(index.rank(90.0), 3);  // competition ranking skips ahead
//! assert_eq!(index.value_at(2), 100.0);
//! ```

mod rank_index;

pub use rank_index::{RankEntry, RankIndex, RankIter};
