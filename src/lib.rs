//! Enumerates the k-element combinations of an n-element set in cool-lex order.
//!
//! Each combination is produced by relinking one node of a singly-linked bit string, so a
//! full enumeration does constant work per combination. Combinations are handed out as
//! borrowed views ([`SelectedIndices`]) over the engine's current state; the borrow ends
//! before the next combination can be requested.
//!
//! ```
//! use coollex::{combinations, LendingIterator};
//!
//! let mut combs = combinations(3, 2).unwrap();
//! let mut all = Vec::new();
//! while let Some(indices) = combs.next() {
//!     all.push(indices.collect::<Vec<_>>());
//! }
//! assert_eq!(all, vec![vec![0, 1], vec![1, 2], vec![0, 2]]);
//! ```

pub mod combinatorics;
mod error;
mod util;

pub use combinatorics::{binomial, combinations, Combinations, LendingIterator, SelectedIndices};
pub use error::{Error, InvalidArgument, Result};
