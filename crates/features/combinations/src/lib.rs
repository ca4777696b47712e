//! # Combination Engine
//!
//! Computes which integers are valid OR-combinations of a flag set's declared
//! values, either exhaustively ([`enumerate_all_combinations`]) or as the single
//! combined value of everything selected ([`all_values`]).
//!
//! ## How candidates are tested
//!
//! The engine scans `start..=max`, where `max` is the OR of the scanned members.
//! A candidate is accepted as soon as AND-ing it with the complements of the
//! members (in declaration order) clears every bit. This is an early-exit
//! heuristic rather than a subset proof: for overlapping or non-power-of-two
//! layouts it can accept values that no subset ORs to exactly, and it only ever
//! considers members from `start` onwards. Layouts that set the sign bit yield a
//! negative `max` and an empty scan (see [`compute_range`]).
//!
//! ## Zero exclusion
//!
//! `0` is removed from every result unless the flag set declares a non-empty name
//! for it; a failed name lookup counts as "unnamed".
//!
//! # Example
//!
//! ```rust
//! use flagkit_combinations::{all_values, enumerate_all_combinations};
//! use flagkit_kernel::FlagSet;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, FlagSet)]
//! enum Browsers {
//!     None = 0,
//!     Chrome = 1,
//!     Firefox = 2,
//!     Edge = 4,
//!     Safari = 8,
//! }
//!
//! let combinations = enumerate_all_combinations::<Browsers>(false);
//! assert_eq!(combinations.len(), 16);
//!
//! let combined: Vec<i64> = all_values::<Browsers>(false).iter().map(|v| v.raw()).collect();
//! assert_eq!(combined, [15]);
//! ```

mod engine;
mod range;

pub use engine::{CombinationEngine, all_values, enumerate_all_combinations};
pub use range::{CombinationRange, compute_range, is_valid_combination};
