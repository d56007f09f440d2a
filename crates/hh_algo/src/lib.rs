//! hh_algo — Algorithm layer for the apportionment engine.
//!
//! - `priority`: Huntington–Hill priority values, memoized by (state, seats).
//! - `apportion`: seat-by-seat allocation for a requested house size,
//!   memoized by size; every returned map is a defensive copy.
//! - `sequence`: memoized Fibonacci/Factorial over arbitrary-precision ints.
//!
//! Determinism: all scans run in lexicographic state order (`BTreeMap`
//! iteration), so equal priority values resolve to the first state in that
//! order. There is no randomness anywhere in this crate.

#![forbid(unsafe_code)]

use core::fmt;

use hh_core::CoreError;

pub mod apportion;
pub mod priority;
pub mod sequence;

pub use apportion::{SeatApportionment, SeatMap};
pub use priority::{PriorityKey, PriorityValues};
pub use sequence::{Factorial, Fibonacci};

/// Error surface shared by the algorithm modules.
///
/// `SeatSumMismatch` is an internal-consistency failure (a defect, not caller
/// misuse) and is kept distinct from the invalid-argument variants.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AlgoError {
    /// Operation on a disposed engine.
    Disposed,
    /// State name absent from the dataset.
    UnknownState(String),
    /// Requested house size below the one-seat-per-state floor.
    HouseTooSmall { size: u32, min: u32 },
    /// Sequence index below zero.
    NegativeIndex(i64),
    /// Allocated seats do not sum to the requested size.
    SeatSumMismatch { size: u32, total: u64 },
}

impl fmt::Display for AlgoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgoError::Disposed => write!(f, "engine is disposed"),
            AlgoError::UnknownState(name) => write!(f, "unknown state: {name}"),
            AlgoError::HouseTooSmall { size, min } => {
                write!(f, "house size {size} is below the minimum of {min}")
            }
            AlgoError::NegativeIndex(n) => write!(f, "negative index: {n}"),
            AlgoError::SeatSumMismatch { size, total } => {
                write!(f, "seat total {total} does not equal house size {size}")
            }
        }
    }
}

impl std::error::Error for AlgoError {}

impl From<CoreError> for AlgoError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Disposed => AlgoError::Disposed,
            CoreError::UnknownState(name) => AlgoError::UnknownState(name),
            // Remaining core errors cannot escape a constructed dataset;
            // surface them as unknown-state lookups if they ever do.
            other => AlgoError::UnknownState(other.to_string()),
        }
    }
}
