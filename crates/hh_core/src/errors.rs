//! Minimal error set for core-domain validation and lookups.

use core::fmt;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CoreError {
    /// Operation attempted on a disposed object.
    Disposed,
    /// State name not present in the dataset.
    UnknownState(String),
    /// Dataset construction with zero states.
    EmptyDataset,
    /// Token validation failure (empty/blank state name).
    InvalidToken,
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::Disposed => write!(f, "object is disposed"),
            CoreError::UnknownState(name) => write!(f, "unknown state: {name}"),
            CoreError::EmptyDataset => write!(f, "dataset has no states"),
            CoreError::InvalidToken => write!(f, "invalid token"),
        }
    }
}

impl std::error::Error for CoreError {}
