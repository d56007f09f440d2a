//! hh_io — I/O crate for the apportionment engine.
//!
//! - `table`: parse the fixed-positional census table (5-line preamble,
//!   then 4-line state records) into an `ApportionmentDataset` plus the
//!   2020 validation column.
//! - `report`: write pipeline report documents as JSON files.
//!
//! Shared error type (`IoError`) used across both modules. No network I/O.

#![forbid(unsafe_code)]

use thiserror::Error;

/// Unified error for hh_io.
#[derive(Debug, Error)]
pub enum IoError {
    /// Filesystem read failures.
    #[error("read error: {0}")]
    Read(String),

    /// Line-level parse failures (1-based line number).
    #[error("parse error at line {line}: {msg}")]
    Parse { line: usize, msg: String },

    /// Structural violations: record count, duplicate names, key-set drift.
    #[error("invalid table: {0}")]
    Invalid(String),

    /// Report serialization / write failures.
    #[error("write error: {0}")]
    Write(String),
}

pub type IoResult<T> = Result<T, IoError>;

impl From<std::io::Error> for IoError {
    fn from(e: std::io::Error) -> Self {
        IoError::Read(e.to_string())
    }
}

pub mod report;
pub mod table;

pub use report::write_json_report;
pub use table::{builtin_table, load_table, parse_table, ParsedTable};
