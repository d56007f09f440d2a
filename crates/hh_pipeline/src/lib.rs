//! hh_pipeline — orchestration surface (load → validate → apportion → scan).
//!
//! This crate owns the facade that ties the loaded dataset to the algorithm
//! engines and exposes the derived queries (constitutional seat ceiling,
//! per-size allocations, the max/min ratio disparity metric, and the
//! ideal-size scan). Parsing lives in `hh_io`; math lives in `hh_algo`.

#![forbid(unsafe_code)]

use core::fmt;

use hh_algo::AlgoError;
use hh_io::IoError;

pub mod facade;
pub mod scan;

pub use facade::HouseApportionment;
pub use scan::{run_scan, ScanReport, ScanRow};

/// Single error surface for the pipeline orchestration.
#[derive(Debug)]
pub enum PipelineError {
    /// Filesystem failures while loading the table.
    Io(String),
    /// Table text that does not match the fixed positional format.
    Parse(String),
    /// Caller-side precondition violations (bad size, unknown state).
    Invalid(String),
    /// Internal-consistency defects: seat sums or the 2020 validation
    /// column disagreeing with the computed allocation.
    Consistency(String),
    /// Operation on a disposed facade.
    Disposed,
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Io(m) => write!(f, "io: {m}"),
            PipelineError::Parse(m) => write!(f, "parse: {m}"),
            PipelineError::Invalid(m) => write!(f, "invalid: {m}"),
            PipelineError::Consistency(m) => write!(f, "consistency: {m}"),
            PipelineError::Disposed => write!(f, "facade is disposed"),
        }
    }
}

impl std::error::Error for PipelineError {}

impl From<IoError> for PipelineError {
    fn from(e: IoError) -> Self {
        match e {
            IoError::Read(m) => PipelineError::Io(m),
            IoError::Write(m) => PipelineError::Io(m),
            IoError::Parse { line, msg } => {
                PipelineError::Parse(format!("line {line}: {msg}"))
            }
            IoError::Invalid(m) => PipelineError::Parse(m),
        }
    }
}

impl From<AlgoError> for PipelineError {
    fn from(e: AlgoError) -> Self {
        match e {
            AlgoError::Disposed => PipelineError::Disposed,
            AlgoError::SeatSumMismatch { .. } => PipelineError::Consistency(e.to_string()),
            other => PipelineError::Invalid(other.to_string()),
        }
    }
}
