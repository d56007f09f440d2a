//! CLI argument parsing surface.
//!
//! Rules:
//! - Offline only: the single optional input is a local table file; with no
//!   `--table` flag the bundled 2020 census table is used.
//! - `--size N` computes one allocation; otherwise the ideal-size scan runs
//!   (optionally capped by `--max-size`).
//! - `--out DIR` writes JSON reports alongside the stdout output.

use std::path::PathBuf;

use clap::Parser;

/// Parsed CLI arguments.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "hh",
    disable_help_subcommand = true,
    about = "Offline, deterministic Huntington-Hill apportionment calculator"
)]
pub struct Args {
    /// Path to an alternate census table (defaults to the bundled 2020 data).
    #[arg(long)]
    pub table: Option<PathBuf>,

    /// Compute the allocation for one house size instead of scanning.
    #[arg(long)]
    pub size: Option<u32>,

    /// Run the ideal-size scan (the default when --size is absent).
    #[arg(long, conflicts_with = "size")]
    pub scan: bool,

    /// Upper bound (exclusive) for the scan range; defaults to the
    /// constitutional ceiling.
    #[arg(long, conflicts_with = "size")]
    pub max_size: Option<u32>,

    /// Directory to write JSON reports into. Omit to skip report files.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Suppress non-essential stderr notes.
    #[arg(long)]
    pub quiet: bool,
}

/// Errors surfaced by argument validation. Messages stay short and stable.
#[derive(Debug)]
pub enum CliError {
    NotFound(String),
    BadSize(&'static str),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use CliError::*;
        match self {
            NotFound(p) => write!(f, "file not found: {p}"),
            BadSize(m) => write!(f, "invalid size: {m}"),
        }
    }
}
impl std::error::Error for CliError {}

/// Entry point used by main.rs.
pub fn parse_and_validate() -> Result<Args, CliError> {
    let args = Args::parse();
    validate(&args)?;
    Ok(args)
}

fn validate(args: &Args) -> Result<(), CliError> {
    if let Some(table) = &args.table {
        if !table.is_file() {
            return Err(CliError::NotFound(table.display().to_string()));
        }
    }
    if args.size == Some(0) {
        return Err(CliError::BadSize("--size must be positive"));
    }
    if args.max_size == Some(0) {
        return Err(CliError::BadSize("--max-size must be positive"));
    }
    Ok(())
}
