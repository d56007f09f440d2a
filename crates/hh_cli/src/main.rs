//! hh — offline apportionment CLI.
//!
//! Wires up: exit-code mapping, argument parsing, the single-size path, and
//! the ideal-size scan path (default). Reports are written as JSON when
//! `--out` is given.

mod args;

mod exitcodes {
    pub const OK: i32 = 0;
    /// Usage / argument / precondition failures.
    pub const USAGE: i32 = 2;
    /// Data defects: parse failures and internal-consistency mismatches.
    pub const DATA: i32 = 3;
    /// Filesystem errors.
    pub const IO: i32 = 4;
}

use std::collections::BTreeMap;
use std::process::ExitCode;

use serde::Serialize;

use args::{parse_and_validate as parse_cli, Args};
use hh_io::write_json_report;
use hh_pipeline::{run_scan, HouseApportionment, PipelineError};

/// Central error type for CLI → exit-code mapping.
#[derive(Debug)]
enum MainError {
    /// Caller-side argument/precondition failures.
    Usage(String),
    /// Table parse failures and consistency defects.
    Data(String),
    /// Read/write failures.
    Io(String),
}

fn main() -> ExitCode {
    let args = match parse_cli() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("hh: error: {e}");
            return ExitCode::from(exitcodes::USAGE as u8);
        }
    };

    let rc = match run_once(&args) {
        Ok(()) => exitcodes::OK,
        Err(e) => {
            let (code, msg) = match &e {
                MainError::Usage(m) => (exitcodes::USAGE, m),
                MainError::Data(m) => (exitcodes::DATA, m),
                MainError::Io(m) => (exitcodes::IO, m),
            };
            eprintln!("hh: error: {msg}");
            code
        }
    };

    ExitCode::from(rc as u8)
}

fn run_once(args: &Args) -> Result<(), MainError> {
    let mut facade = match &args.table {
        Some(path) => HouseApportionment::load_from_path(path),
        None => HouseApportionment::load_builtin(),
    }
    .map_err(map_pipeline_err)?;

    if !args.quiet {
        eprintln!(
            "loaded {} states, ceiling {} representatives",
            facade.total_states().map_err(map_pipeline_err)?,
            facade.max_num_reps().map_err(map_pipeline_err)?
        );
    }

    match args.size {
        Some(size) => run_single(args, &mut facade, size),
        None => run_scan_mode(args, &mut facade),
    }
}

/// Allocation document for `--size` runs.
#[derive(Serialize)]
struct AllocationDoc {
    size: u32,
    quotient: f64,
    seats: BTreeMap<String, u32>,
}

fn run_single(args: &Args, facade: &mut HouseApportionment, size: u32) -> Result<(), MainError> {
    let seats = facade.allocate(size).map_err(map_pipeline_err)?;
    let quotient = facade.ratio_quotient(size).map_err(map_pipeline_err)?;

    println!("State\tSeats");
    for (state, count) in &seats {
        println!("{state}\t{count}");
    }
    println!();
    println!("size\t{size}");
    println!("max/min ratio quotient\t{quotient}");

    if let Some(out) = &args.out {
        let doc = AllocationDoc {
            size,
            quotient,
            seats: seats
                .iter()
                .map(|(n, &c)| (n.as_str().to_string(), c))
                .collect(),
        };
        let path = out.join("allocation.json");
        write_json_report(&doc, &path).map_err(|e| MainError::Io(e.to_string()))?;
        if !args.quiet {
            eprintln!("wrote {}", path.display());
        }
    }
    Ok(())
}

fn run_scan_mode(args: &Args, facade: &mut HouseApportionment) -> Result<(), MainError> {
    let report = run_scan(facade, args.max_size).map_err(map_pipeline_err)?;

    println!("Size\tMaxMinQuotient");
    for row in &report.rows {
        println!("{}\t{}", row.size, row.quotient);
    }
    println!();
    println!(
        "ideal size\t{}\t(quotient {})",
        report.ideal_size, report.ideal_quotient
    );

    if let Some(out) = &args.out {
        let path = out.join("scan_report.json");
        write_json_report(&report, &path).map_err(|e| MainError::Io(e.to_string()))?;
        if !args.quiet {
            eprintln!("wrote {}", path.display());
        }
    }
    Ok(())
}

/// Map pipeline errors to the exit-code buckets.
fn map_pipeline_err(e: PipelineError) -> MainError {
    use PipelineError::*;
    match e {
        Io(m) => MainError::Io(m),
        Parse(m) => MainError::Data(format!("parse: {m}")),
        Consistency(m) => MainError::Data(format!("consistency: {m}")),
        Invalid(m) => MainError::Usage(m),
        Disposed => MainError::Usage("facade is disposed".into()),
    }
}
