//! Census table loader.
//!
//! Format (`table1.txt`): a 5-line preamble, then exactly 50 repeating
//! 4-line records — state name, apportionment population (integer), 2020
//! representative count (integer, validation column), blank separator.
//! Total lines = 5 + 50 * 4.
//!
//! Contract: after parsing there are exactly 50 distinct state names, each
//! with a population and a representative count, and the key sets are
//! identical. Any violation aborts the load with a line-numbered error.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use hh_core::{ApportionmentDataset, StateName};

use crate::{IoError, IoResult};

/// Preamble lines skipped before the first record.
pub const PREAMBLE_LINES: usize = 5;
/// Lines per state record (name / population / representatives / blank).
pub const RECORD_LINES: usize = 4;
/// Records required in the bundled table.
pub const EXPECTED_STATES: usize = 50;

/// Bundled 2020 census table (resource of this crate).
const BUILTIN_TABLE: &str = include_str!("../data/table1.txt");

/// Parsed table: the immutable dataset plus the published representative
/// counts used as the load-time validation oracle.
#[derive(Clone, Debug)]
pub struct ParsedTable {
    pub dataset: ApportionmentDataset,
    pub reps_2020: BTreeMap<StateName, u32>,
}

/// Parse the fixed 50-state table.
pub fn parse_table(text: &str) -> IoResult<ParsedTable> {
    parse_table_with(text, EXPECTED_STATES)
}

/// Parse with an explicit record count (test datasets are smaller).
pub fn parse_table_with(text: &str, expected_states: usize) -> IoResult<ParsedTable> {
    let mut populations: BTreeMap<StateName, u64> = BTreeMap::new();
    let mut reps: BTreeMap<StateName, u32> = BTreeMap::new();
    let mut current: Option<StateName> = None;
    let mut records = 0usize;

    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1; // 1-based for error messages
        if line_no <= PREAMBLE_LINES || records >= expected_states {
            continue;
        }

        match (line_no - PREAMBLE_LINES - 1) % RECORD_LINES {
            0 => {
                let name: StateName = line.parse().map_err(|_| IoError::Parse {
                    line: line_no,
                    msg: "blank state name".into(),
                })?;
                if populations.contains_key(&name) {
                    return Err(IoError::Parse {
                        line: line_no,
                        msg: format!("duplicate state name: {name}"),
                    });
                }
                current = Some(name);
            }
            1 => {
                let population: u64 = line.trim().parse().map_err(|_| IoError::Parse {
                    line: line_no,
                    msg: format!("population is not an integer: {line:?}"),
                })?;
                let name = current.clone().ok_or(IoError::Parse {
                    line: line_no,
                    msg: "population before any state name".into(),
                })?;
                populations.insert(name, population);
            }
            2 => {
                let count: u32 = line.trim().parse().map_err(|_| IoError::Parse {
                    line: line_no,
                    msg: format!("representative count is not an integer: {line:?}"),
                })?;
                let name = current.clone().ok_or(IoError::Parse {
                    line: line_no,
                    msg: "representative count before any state name".into(),
                })?;
                reps.insert(name, count);
                records += 1;
            }
            _ => {
                // blank separator line; content ignored
            }
        }
    }

    if records != expected_states {
        return Err(IoError::Invalid(format!(
            "expected {expected_states} state records, found {records}"
        )));
    }
    if populations.len() != expected_states || reps.len() != expected_states {
        return Err(IoError::Invalid(format!(
            "expected {expected_states} distinct states, found {} populations / {} representative counts",
            populations.len(),
            reps.len()
        )));
    }
    if !populations.keys().eq(reps.keys()) {
        return Err(IoError::Invalid(
            "population and representative key sets differ".into(),
        ));
    }

    let dataset = ApportionmentDataset::new(populations)
        .map_err(|e| IoError::Invalid(e.to_string()))?;
    Ok(ParsedTable {
        dataset,
        reps_2020: reps,
    })
}

/// Load and parse a table file from disk.
pub fn load_table(path: &Path) -> IoResult<ParsedTable> {
    let text = fs::read_to_string(path)
        .map_err(|e| IoError::Read(format!("{}: {e}", path.display())))?;
    parse_table(&text)
}

/// Parse the bundled 2020 census table. The resource ships with the crate,
/// so a failure here is a build defect rather than user input.
pub fn builtin_table() -> IoResult<ParsedTable> {
    parse_table(BUILTIN_TABLE)
}
