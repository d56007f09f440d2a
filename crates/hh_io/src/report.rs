//! JSON report output for pipeline documents.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::{IoError, IoResult};

/// Serialize `doc` as pretty JSON to `path`, creating parent directories.
pub fn write_json_report<T: Serialize>(doc: &T, path: &Path) -> IoResult<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .map_err(|e| IoError::Write(format!("mkdir {}: {e}", parent.display())))?;
        }
    }
    let json = serde_json::to_string_pretty(doc)
        .map_err(|e| IoError::Write(format!("serialize: {e}")))?;
    fs::write(path, json)
        .map_err(|e| IoError::Write(format!("write {}: {e}", path.display())))?;
    Ok(())
}
