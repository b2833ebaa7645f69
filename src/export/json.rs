use super::model::AttendanceExport;
use crate::errors::AppResult;
use std::fs;
use std::path::Path;

/// Write attendance rows as pretty-printed JSON.
pub fn write_json(path: &Path, rows: &[AttendanceExport]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)?;
    fs::write(path, json)?;
    Ok(())
}
