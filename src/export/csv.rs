use super::model::AttendanceExport;
use crate::errors::AppResult;
use csv::Writer;
use std::path::Path;

/// Write attendance rows as CSV (empty cell for an absent timestamp).
pub fn write_csv(path: &Path, rows: &[AttendanceExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(["op_id", "operator_id", "state", "checked_in_at", "checked_out_at"])?;

    for r in rows {
        wtr.write_record([
            r.op_id.to_string(),
            r.operator_id.to_string(),
            r.state.to_string(),
            r.checked_in_at.clone().unwrap_or_default(),
            r.checked_out_at.clone().unwrap_or_default(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
