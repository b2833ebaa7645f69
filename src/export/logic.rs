use super::fs_utils::ensure_writable;
use super::model::AttendanceExport;
use super::{ExportFormat, csv, json, notify_export_success};
use crate::core::store::{AttendanceStore, StateBackend};
use crate::errors::AppResult;
use crate::ui::messages::warning;
use crate::utils::path::expand_tilde;

pub struct ExportLogic;

impl ExportLogic {
    /// Export the store's current attendance snapshot to `file`.
    pub fn export<B: StateBackend>(
        store: &AttendanceStore<B>,
        format: ExportFormat,
        file: &str,
        local_time: bool,
        force: bool,
    ) -> AppResult<usize> {
        let path = expand_tilde(file);
        ensure_writable(&path, force)?;

        let rows = AttendanceExport::rows(store.snapshot(), local_time);
        if rows.is_empty() {
            warning("No attendance recorded yet; writing an empty export.");
        }

        match format {
            ExportFormat::Csv => csv::write_csv(&path, &rows)?,
            ExportFormat::Json => json::write_json(&path, &rows)?,
        }

        if let Err(e) = store.backend().record_event(
            "export",
            format.as_str(),
            &format!("{} rows to {}", rows.len(), path.display()),
        ) {
            warning(format!("Failed to write internal log: {e}"));
        }

        notify_export_success("Attendance", &path);
        Ok(rows.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::store::MemoryBackend;
    use crate::models::check_action::CheckAction;
    use crate::models::check_status::StatusPatch;
    use chrono::{TimeZone, Utc};
    use std::env;
    use std::fs;

    fn store() -> AttendanceStore<MemoryBackend> {
        let t = Utc.with_ymd_and_hms(2025, 3, 14, 9, 0, 0).unwrap();
        let mut store = AttendanceStore::load(MemoryBackend::new());
        store.set(1, 7, StatusPatch::for_action(CheckAction::In, t));
        store.set(2, 3, StatusPatch::for_action(CheckAction::In, t));
        store.set(2, 3, StatusPatch::for_action(CheckAction::Out, t));
        store
    }

    #[test]
    fn csv_export_has_one_row_per_pair() {
        let out = env::temp_dir().join("opsboard_unit_export.csv");
        let n = ExportLogic::export(
            &store(),
            ExportFormat::Csv,
            &out.to_string_lossy(),
            false,
            true,
        )
        .unwrap();
        assert_eq!(n, 2);

        let content = fs::read_to_string(&out).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "op_id,operator_id,state,checked_in_at,checked_out_at");
        assert_eq!(lines[1], "1,7,checked_in,2025-03-14T09:00:00+00:00,");
        assert!(lines[2].starts_with("2,3,checked_out,"));
        fs::remove_file(&out).ok();
    }

    #[test]
    fn json_export_is_an_array_of_rows() {
        let out = env::temp_dir().join("opsboard_unit_export.json");
        ExportLogic::export(
            &store(),
            ExportFormat::Json,
            &out.to_string_lossy(),
            false,
            true,
        )
        .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 2);
        assert_eq!(value[0]["state"], "checked_in");
        assert_eq!(value[0]["checked_out_at"], serde_json::Value::Null);
        fs::remove_file(&out).ok();
    }
}
