//! Attendance store: the single owner of the attendance state.
//!
//! The state lives in memory and is written through to a [`StateBackend`]
//! as one JSON document under [`STORAGE_KEY`]. Reading never fails the
//! caller: missing or unreadable data restores as an empty state.

use crate::errors::{AppError, AppResult};
use crate::models::check_status::{AttendanceState, CheckStatus, StatusPatch};
use crate::ui::messages::warning;
use std::collections::HashMap;
use std::io;

/// Fixed identifier of the persisted attendance record.
pub const STORAGE_KEY: &str = "veryable-ops-checkins";

/// Persistence medium for the serialized attendance state.
pub trait StateBackend {
    fn read(&self, key: &str) -> AppResult<Option<String>>;

    /// Must replace the value atomically: a later `read` sees either the
    /// old value or the new one, never a mix.
    fn write(&mut self, key: &str, value: &str) -> AppResult<()>;

    /// Append an audit line for a recorded transition. No-op by default.
    fn record_event(&self, _operation: &str, _target: &str, _message: &str) -> AppResult<()> {
        Ok(())
    }
}

/// Process-local backend, used for ephemeral sessions and tests.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
    fail_writes: bool,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        let mut backend = Self::new();
        backend.entries.insert(key.to_string(), value.to_string());
        backend
    }

    /// A backend whose writes always fail (medium unavailable).
    pub fn failing() -> Self {
        Self {
            entries: HashMap::new(),
            fail_writes: true,
        }
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

impl StateBackend for MemoryBackend {
    fn read(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> AppResult<()> {
        if self.fail_writes {
            return Err(AppError::Io(io::Error::other("storage unavailable")));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub struct AttendanceStore<B: StateBackend> {
    backend: B,
    state: AttendanceState,
}

impl<B: StateBackend> AttendanceStore<B> {
    /// Restore the last persisted state from `backend`.
    pub fn load(backend: B) -> Self {
        let state = restore(&backend);
        Self { backend, state }
    }

    /// Write the full state snapshot under [`STORAGE_KEY`].
    pub fn save(&mut self) -> AppResult<()> {
        let json = serde_json::to_string(&self.state)?;
        self.backend.write(STORAGE_KEY, &json)
    }

    /// Record for the pair, or an all-absent record if never touched.
    pub fn get(&self, op_id: u64, operator_id: u64) -> CheckStatus {
        self.state
            .get(&op_id)
            .and_then(|op| op.get(&operator_id))
            .cloned()
            .unwrap_or_default()
    }

    /// Merge `patch` into the pair's record.
    ///
    /// The next state is built aside and swapped in whole; earlier
    /// snapshots handed out by [`snapshot`](Self::snapshot) are never
    /// modified in place.
    pub fn set(&mut self, op_id: u64, operator_id: u64, patch: StatusPatch) -> &AttendanceState {
        let mut next = self.state.clone();
        let record = next.entry(op_id).or_default().entry(operator_id).or_default();
        *record = record.merged(&patch);
        self.state = next;
        &self.state
    }

    pub fn snapshot(&self) -> &AttendanceState {
        &self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}

fn restore<B: StateBackend>(backend: &B) -> AttendanceState {
    let raw = match backend.read(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return AttendanceState::new(),
        Err(e) => {
            warning(format!("Could not read saved attendance, starting empty: {e}"));
            return AttendanceState::new();
        }
    };

    match serde_json::from_str(&raw) {
        Ok(state) => state,
        Err(e) => {
            warning(format!("Saved attendance is corrupt, starting empty: {e}"));
            AttendanceState::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::check_action::CheckAction;
    use chrono::{DateTime, TimeZone, Utc};

    fn ts(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, h, 0, 0).unwrap()
    }

    #[test]
    fn empty_backend_loads_empty_state() {
        let store = AttendanceStore::load(MemoryBackend::new());
        assert!(store.snapshot().is_empty());
        assert_eq!(store.get(1, 7), CheckStatus::default());
    }

    #[test]
    fn corrupt_data_loads_empty_state() {
        let store = AttendanceStore::load(MemoryBackend::with_value(STORAGE_KEY, "{not json"));
        assert!(store.snapshot().is_empty());

        let store = AttendanceStore::load(MemoryBackend::with_value(STORAGE_KEY, "[1,2,3]"));
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn restores_browser_shaped_document() {
        let raw = r#"{"1":{"7":{"checkedInAt":"2025-03-14T09:00:00.000Z","checkedOutAt":null}}}"#;
        let store = AttendanceStore::load(MemoryBackend::with_value(STORAGE_KEY, raw));
        let status = store.get(1, 7);
        assert_eq!(status.checked_in_at, Some(ts(9)));
        assert_eq!(status.checked_out_at, None);
    }

    #[test]
    fn set_merges_and_keeps_previous_snapshot_intact() {
        let mut store = AttendanceStore::load(MemoryBackend::new());
        store.set(1, 7, StatusPatch::for_action(CheckAction::In, ts(9)));
        let before = store.snapshot().clone();

        let after = store
            .set(1, 7, StatusPatch::for_action(CheckAction::Out, ts(17)))
            .clone();

        assert_eq!(before[&1][&7].checked_out_at, None);
        assert_eq!(after[&1][&7].checked_in_at, Some(ts(9)));
        assert_eq!(after[&1][&7].checked_out_at, Some(ts(17)));
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut store = AttendanceStore::load(MemoryBackend::new());
        store.set(1, 7, StatusPatch::for_action(CheckAction::In, ts(9)));
        store.set(1, 7, StatusPatch::for_action(CheckAction::Out, ts(17)));
        store.set(2, 3, StatusPatch::for_action(CheckAction::In, ts(11)));
        store.set(9, 4, StatusPatch::for_action(CheckAction::Out, ts(12)));
        store.save().unwrap();

        let expected = store.snapshot().clone();
        let raw = store.backend().raw(STORAGE_KEY).unwrap().to_string();
        let reloaded = AttendanceStore::load(MemoryBackend::with_value(STORAGE_KEY, &raw));
        assert_eq!(reloaded.snapshot(), &expected);
    }

    #[test]
    fn failed_save_reports_error_and_keeps_state() {
        let mut store = AttendanceStore::load(MemoryBackend::failing());
        store.set(1, 7, StatusPatch::for_action(CheckAction::In, ts(9)));
        assert!(store.save().is_err());
        assert_eq!(store.get(1, 7).checked_in_at, Some(ts(9)));
    }
}
