//! Attendance service: the only way attendance state changes.
//!
//! Each pair moves `NotCheckedIn -> CheckedIn -> CheckedOut`. The service
//! checks the entered code, stamps the matching field and writes the state
//! through. It does not require a check-in before a check-out; that policy
//! belongs to whoever offers the actions (see `core::board::offered_action`).

use super::clock::{Clock, SystemClock};
use super::store::{AttendanceStore, StateBackend};
use super::validator::validate;
use crate::errors::AppError;
use crate::models::check_action::CheckAction;
use crate::models::check_status::{AttendanceState, CheckStatus, StatusPatch};
use crate::ui::messages::warning;

/// Outcome of a check-in/check-out attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckResult {
    Success,
    Failure { error: String },
}

impl CheckResult {
    pub fn failure(msg: impl Into<String>) -> Self {
        CheckResult::Failure { error: msg.into() }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, CheckResult::Success)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            CheckResult::Success => None,
            CheckResult::Failure { error } => Some(error),
        }
    }
}

pub struct AttendanceService<B: StateBackend, C: Clock = SystemClock> {
    store: AttendanceStore<B>,
    clock: C,
    persist_fault: Option<AppError>,
}

impl<B: StateBackend> AttendanceService<B, SystemClock> {
    pub fn new(store: AttendanceStore<B>) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<B: StateBackend, C: Clock> AttendanceService<B, C> {
    pub fn with_clock(store: AttendanceStore<B>, clock: C) -> Self {
        Self {
            store,
            clock,
            persist_fault: None,
        }
    }

    /// Validate against the op's check-in code and stamp `checked_in_at`.
    ///
    /// Repeating a successful check-in overwrites the earlier timestamp.
    pub fn check_in(
        &mut self,
        op_id: u64,
        operator_id: u64,
        entered_code: &str,
        expected_code: &str,
    ) -> CheckResult {
        self.transition(CheckAction::In, op_id, operator_id, entered_code, expected_code)
    }

    /// Validate against the op's check-out code and stamp `checked_out_at`.
    pub fn check_out(
        &mut self,
        op_id: u64,
        operator_id: u64,
        entered_code: &str,
        expected_code: &str,
    ) -> CheckResult {
        self.transition(CheckAction::Out, op_id, operator_id, entered_code, expected_code)
    }

    pub fn get_status(&self, op_id: u64, operator_id: u64) -> CheckStatus {
        self.store.get(op_id, operator_id)
    }

    pub fn snapshot(&self) -> &AttendanceState {
        self.store.snapshot()
    }

    /// Read-only access for collaborators such as exports.
    pub fn store(&self) -> &AttendanceStore<B> {
        &self.store
    }

    /// Last persistence failure, if any. The in-memory state is still
    /// authoritative when this returns `Some`.
    pub fn take_persist_fault(&mut self) -> Option<AppError> {
        self.persist_fault.take()
    }

    fn transition(
        &mut self,
        action: CheckAction,
        op_id: u64,
        operator_id: u64,
        entered_code: &str,
        expected_code: &str,
    ) -> CheckResult {
        if !validate(entered_code, expected_code) {
            return CheckResult::failure(action.invalid_code_message());
        }

        let now = self.clock.now();
        self.store
            .set(op_id, operator_id, StatusPatch::for_action(action, now));

        if let Err(e) = self.store.save() {
            self.persist_fault = Some(e);
        }

        let target = format!("op:{op_id}/operator:{operator_id}");
        let message = format!("{} at {}", action.label(), now.to_rfc3339());
        if let Err(e) = self
            .store
            .backend()
            .record_event(action.log_operation(), &target, &message)
        {
            warning(format!("Failed to write internal log: {e}"));
        }

        CheckResult::Success
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::FixedClock;
    use crate::core::store::{MemoryBackend, STORAGE_KEY};
    use chrono::{DateTime, Duration, TimeZone, Utc};
    use std::cell::Cell;

    /// Advances one minute per reading.
    struct TickingClock {
        next: Cell<DateTime<Utc>>,
    }

    impl Clock for TickingClock {
        fn now(&self) -> DateTime<Utc> {
            let t = self.next.get();
            self.next.set(t + Duration::minutes(1));
            t
        }
    }

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 0, 0).unwrap()
    }

    fn service() -> AttendanceService<MemoryBackend, TickingClock> {
        AttendanceService::with_clock(
            AttendanceStore::load(MemoryBackend::new()),
            TickingClock {
                next: Cell::new(t0()),
            },
        )
    }

    #[test]
    fn successful_flow() {
        let mut svc = service();

        assert_eq!(svc.check_in(1, 7, " AB12", "AB12"), CheckResult::Success);
        let checked_in = svc.get_status(1, 7).checked_in_at;
        assert!(checked_in.is_some());

        let res = svc.check_out(1, 7, "wrong", "XY99");
        assert_eq!(res.error(), Some("Invalid check-out code."));
        assert_eq!(svc.get_status(1, 7).checked_out_at, None);

        assert!(svc.check_out(1, 7, "XY99", "XY99").is_success());
        let status = svc.get_status(1, 7);
        assert!(status.checked_out_at.is_some());
        assert_eq!(status.checked_in_at, checked_in);
    }

    #[test]
    fn wrong_code_leaves_state_untouched() {
        let mut svc = service();
        svc.check_in(1, 7, "AB12", "AB12");
        let before = svc.snapshot().clone();

        let res = svc.check_in(1, 7, "ab12", "AB12");
        assert_eq!(res.error(), Some("Invalid check-in code."));
        let res = svc.check_in(2, 3, "", "AB12");
        assert!(!res.error().unwrap_or_default().is_empty());

        assert_eq!(svc.snapshot(), &before);
    }

    #[test]
    fn check_in_after_check_out_keeps_check_out_time() {
        let mut svc = service();
        svc.check_in(1, 7, "AB12", "AB12");
        svc.check_out(1, 7, "XY99", "XY99");
        let out = svc.get_status(1, 7).checked_out_at;
        let first_in = svc.get_status(1, 7).checked_in_at;

        assert!(svc.check_in(1, 7, "AB12", "AB12").is_success());
        let status = svc.get_status(1, 7);
        assert_eq!(status.checked_out_at, out);
        assert_ne!(status.checked_in_at, first_in);
    }

    #[test]
    fn out_of_order_check_out_is_accepted() {
        let mut svc = service();
        assert!(svc.check_out(4, 2, "XY99", "XY99").is_success());
        let status = svc.get_status(4, 2);
        assert_eq!(status.checked_in_at, None);
        assert!(status.checked_out_at.is_some());
    }

    #[test]
    fn untouched_pair_reports_both_fields_absent() {
        let svc = service();
        assert_eq!(svc.get_status(1, 7), CheckStatus::default());
        assert!(svc.snapshot().is_empty());
    }

    #[test]
    fn every_success_is_written_through() {
        let mut svc = AttendanceService::with_clock(
            AttendanceStore::load(MemoryBackend::new()),
            FixedClock(t0()),
        );
        svc.check_in(1, 7, "AB12", "AB12");

        let raw = svc.store.backend().raw(STORAGE_KEY).unwrap().to_string();
        let reloaded = AttendanceStore::load(MemoryBackend::with_value(STORAGE_KEY, &raw));
        assert_eq!(reloaded.get(1, 7).checked_in_at, Some(t0()));
        assert!(svc.take_persist_fault().is_none());
    }

    #[test]
    fn write_failure_still_succeeds_in_memory() {
        let mut svc = AttendanceService::with_clock(
            AttendanceStore::load(MemoryBackend::failing()),
            FixedClock(t0()),
        );

        assert!(svc.check_in(1, 7, "AB12", "AB12").is_success());
        assert_eq!(svc.get_status(1, 7).checked_in_at, Some(t0()));
        assert!(svc.take_persist_fault().is_some());
        assert!(svc.take_persist_fault().is_none());
    }
}
