use super::check_action::CheckAction;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Attendance record of one operator on one op.
///
/// Both fields are optional: an absent field (or an explicit JSON `null`)
/// means the transition never happened. Absent fields are not written back.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked_in_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub checked_out_at: Option<DateTime<Utc>>,
}

/// Position of a pair in the `NotCheckedIn -> CheckedIn -> CheckedOut` flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CheckState {
    NotCheckedIn,
    CheckedIn,
    CheckedOut,
}

impl CheckState {
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckState::NotCheckedIn => "not_checked_in",
            CheckState::CheckedIn => "checked_in",
            CheckState::CheckedOut => "checked_out",
        }
    }
}

/// Partial update of a [`CheckStatus`]: `Some` overwrites, `None` keeps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusPatch {
    pub checked_in_at: Option<DateTime<Utc>>,
    pub checked_out_at: Option<DateTime<Utc>>,
}

impl StatusPatch {
    pub fn for_action(action: CheckAction, at: DateTime<Utc>) -> Self {
        match action {
            CheckAction::In => Self {
                checked_in_at: Some(at),
                checked_out_at: None,
            },
            CheckAction::Out => Self {
                checked_in_at: None,
                checked_out_at: Some(at),
            },
        }
    }
}

impl CheckStatus {
    pub fn is_checked_in(&self) -> bool {
        self.checked_in_at.is_some()
    }

    pub fn is_checked_out(&self) -> bool {
        self.checked_out_at.is_some()
    }

    /// A recorded check-out wins even if check-in was never recorded.
    pub fn state(&self) -> CheckState {
        if self.is_checked_out() {
            CheckState::CheckedOut
        } else if self.is_checked_in() {
            CheckState::CheckedIn
        } else {
            CheckState::NotCheckedIn
        }
    }

    pub fn merged(&self, patch: &StatusPatch) -> CheckStatus {
        CheckStatus {
            checked_in_at: patch.checked_in_at.or(self.checked_in_at),
            checked_out_at: patch.checked_out_at.or(self.checked_out_at),
        }
    }
}

/// Operator id -> record, for a single op.
pub type OpAttendance = BTreeMap<u64, CheckStatus>;

/// Op id -> operator id -> record. The whole persisted attendance state.
pub type AttendanceState = BTreeMap<u64, OpAttendance>;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn ts(h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, h, 0, 0).unwrap()
    }

    #[test]
    fn null_and_missing_fields_decode_as_absent() {
        let s: CheckStatus = serde_json::from_str(r#"{"checkedInAt":null}"#).unwrap();
        assert_eq!(s, CheckStatus::default());

        let s: CheckStatus = serde_json::from_str("{}").unwrap();
        assert_eq!(s.state(), CheckState::NotCheckedIn);
    }

    #[test]
    fn decodes_browser_iso_timestamps() {
        let s: CheckStatus =
            serde_json::from_str(r#"{"checkedInAt":"2025-03-14T09:00:00.000Z"}"#).unwrap();
        assert_eq!(s.checked_in_at, Some(ts(9)));
        assert_eq!(s.state(), CheckState::CheckedIn);
    }

    #[test]
    fn absent_fields_are_not_serialized() {
        let s = CheckStatus {
            checked_in_at: Some(ts(9)),
            checked_out_at: None,
        };
        let json = serde_json::to_string(&s).unwrap();
        assert!(json.contains("checkedInAt"));
        assert!(!json.contains("checkedOutAt"));
    }

    #[test]
    fn merge_keeps_fields_the_patch_leaves_out() {
        let s = CheckStatus {
            checked_in_at: Some(ts(9)),
            checked_out_at: Some(ts(17)),
        };
        let merged = s.merged(&StatusPatch::for_action(CheckAction::In, ts(10)));
        assert_eq!(merged.checked_in_at, Some(ts(10)));
        assert_eq!(merged.checked_out_at, Some(ts(17)));
    }

    #[test]
    fn checked_out_wins_over_missing_check_in() {
        let s = CheckStatus {
            checked_in_at: None,
            checked_out_at: Some(ts(17)),
        };
        assert_eq!(s.state(), CheckState::CheckedOut);
    }
}
