use crate::models::check_status::AttendanceState;
use crate::utils::date::format_stamp;
use serde::Serialize;

/// Flat attendance row, one per recorded (op, operator) pair.
#[derive(Debug, Clone, Serialize)]
pub struct AttendanceExport {
    pub op_id: u64,
    pub operator_id: u64,
    pub state: &'static str,
    pub checked_in_at: Option<String>,
    pub checked_out_at: Option<String>,
}

impl AttendanceExport {
    /// Rows ordered by op id then operator id. Timestamps stay RFC 3339 UTC
    /// unless `local` asks for local wall-clock time.
    pub fn rows(state: &AttendanceState, local: bool) -> Vec<Self> {
        let stamp = |ts: &chrono::DateTime<chrono::Utc>| {
            if local {
                format_stamp(ts)
            } else {
                ts.to_rfc3339()
            }
        };

        state
            .iter()
            .flat_map(|(op_id, roster)| {
                roster.iter().map(move |(operator_id, status)| (*op_id, *operator_id, status))
            })
            .map(|(op_id, operator_id, status)| AttendanceExport {
                op_id,
                operator_id,
                state: status.state().as_str(),
                checked_in_at: status.checked_in_at.as_ref().map(stamp),
                checked_out_at: status.checked_out_at.as_ref().map(stamp),
            })
            .collect()
    }
}
