use super::check_action::CheckAction;
use super::operator::Operator;
use serde::{Deserialize, Serialize};

/// A work assignment as delivered by the feed.
///
/// Only `op_id`, the two codes and the operator ids drive attendance; the
/// remaining fields are shown on the board and default when missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Op {
    pub op_id: u64,
    #[serde(default)]
    pub public_id: String,
    #[serde(default)]
    pub op_title: String,
    #[serde(default)]
    pub op_date: String,
    #[serde(default)]
    pub filled_quantity: u32,
    #[serde(default)]
    pub operators_needed: u32,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub est_total_hours: f64,
    #[serde(default)]
    pub check_in_code: String,
    #[serde(default)]
    pub check_out_code: String,
    #[serde(default)]
    pub check_in_expiration_time: String,
    #[serde(default)]
    pub check_out_expiration_time: String,
    #[serde(default)]
    pub operators: Vec<Operator>,
}

impl Op {
    pub fn filled_label(&self) -> String {
        format!("{}/{}", self.filled_quantity, self.operators_needed)
    }

    pub fn find_operator(&self, operator_id: u64) -> Option<&Operator> {
        self.operators.iter().find(|o| o.id == operator_id)
    }

    pub fn expected_code(&self, action: CheckAction) -> &str {
        match action {
            CheckAction::In => &self.check_in_code,
            CheckAction::Out => &self.check_out_code,
        }
    }

    /// `query` must already be trimmed and lowercased.
    pub fn matches_query(&self, query: &str) -> bool {
        self.op_title.to_lowercase().contains(query)
            || self.public_id.to_lowercase().contains(query)
            || self
                .operators
                .iter()
                .any(|o| o.full_name().to_lowercase().contains(query))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "opId": 1,
        "publicId": "OP-0001",
        "opTitle": "Forklift Loading",
        "opDate": "2025-03-14",
        "filledQuantity": 2,
        "operatorsNeeded": 3,
        "startTime": "2025-03-14T08:00:00",
        "endTime": "2025-03-14T16:30:00",
        "estTotalHours": 8.5,
        "checkInCode": "AB12",
        "checkOutCode": "XY99",
        "checkInExpirationTime": "2025-03-14T09:00:00",
        "checkOutExpirationTime": "2025-03-14T17:30:00",
        "operators": [
            {"id": 7, "firstName": "Dana", "lastName": "Reyes", "opsCompleted": 12,
             "reliability": 0.876, "endorsements": ["Forklift"]}
        ]
    }"#;

    #[test]
    fn decodes_camel_case_feed_record() {
        let op: Op = serde_json::from_str(SAMPLE).unwrap();
        assert_eq!(op.op_id, 1);
        assert_eq!(op.expected_code(CheckAction::In), "AB12");
        assert_eq!(op.expected_code(CheckAction::Out), "XY99");
        assert_eq!(op.filled_label(), "2/3");

        let operator = op.find_operator(7).unwrap();
        assert_eq!(operator.full_name(), "Dana Reyes");
        assert_eq!(operator.reliability_percent(), 88);
        assert!(op.find_operator(8).is_none());
    }

    #[test]
    fn display_fields_are_optional() {
        let op: Op = serde_json::from_str(r#"{"opId": 5}"#).unwrap();
        assert_eq!(op.op_id, 5);
        assert!(op.operators.is_empty());
        assert_eq!(op.check_in_code, "");
    }

    #[test]
    fn query_matches_title_public_id_and_operator_name() {
        let op: Op = serde_json::from_str(SAMPLE).unwrap();
        assert!(op.matches_query("forklift"));
        assert!(op.matches_query("op-0001"));
        assert!(op.matches_query("dana reyes"));
        assert!(!op.matches_query("welding"));
    }
}
