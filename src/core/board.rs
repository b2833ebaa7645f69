//! Board presenter: search filter, roster sorting and the status/action
//! policy shown next to each operator.
//!
//! Nothing here mutates attendance. Statuses come in through a lookup
//! closure (normally `AttendanceService::get_status`).

use crate::models::check_action::CheckAction;
use crate::models::check_status::CheckStatus;
use crate::models::op::Op;
use crate::models::operator::Operator;
use crate::utils::colors::{colorize_optional, colorize_status};
use crate::utils::date::{format_op_date, format_time_range};
use crate::utils::table::{Column, Table};
use clap::ValueEnum;
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortField {
    /// First name, then last name, case-insensitive
    #[default]
    Name,
    OpsCompleted,
    Reliability,
}

impl SortField {
    pub fn from_config(s: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(s, true).ok()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortOrder {
    pub field: SortField,
    pub descending: bool,
}

/// Ops whose title, public id or any operator's full name contains the
/// query (trimmed, case-insensitive). An empty query keeps everything.
pub fn filter_ops<'a>(ops: &'a [Op], query: &str) -> Vec<&'a Op> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return ops.iter().collect();
    }
    ops.iter().filter(|op| op.matches_query(&query)).collect()
}

fn compare(a: &Operator, b: &Operator, field: SortField) -> Ordering {
    match field {
        SortField::Name => a
            .first_name
            .to_lowercase()
            .cmp(&b.first_name.to_lowercase())
            .then_with(|| a.last_name.to_lowercase().cmp(&b.last_name.to_lowercase())),
        SortField::OpsCompleted => a.ops_completed.cmp(&b.ops_completed),
        SortField::Reliability => a
            .reliability
            .partial_cmp(&b.reliability)
            .unwrap_or(Ordering::Equal),
    }
}

/// Stable sort of a roster; ties keep feed order in both directions.
pub fn sort_operators(operators: &[Operator], order: SortOrder) -> Vec<&Operator> {
    let mut sorted: Vec<&Operator> = operators.iter().collect();
    sorted.sort_by(|a, b| {
        let c = compare(a, b, order.field);
        if order.descending { c.reverse() } else { c }
    });
    sorted
}

/// Which action the board offers for a status.
///
/// Check-in is offered until a check-in is recorded; check-out only once
/// checked in and not yet out.
pub fn offered_action(status: &CheckStatus) -> Option<CheckAction> {
    if !status.is_checked_in() {
        Some(CheckAction::In)
    } else if !status.is_checked_out() {
        Some(CheckAction::Out)
    } else {
        None
    }
}

pub fn status_label(status: &CheckStatus) -> Option<&'static str> {
    if status.is_checked_out() {
        Some("Checked Out")
    } else if status.is_checked_in() {
        Some("Checked In")
    } else {
        None
    }
}

fn status_cell(status: &CheckStatus) -> String {
    let mut parts = Vec::new();
    if let Some(label) = status_label(status) {
        parts.push(colorize_status(label, false));
    }
    if let Some(action) = offered_action(status) {
        parts.push(colorize_status(action.label(), true));
    }
    parts.join(" ")
}

/// One op card: summary lines followed by the sorted roster table.
pub fn render_op<F>(op: &Op, order: SortOrder, sep: char, status_of: F) -> Vec<String>
where
    F: Fn(u64, u64) -> CheckStatus,
{
    let mut lines = vec![
        format!(
            "Public ID: {} | Operators Needed: {} | Date: {} | Time: {} | Est. Hours: {}",
            op.public_id,
            op.filled_label(),
            format_op_date(&op.op_date),
            format_time_range(&op.start_time, &op.end_time),
            op.est_total_hours
        ),
        String::new(),
    ];

    let arrow = if order.descending { "↓" } else { "↑" };
    let heading = |title: &str, field: SortField| {
        if order.field == field {
            format!("{title} {arrow}")
        } else {
            title.to_string()
        }
    };

    let mut table = Table::new(vec![
        Column::right("Id"),
        Column::left(&heading("Operator", SortField::Name)),
        Column::right(&heading("Ops Completed", SortField::OpsCompleted)),
        Column::right(&heading("Reliability", SortField::Reliability)),
        Column::left("Endorsements"),
        Column::left("Status / Actions"),
    ]);

    for operator in sort_operators(&op.operators, order) {
        let status = status_of(op.op_id, operator.id);
        table.add_row(vec![
            operator.id.to_string(),
            operator.full_name(),
            operator.ops_completed.to_string(),
            format!("{}%", operator.reliability_percent()),
            colorize_optional(&operator.endorsements.join(", ")),
            status_cell(&status),
        ]);
    }

    if op.operators.is_empty() {
        lines.push("No operators assigned.".to_string());
    } else {
        lines.extend(table.render(sep));
    }
    lines
}
