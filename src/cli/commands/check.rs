use super::open_service;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::board::{offered_action, status_label};
use crate::core::feed::FeedLoader;
use crate::core::service::CheckResult;
use crate::errors::{AppError, AppResult};
use crate::models::check_action::CheckAction;
use crate::models::op::Op;
use crate::ui::messages::{success, warning};
use crate::utils::date::format_stamp;
use std::io::{self, BufRead, Write};

/// Ask for the code on stdin, the terminal stand-in for the code dialog.
fn prompt_code(action: CheckAction, op: &Op) -> AppResult<String> {
    println!("{} for {}", action.label(), op.op_title);
    print!("Code: ");
    io::stdout().flush().ok();

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

/// Handle `checkin` / `checkout`
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let (action, op_id, operator_id, code, force) = match cmd {
        Commands::Checkin {
            op_id,
            operator_id,
            code,
            force,
        } => (CheckAction::In, *op_id, *operator_id, code, *force),
        Commands::Checkout {
            op_id,
            operator_id,
            code,
            force,
        } => (CheckAction::Out, *op_id, *operator_id, code, *force),
        _ => return Ok(()),
    };

    let ops = FeedLoader::from_config(cfg).load()?;
    let op = ops
        .iter()
        .find(|o| o.op_id == op_id)
        .ok_or(AppError::UnknownOp(op_id))?;
    let operator = op
        .find_operator(operator_id)
        .ok_or(AppError::UnknownOperator { op_id, operator_id })?;

    let mut service = open_service(cfg)?;

    let current = service.get_status(op_id, operator_id);
    if !force && offered_action(&current) != Some(action) {
        return Err(AppError::NotOffered(format!(
            "{} is not available for {} ({}).",
            action.label(),
            operator.full_name(),
            status_label(&current).unwrap_or("Not Checked In")
        )));
    }

    let entered = match code {
        Some(c) => c.clone(),
        None => prompt_code(action, op)?,
    };
    if entered.trim().is_empty() {
        return Err(AppError::EmptyCode);
    }

    let expected = op.expected_code(action);
    let result = match action {
        CheckAction::In => service.check_in(op_id, operator_id, &entered, expected),
        CheckAction::Out => service.check_out(op_id, operator_id, &entered, expected),
    };

    if let Some(fault) = service.take_persist_fault() {
        warning(format!(
            "Attendance was recorded for this session but could not be saved: {fault}"
        ));
    }

    match result {
        CheckResult::Success => {
            let status = service.get_status(op_id, operator_id);
            let at = match action {
                CheckAction::In => status.checked_in_at,
                CheckAction::Out => status.checked_out_at,
            };
            success(format!(
                "{} {} on {} ({}) at {}",
                status_label(&status).unwrap_or(action.label()),
                operator.full_name(),
                op.op_title,
                op.public_id,
                at.as_ref().map(format_stamp).unwrap_or_default()
            ));
            Ok(())
        }
        CheckResult::Failure { error } => Err(AppError::CheckRejected(error)),
    }
}
