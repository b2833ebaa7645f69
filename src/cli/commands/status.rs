use super::open_service;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::board::status_label;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::colors::colorize_in_out;
use crate::utils::date::format_stamp;
use crate::utils::table::{Column, Table};

/// Handle the `status` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { op_id } = cmd {
        let service = open_service(cfg)?;

        let mut table = Table::new(vec![
            Column::right("Op"),
            Column::right("Operator"),
            Column::left("Status"),
            Column::left("In At"),
            Column::left("Out At"),
        ]);

        for (op, roster) in service.snapshot() {
            if op_id.is_some_and(|wanted| wanted != *op) {
                continue;
            }
            for (operator, status) in roster {
                let stamp = |ts: Option<&chrono::DateTime<chrono::Utc>>| {
                    ts.map(format_stamp).unwrap_or_else(|| "-".to_string())
                };
                table.add_row(vec![
                    op.to_string(),
                    operator.to_string(),
                    status_label(status).unwrap_or("Not Checked In").to_string(),
                    colorize_in_out(&stamp(status.checked_in_at.as_ref()), true),
                    colorize_in_out(&stamp(status.checked_out_at.as_ref()), false),
                ]);
            }
        }

        if table.rows.is_empty() {
            info("No attendance recorded.");
            return Ok(());
        }

        for line in table.render(cfg.separator()) {
            println!("{line}");
        }
    }

    Ok(())
}
