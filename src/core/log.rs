use crate::db::log::{LogEntry, load_entries};
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::info;
use crate::utils::table::visible_width;
use ansi_term::Colour;

const MAX_TARGET_WIDTH: usize = 60;

/// Color of the operation word in the printed log.
fn color_for_operation(op: &str) -> Colour {
    match op {
        "check_in" => Colour::Green,
        "check_out" => Colour::Red,
        "export" => Colour::Blue,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// `operation (target)` with only the operation colored, cut to
/// [`MAX_TARGET_WIDTH`] visible characters.
fn op_target_cell(entry: &LogEntry) -> String {
    let color = color_for_operation(&entry.operation);
    let plain = if entry.target.is_empty() {
        entry.operation.clone()
    } else {
        format!("{} ({})", entry.operation, entry.target)
    };

    let visible = if plain.chars().count() > MAX_TARGET_WIDTH {
        let mut s: String = plain.chars().take(MAX_TARGET_WIDTH - 3).collect();
        s.push_str("...");
        s
    } else {
        plain
    };

    match visible.split_once(' ') {
        Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
        None => color.paint(visible.as_str()).to_string(),
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &DbPool) -> AppResult<()> {
        let entries = load_entries(&pool.conn)?;
        if entries.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let cells: Vec<String> = entries.iter().map(op_target_cell).collect();
        let op_w = cells.iter().map(|c| visible_width(c)).max().unwrap_or(10);
        let id_w = entries
            .iter()
            .map(|e| e.id.to_string().len())
            .max()
            .unwrap_or(1);
        let date_w = entries.iter().map(|e| e.date.len()).max().unwrap_or(10);

        println!("📜 Internal log:\n");

        for (entry, cell) in entries.iter().zip(&cells) {
            let padding = " ".repeat(op_w.saturating_sub(visible_width(cell)));
            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                entry.id,
                entry.date,
                cell,
                padding,
                entry.message,
                id_w = id_w,
                date_w = date_w
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::table::strip_ansi;

    fn entry(operation: &str, target: &str) -> LogEntry {
        LogEntry {
            id: 1,
            date: "2025-03-14T09:00:00Z".into(),
            operation: operation.into(),
            target: target.into(),
            message: String::new(),
        }
    }

    #[test]
    fn long_targets_are_truncated_on_visible_text() {
        let cell = op_target_cell(&entry("check_in", &"x".repeat(100)));
        let visible = strip_ansi(&cell);
        assert_eq!(visible.chars().count(), MAX_TARGET_WIDTH);
        assert!(visible.starts_with("check_in ("));
        assert!(visible.ends_with("..."));
    }

    #[test]
    fn bare_operation_has_no_target_suffix() {
        assert_eq!(strip_ansi(&op_target_cell(&entry("init", ""))), "init");
    }
}
