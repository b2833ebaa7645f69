use super::open_service;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::board::{SortOrder, filter_ops, render_op};
use crate::core::feed::FeedLoader;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};

/// Handle the `list` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { search, sort, desc } = cmd {
        let ops = FeedLoader::from_config(cfg).load()?;
        let service = open_service(cfg)?;

        let order = SortOrder {
            field: sort.unwrap_or_else(|| cfg.sort_field()),
            descending: *desc,
        };
        let query = search.as_deref().unwrap_or("");
        let visible = filter_ops(&ops, query);

        if ops.is_empty() {
            info("The feed returned no Ops.");
            return Ok(());
        }
        if visible.is_empty() {
            info(format!("No results for \"{}\".", query));
            return Ok(());
        }

        for op in visible {
            header(format!("{} (op {})", op.op_title, op.op_id));
            for line in render_op(op, order, cfg.separator(), |op_id, operator_id| {
                service.get_status(op_id, operator_id)
            }) {
                println!("{line}");
            }
            println!();
        }
    }

    Ok(())
}
