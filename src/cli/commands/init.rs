use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::open_db;
use crate::db::log;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (and the config file, unless `--test`)
///  - the SQLite database with all pending migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;

    println!("⚙️  Initializing opsboard…");
    println!("🗄️  Database   : {}", &db_path);

    let pool = open_db(&db_path)?;

    if let Err(e) = log::oblog(
        &pool.conn,
        "init",
        "",
        &format!("Database initialized at {}", &db_path),
    ) {
        warning(format!("Failed to write internal log: {e}"));
    }

    success(format!("Database initialized at {}", &db_path));
    Ok(())
}
