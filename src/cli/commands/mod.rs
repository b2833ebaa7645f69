pub mod check;
pub mod config;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod status;

use crate::config::Config;
use crate::core::service::AttendanceService;
use crate::core::store::AttendanceStore;
use crate::db::initialize::open_db;
use crate::db::kv::SqliteBackend;
use crate::errors::AppResult;

/// The one attendance service of this process, backed by the configured DB.
pub(crate) fn open_service(cfg: &Config) -> AppResult<AttendanceService<SqliteBackend>> {
    let pool = open_db(&cfg.database)?;
    let store = AttendanceStore::load(SqliteBackend::new(pool));
    Ok(AttendanceService::new(store))
}
