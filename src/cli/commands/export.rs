use super::open_service;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        local,
        force,
    } = cmd
    {
        let service = open_service(cfg)?;
        ExportLogic::export(service.store(), *format, file, *local, *force)?;
    }
    Ok(())
}
