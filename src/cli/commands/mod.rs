pub mod config;
pub mod db;
pub mod dcr;
pub mod export;
pub mod init;
pub mod kpi;
pub mod leads;
pub mod log;
pub mod report;
pub mod task;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Open the configured database and make sure the schema is current.
pub(crate) fn open_db(cfg: &Config) -> AppResult<DbPool> {
    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;
    Ok(pool)
}

/// The acting person: --user flag wins, otherwise the configured default.
pub(crate) fn resolve_user(cli: &Cli, cfg: &Config) -> String {
    cli.user.clone().unwrap_or_else(|| cfg.default_user.clone())
}
