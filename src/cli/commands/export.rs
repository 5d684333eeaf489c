use crate::cli::commands::{open_db, resolve_user};
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::reports;
use crate::errors::{AppError, AppResult};
use crate::export::{self, ExportFormat};
use crate::ui::messages::info;
use crate::utils::date;

pub fn handle(
    format: &ExportFormat,
    file: &str,
    period: Option<&str>,
    cli: &Cli,
    cfg: &Config,
) -> AppResult<()> {
    let user = resolve_user(cli, cfg);
    let pool = open_db(cfg)?;

    let report_rows = match period {
        Some(p) => {
            let dates = date::generate_from_period(p).map_err(AppError::InvalidDate)?;
            reports::load_reports_for_dates(&pool.conn, Some(&user), &dates)?
        }
        None => reports::load_all_reports(&pool.conn, Some(&user))?,
    };

    if report_rows.is_empty() {
        info("Nothing to export.");
        return Ok(());
    }

    export::export_reports(format, file, &report_rows)
}
