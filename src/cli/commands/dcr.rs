use crate::cli::commands::{open_db, resolve_user};
use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::dcr;
use crate::db::tasks;
use crate::errors::{AppError, AppResult};
use crate::utils::colors::{RESET, color_for_score};
use crate::utils::date;

pub fn handle(date_str: &str, cli: &Cli, cfg: &Config) -> AppResult<()> {
    let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;
    let user = resolve_user(cli, cfg);

    let pool = open_db(cfg)?;
    let day_tasks = tasks::tasks_for_user_and_date(&pool.conn, &user, &d)?;
    let insights = dcr::insights(&day_tasks);

    println!();
    println!("🎯 DCR score for {} on {}", user, d);
    println!(
        "   Score: {}{:.1}{} / 5.0",
        color_for_score(insights.score),
        insights.score,
        RESET
    );
    println!("   Tasks worked:   {}", insights.total_tasks);
    println!("   Completed:      {}", insights.completed);
    println!("   Overdue:        {}", insights.overdue);
    println!("   Overdue minutes: {}", insights.total_overdue_minutes);
    println!("   {}", insights.message);
    println!();
    Ok(())
}
