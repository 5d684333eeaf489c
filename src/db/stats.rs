use crate::db::pool::DbPool;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_mb = (file_size as f64) / (1024.0 * 1024.0);

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} MB", CYAN, RESET, file_mb);

    //
    // 2) RECORD COUNTS
    //
    let reports: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM daily_reports", [], |row| row.get(0))?;
    let activities: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM report_activities", [], |row| row.get(0))?;
    let tasks: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM tasks", [], |row| row.get(0))?;
    let kpi: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM kpi_entries", [], |row| row.get(0))?;
    let leads: i64 = pool
        .conn
        .query_row("SELECT COUNT(*) FROM sales_leads", [], |row| row.get(0))?;

    println!("{}• Daily reports:{} {}{}{}", CYAN, RESET, GREEN, reports, RESET);
    println!("{}• Activities:{}    {}{}{}", CYAN, RESET, GREEN, activities, RESET);
    println!("{}• Tasks:{}         {}{}{}", CYAN, RESET, GREEN, tasks, RESET);
    println!("{}• KPI entries:{}   {}{}{}", CYAN, RESET, GREEN, kpi, RESET);
    println!("{}• Sales leads:{}   {}{}{}", CYAN, RESET, GREEN, leads, RESET);

    //
    // 3) DATE RANGE OF REPORTS
    //
    let first_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM daily_reports ORDER BY date ASC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let last_date: Option<String> = pool
        .conn
        .query_row(
            "SELECT date FROM daily_reports ORDER BY date DESC LIMIT 1",
            [],
            |row| row.get(0),
        )
        .optional()?;

    let fmt_first = first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Report range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    println!();
    Ok(())
}
