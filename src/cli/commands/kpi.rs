use crate::cli::commands::{open_db, resolve_user};
use crate::cli::parser::{Cli, KpiCmd};
use crate::config::Config;
use crate::core::{dcr, kpi as kpi_rollup};
use crate::db::{kpi, tasks};
use crate::errors::{AppError, AppResult};
use crate::models::kpi::KpiEntry;
use crate::ui::messages::{info, success};
use crate::utils::date;

pub fn handle(cmd: &KpiCmd, cli: &Cli, cfg: &Config) -> AppResult<()> {
    match cmd {
        KpiCmd::Add {
            date: date_str,
            satisfaction,
            delivery,
            certifications,
            leads,
            dcr: dcr_value,
            escalations,
            notes,
        } => add(
            cli,
            cfg,
            date_str,
            *satisfaction,
            *delivery,
            certifications,
            *leads,
            *dcr_value,
            *escalations,
            notes,
        ),
        KpiCmd::Summary { period } => summary(cli, cfg, period.as_deref()),
    }
}

#[allow(clippy::too_many_arguments)]
fn add(
    cli: &Cli,
    cfg: &Config,
    date_str: &str,
    satisfaction: i32,
    delivery: i32,
    certifications: &str,
    leads: i32,
    dcr_value: Option<f64>,
    escalations: i32,
    notes: &str,
) -> AppResult<()> {
    let d = date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.into()))?;
    let user = resolve_user(cli, cfg);

    kpi_rollup::validate_rating("customer satisfaction", satisfaction)?;
    kpi_rollup::validate_rating("timely delivery", delivery)?;
    if let Some(v) = dcr_value {
        if !(1.0..=5.0).contains(&v) {
            return Err(AppError::Validation(format!(
                "DCR maintenance must be between 1 and 5 (got {}).",
                v
            )));
        }
    }
    if leads < 0 || escalations < 0 {
        return Err(AppError::Validation("Counts cannot be negative.".into()));
    }

    let pool = open_db(cfg)?;

    //
    // No explicit DCR value: score the day's task outcomes instead.
    //
    let dcr_final = match dcr_value {
        Some(v) => v,
        None => {
            let day_tasks = tasks::tasks_for_user_and_date(&pool.conn, &user, &d)?;
            let score = dcr::compute_score(&day_tasks);
            info(format!("DCR maintenance auto-computed from task outcomes: {:.1}", score));
            score
        }
    };

    let entry = KpiEntry::new(
        &user,
        d,
        satisfaction,
        delivery,
        certifications,
        leads,
        dcr_final,
        escalations,
        notes,
    );
    kpi::upsert_entry(&pool.conn, &entry)?;

    success(format!(
        "KPI entry recorded for {} on {} (DCR {:.1}).",
        user, d, dcr_final
    ));
    Ok(())
}

fn summary(cli: &Cli, cfg: &Config, period: Option<&str>) -> AppResult<()> {
    let user = resolve_user(cli, cfg);
    let pool = open_db(cfg)?;

    let range_dates = match period {
        Some(p) => Some(date::generate_from_period(p).map_err(AppError::InvalidDate)?),
        None => None,
    };

    let entries = match &range_dates {
        Some(dates) => match (dates.first(), dates.last()) {
            (Some(start), Some(end)) => {
                kpi::list_entries(&pool.conn, Some(&user), Some((start, end)))?
            }
            _ => Vec::new(),
        },
        None => kpi::list_entries(&pool.conn, Some(&user), None)?,
    };

    if entries.is_empty() {
        info(format!("No KPI entries found for {}.", user));
        return Ok(());
    }

    let s = kpi_rollup::summarize(&entries);

    println!();
    println!("📊 KPI summary for {} ({} entries)", user, s.entries);
    println!("   Avg customer satisfaction: {:.2}", s.avg_customer_satisfaction);
    println!("   Avg timely delivery:       {:.2}", s.avg_timely_delivery);
    println!("   Avg DCR maintenance:       {:.2}", s.avg_dcr_maintenance);
    println!("   Leads generated:           {}", s.lead_generation_total);
    println!("   Technical escalations:     {}", s.technical_escalations_total);
    println!("   Entries with certifications: {}", s.certified_entries);
    println!();
    Ok(())
}
