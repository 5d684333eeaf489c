use crate::errors::{AppError, AppResult};
use crate::models::kpi::KpiEntry;
use chrono::NaiveDate;
use rusqlite::{Connection, Result, Row, params};

fn conversion_err(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_kpi_row(row: &Row) -> Result<KpiEntry> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_err(AppError::InvalidDate(date_str.clone())))?;

    Ok(KpiEntry {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        date,
        customer_satisfaction: row.get("customer_satisfaction")?,
        timely_delivery: row.get("timely_delivery")?,
        certifications: row.get("certifications")?,
        lead_generation: row.get("lead_generation")?,
        dcr_maintenance: row.get("dcr_maintenance")?,
        technical_escalations: row.get("technical_escalations")?,
        notes: row.get("notes")?,
        created_at: row.get("created_at")?,
    })
}

/// Full-row replace keyed on (user_id, date). Last write wins.
pub fn upsert_entry(conn: &Connection, entry: &KpiEntry) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO kpi_entries
            (user_id, date, customer_satisfaction, timely_delivery, certifications,
             lead_generation, dcr_maintenance, technical_escalations, notes, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
         ON CONFLICT(user_id, date) DO UPDATE SET
            customer_satisfaction = excluded.customer_satisfaction,
            timely_delivery = excluded.timely_delivery,
            certifications = excluded.certifications,
            lead_generation = excluded.lead_generation,
            dcr_maintenance = excluded.dcr_maintenance,
            technical_escalations = excluded.technical_escalations,
            notes = excluded.notes",
        params![
            entry.user_id,
            entry.date.format("%Y-%m-%d").to_string(),
            entry.customer_satisfaction,
            entry.timely_delivery,
            entry.certifications,
            entry.lead_generation,
            entry.dcr_maintenance,
            entry.technical_escalations,
            entry.notes,
            entry.created_at,
        ],
    )?;

    let id: i64 = conn.query_row(
        "SELECT id FROM kpi_entries WHERE user_id = ?1 AND date = ?2",
        params![entry.user_id, entry.date.format("%Y-%m-%d").to_string()],
        |row| row.get(0),
    )?;
    Ok(id)
}

/// Load entries over an optional date window, optionally per user,
/// newest first.
pub fn list_entries(
    conn: &Connection,
    user_id: Option<&str>,
    range: Option<(&NaiveDate, &NaiveDate)>,
) -> AppResult<Vec<KpiEntry>> {
    let mut sql = String::from("SELECT * FROM kpi_entries WHERE 1=1");
    let mut bindings: Vec<String> = Vec::new();

    if let Some(user) = user_id {
        sql.push_str(" AND user_id = ?");
        bindings.push(user.to_string());
    }
    if let Some((start, end)) = range {
        sql.push_str(" AND date >= ? AND date <= ?");
        bindings.push(start.format("%Y-%m-%d").to_string());
        bindings.push(end.format("%Y-%m-%d").to_string());
    }
    sql.push_str(" ORDER BY date DESC");

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(bindings.iter()), map_kpi_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
