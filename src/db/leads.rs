use crate::errors::{AppError, AppResult};
use crate::models::lead::SalesLead;
use chrono::NaiveDate;
use rusqlite::{Connection, Result, Row, params};

fn conversion_err(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_lead_row(row: &Row) -> Result<SalesLead> {
    let date_str: String = row.get("demo_date")?;
    let demo_date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_err(AppError::InvalidDate(date_str.clone())))?;

    Ok(SalesLead {
        id: row.get("id")?,
        company_name: row.get("company_name")?,
        contact_person: row.get("contact_person")?,
        lead_source: row.get("lead_source")?,
        assigned_to: row.get("assigned_to")?,
        status: row.get("status")?,
        demo_date,
        demo_notes: row.get("demo_notes")?,
        notes: row.get("notes")?,
        created_at: row.get("created_at")?,
    })
}

pub fn insert_lead(conn: &Connection, lead: &SalesLead) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO sales_leads
            (company_name, contact_person, lead_source, assigned_to, status,
             demo_date, demo_notes, notes, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            lead.company_name,
            lead.contact_person,
            lead.lead_source,
            lead.assigned_to,
            lead.status,
            lead.demo_date.format("%Y-%m-%d").to_string(),
            lead.demo_notes,
            lead.notes,
            lead.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn list_leads(conn: &Connection) -> AppResult<Vec<SalesLead>> {
    let mut stmt = conn.prepare("SELECT * FROM sales_leads ORDER BY created_at DESC")?;
    let rows = stmt.query_map([], map_lead_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
