use crate::errors::{AppError, AppResult};
use crate::models::attendance::AttendanceStatus;
use crate::models::category::ActivityCategory;
use crate::models::report::DailyReport;
use crate::models::time_entry::TimeEntry;
use chrono::{NaiveDate, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn conversion_err(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

pub fn map_report_row(row: &Row) -> Result<DailyReport> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_err(AppError::InvalidDate(date_str.clone())))?;

    let attendance: Option<String> = row.get("attendance")?;
    let attendance = match attendance.as_deref() {
        Some(s) if !s.is_empty() => Some(
            AttendanceStatus::from_db_str(s)
                .ok_or_else(|| conversion_err(AppError::InvalidAttendance(s.to_string())))?,
        ),
        _ => None,
    };

    Ok(DailyReport {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        date,
        attendance,
        general_notes: row.get("general_notes")?,
        submitted_at: row.get("submitted_at")?,
        entries: Vec::new(), // loaded separately
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

pub fn map_activity_row(row: &Row) -> Result<TimeEntry> {
    let category_str: String = row.get("category")?;
    let category = ActivityCategory::from_db_str(&category_str)
        .ok_or_else(|| conversion_err(AppError::InvalidCategory(category_str.clone())))?;

    let from_str: String = row.get("from_time")?;
    let from_time = NaiveTime::parse_from_str(&from_str, "%H:%M")
        .map_err(|_| conversion_err(AppError::InvalidTime(from_str.clone())))?;

    let to_str: String = row.get("to_time")?;
    let to_time = NaiveTime::parse_from_str(&to_str, "%H:%M")
        .map_err(|_| conversion_err(AppError::InvalidTime(to_str.clone())))?;

    Ok(TimeEntry {
        id: row.get("id")?,
        report_id: row.get("report_id")?,
        category,
        from_time,
        to_time,
        hours: row.get("hours")?,
        notes: row.get("notes")?,
        is_billable: row.get::<_, i32>("is_billable")? == 1,
        created_at: row.get("created_at")?,
    })
}

pub fn load_activities(conn: &Connection, report_id: i64) -> AppResult<Vec<TimeEntry>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM report_activities
         WHERE report_id = ?1
         ORDER BY from_time ASC, id ASC",
    )?;

    let rows = stmt.query_map([report_id], map_activity_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Load one (user, date) report with its activities, if any.
pub fn get_report(conn: &Connection, user_id: &str, date: &NaiveDate) -> AppResult<Option<DailyReport>> {
    let report = conn
        .query_row(
            "SELECT * FROM daily_reports WHERE user_id = ?1 AND date = ?2",
            params![user_id, date.format("%Y-%m-%d").to_string()],
            map_report_row,
        )
        .optional()?;

    match report {
        Some(mut r) => {
            r.entries = load_activities(conn, r.id)?;
            Ok(Some(r))
        }
        None => Ok(None),
    }
}

/// Create-or-replace keyed on (user_id, date). Returns the row id.
pub fn upsert_report(conn: &Connection, report: &DailyReport) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO daily_reports
            (user_id, date, attendance, general_notes, submitted_at, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)
         ON CONFLICT(user_id, date) DO UPDATE SET
            attendance = excluded.attendance,
            general_notes = excluded.general_notes,
            submitted_at = excluded.submitted_at,
            updated_at = excluded.updated_at",
        params![
            report.user_id,
            report.date_str(),
            report.attendance.map(|a| a.to_db_str()),
            report.general_notes,
            report.submitted_at,
            report.created_at,
            chrono::Local::now().to_rfc3339(),
        ],
    )?;

    let id: i64 = conn.query_row(
        "SELECT id FROM daily_reports WHERE user_id = ?1 AND date = ?2",
        params![report.user_id, report.date_str()],
        |row| row.get(0),
    )?;
    Ok(id)
}

pub fn insert_activity(conn: &Connection, report_id: i64, entry: &TimeEntry) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO report_activities
            (report_id, category, from_time, to_time, hours, notes, is_billable, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            report_id,
            entry.category.to_db_str(),
            entry.from_str(),
            entry.to_str(),
            entry.hours,
            entry.notes,
            if entry.is_billable { 1 } else { 0 },
            entry.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn delete_activity(conn: &Connection, activity_id: i64) -> AppResult<()> {
    conn.execute("DELETE FROM report_activities WHERE id = ?", [activity_id])?;
    Ok(())
}

/// Load every report in the store, optionally filtered by user.
pub fn load_all_reports(conn: &Connection, user_id: Option<&str>) -> AppResult<Vec<DailyReport>> {
    let mut out = Vec::new();
    match user_id {
        Some(user) => {
            let mut stmt =
                conn.prepare("SELECT * FROM daily_reports WHERE user_id = ?1 ORDER BY date ASC")?;
            let rows = stmt.query_map([user], map_report_row)?;
            for r in rows {
                out.push(r?);
            }
        }
        None => {
            let mut stmt = conn.prepare("SELECT * FROM daily_reports ORDER BY date ASC")?;
            let rows = stmt.query_map([], map_report_row)?;
            for r in rows {
                out.push(r?);
            }
        }
    }
    for report in &mut out {
        report.entries = load_activities(conn, report.id)?;
    }
    Ok(out)
}

/// Load all reports for a set of dates, optionally filtered by user,
/// ordered by date. Activities come attached.
pub fn load_reports_for_dates(
    conn: &Connection,
    user_id: Option<&str>,
    dates: &[NaiveDate],
) -> AppResult<Vec<DailyReport>> {
    if dates.is_empty() {
        return Ok(Vec::new());
    }

    let date_strings: Vec<String> = dates.iter().map(|d| d.format("%Y-%m-%d").to_string()).collect();
    let placeholders = vec!["?"; date_strings.len()].join(",");

    let (sql, bind_user) = match user_id {
        Some(_) => (
            format!(
                "SELECT * FROM daily_reports WHERE user_id = ? AND date IN ({}) ORDER BY date ASC",
                placeholders
            ),
            true,
        ),
        None => (
            format!(
                "SELECT * FROM daily_reports WHERE date IN ({}) ORDER BY date ASC",
                placeholders
            ),
            false,
        ),
    };

    let mut bindings: Vec<&dyn rusqlite::ToSql> = Vec::new();
    let user_owned = user_id.map(|u| u.to_string());
    if bind_user {
        bindings.push(user_owned.as_ref().unwrap());
    }
    for s in &date_strings {
        bindings.push(s);
    }

    let mut stmt = conn.prepare(&sql)?;
    let rows = stmt.query_map(rusqlite::params_from_iter(bindings), map_report_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    for report in &mut out {
        report.entries = load_activities(conn, report.id)?;
    }
    Ok(out)
}
