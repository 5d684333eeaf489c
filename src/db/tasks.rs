use crate::errors::{AppError, AppResult};
use crate::models::category::ActivityCategory;
use crate::models::task::{DATETIME_FMT, Priority, Task, TaskComment, TaskStatus};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn conversion_err(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_optional_datetime(s: Option<String>) -> Result<Option<NaiveDateTime>> {
    match s {
        Some(v) if !v.is_empty() => NaiveDateTime::parse_from_str(&v, DATETIME_FMT)
            .map(Some)
            .map_err(|_| conversion_err(AppError::InvalidTime(v))),
        _ => Ok(None),
    }
}

pub fn map_task_row(row: &Row) -> Result<Task> {
    let priority_str: String = row.get("priority")?;
    let priority = Priority::from_db_str(&priority_str)
        .ok_or_else(|| conversion_err(AppError::InvalidPriority(priority_str.clone())))?;

    let status_str: String = row.get("status")?;
    let status = TaskStatus::from_db_str(&status_str)
        .ok_or_else(|| conversion_err(AppError::InvalidStatus(status_str.clone())))?;

    let category_str: String = row.get("category")?;
    let category = ActivityCategory::from_db_str(&category_str)
        .ok_or_else(|| conversion_err(AppError::InvalidCategory(category_str.clone())))?;

    let due_date_str: String = row.get("due_date")?;
    let due_date = NaiveDate::parse_from_str(&due_date_str, "%Y-%m-%d")
        .map_err(|_| conversion_err(AppError::InvalidDate(due_date_str.clone())))?;

    let due_time: Option<String> = row.get("due_time")?;
    let due_time = match due_time.as_deref() {
        Some(s) if !s.is_empty() => Some(
            NaiveTime::parse_from_str(s, "%H:%M")
                .map_err(|_| conversion_err(AppError::InvalidTime(s.to_string())))?,
        ),
        _ => None,
    };

    let tags_json: String = row.get("tags")?;
    let tags: Vec<String> = serde_json::from_str(&tags_json).unwrap_or_default();

    Ok(Task {
        id: row.get("id")?,
        title: row.get("title")?,
        description: row.get("description")?,
        assignee: row.get("assignee")?,
        assigned_by: row.get("assigned_by")?,
        priority,
        status,
        billable: row.get::<_, i32>("billable")? == 1,
        category,
        client: row.get("client")?,
        due_date,
        due_time,
        estimated_hours: row.get("estimated_hours")?,
        actual_hours: row.get("actual_hours")?,
        tags,
        started_at: parse_optional_datetime(row.get("started_at")?)?,
        completed_at: parse_optional_datetime(row.get("completed_at")?)?,
        is_overdue: row.get::<_, i32>("is_overdue")? == 1,
        overdue_minutes: row.get("overdue_minutes")?,
        escalation_reason: row.get("escalation_reason")?,
        comments: Vec::new(), // loaded separately
        created_at: row.get("created_at")?,
        updated_at: row.get("updated_at")?,
    })
}

fn fmt_optional_datetime(dt: Option<NaiveDateTime>) -> Option<String> {
    dt.map(|d| d.format(DATETIME_FMT).to_string())
}

pub fn insert_task(conn: &Connection, task: &Task) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO tasks
            (title, description, assignee, assigned_by, priority, status, billable,
             category, client, due_date, due_time, estimated_hours, actual_hours,
             tags, started_at, completed_at, is_overdue, overdue_minutes,
             escalation_reason, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14,
                 ?15, ?16, ?17, ?18, ?19, ?20, ?21)",
        params![
            task.title,
            task.description,
            task.assignee,
            task.assigned_by,
            task.priority.to_db_str(),
            task.status.to_db_str(),
            if task.billable { 1 } else { 0 },
            task.category.to_db_str(),
            task.client,
            task.due_date.format("%Y-%m-%d").to_string(),
            task.due_time.map(|t| t.format("%H:%M").to_string()),
            task.estimated_hours,
            task.actual_hours,
            serde_json::to_string(&task.tags).unwrap_or_else(|_| "[]".into()),
            fmt_optional_datetime(task.started_at),
            fmt_optional_datetime(task.completed_at),
            if task.is_overdue { 1 } else { 0 },
            task.overdue_minutes,
            task.escalation_reason,
            task.created_at,
            task.updated_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Update a task (all mutable fields; id fixed).
pub fn update_task(conn: &Connection, task: &Task) -> AppResult<()> {
    conn.execute(
        "UPDATE tasks
         SET title = ?1, description = ?2, assignee = ?3, priority = ?4,
             status = ?5, client = ?6, due_date = ?7, due_time = ?8,
             estimated_hours = ?9, actual_hours = ?10, tags = ?11,
             started_at = ?12, completed_at = ?13, is_overdue = ?14,
             overdue_minutes = ?15, escalation_reason = ?16, updated_at = ?17
         WHERE id = ?18",
        params![
            task.title,
            task.description,
            task.assignee,
            task.priority.to_db_str(),
            task.status.to_db_str(),
            task.client,
            task.due_date.format("%Y-%m-%d").to_string(),
            task.due_time.map(|t| t.format("%H:%M").to_string()),
            task.estimated_hours,
            task.actual_hours,
            serde_json::to_string(&task.tags).unwrap_or_else(|_| "[]".into()),
            fmt_optional_datetime(task.started_at),
            fmt_optional_datetime(task.completed_at),
            if task.is_overdue { 1 } else { 0 },
            task.overdue_minutes,
            task.escalation_reason,
            chrono::Local::now().to_rfc3339(),
            task.id,
        ],
    )?;
    Ok(())
}

pub fn get_task(conn: &Connection, id: i64) -> AppResult<Task> {
    let task = conn
        .query_row("SELECT * FROM tasks WHERE id = ?1", [id], map_task_row)
        .optional()?;

    match task {
        Some(mut t) => {
            t.comments = load_comments(conn, t.id)?;
            Ok(t)
        }
        None => Err(AppError::NoSuchTask(id)),
    }
}

/// List tasks, newest first, optionally filtered by assignee.
pub fn list_tasks(conn: &Connection, assignee: Option<&str>) -> AppResult<Vec<Task>> {
    let mut out = Vec::new();
    match assignee {
        Some(person) => {
            let mut stmt =
                conn.prepare("SELECT * FROM tasks WHERE assignee = ?1 ORDER BY created_at DESC")?;
            let rows = stmt.query_map([person], map_task_row)?;
            for r in rows {
                out.push(r?);
            }
        }
        None => {
            let mut stmt = conn.prepare("SELECT * FROM tasks ORDER BY created_at DESC")?;
            let rows = stmt.query_map([], map_task_row)?;
            for r in rows {
                out.push(r?);
            }
        }
    }
    Ok(out)
}

/// Tasks a person worked on a given date: the started_at timestamp falls on
/// that day. This is the DCR engine's input snapshot.
pub fn tasks_for_user_and_date(
    conn: &Connection,
    assignee: &str,
    date: &NaiveDate,
) -> AppResult<Vec<Task>> {
    let mut stmt = conn.prepare(
        "SELECT * FROM tasks
         WHERE assignee = ?1 AND started_at IS NOT NULL AND date(started_at) = ?2
         ORDER BY started_at ASC",
    )?;
    let rows = stmt.query_map(
        params![assignee, date.format("%Y-%m-%d").to_string()],
        map_task_row,
    )?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn insert_comment(conn: &Connection, comment: &TaskComment) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO task_comments (task_id, author, comment_text, created_at)
         VALUES (?1, ?2, ?3, ?4)",
        params![comment.task_id, comment.author, comment.text, comment.created_at],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_comments(conn: &Connection, task_id: i64) -> AppResult<Vec<TaskComment>> {
    let mut stmt = conn.prepare(
        "SELECT id, task_id, author, comment_text, created_at
         FROM task_comments WHERE task_id = ?1 ORDER BY created_at ASC, id ASC",
    )?;
    let rows = stmt.query_map([task_id], |row| {
        Ok(TaskComment {
            id: row.get(0)?,
            task_id: row.get(1)?,
            author: row.get(2)?,
            text: row.get(3)?,
            created_at: row.get(4)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}
