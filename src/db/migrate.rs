use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists with the modern schema.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn create_report_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS daily_reports (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id      TEXT NOT NULL,
            date         TEXT NOT NULL,
            attendance   TEXT,
            general_notes TEXT NOT NULL DEFAULT '',
            submitted_at TEXT,
            created_at   TEXT NOT NULL,
            updated_at   TEXT NOT NULL,
            UNIQUE(user_id, date)
        );

        CREATE TABLE IF NOT EXISTS report_activities (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            report_id   INTEGER NOT NULL REFERENCES daily_reports(id),
            category    TEXT NOT NULL,
            from_time   TEXT NOT NULL,
            to_time     TEXT NOT NULL,
            hours       REAL NOT NULL,
            notes       TEXT NOT NULL DEFAULT '',
            is_billable INTEGER NOT NULL DEFAULT 0,
            created_at  TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_reports_user_date ON daily_reports(user_id, date);
        CREATE INDEX IF NOT EXISTS idx_activities_report ON report_activities(report_id);
        "#,
    )?;
    Ok(())
}

fn create_task_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS tasks (
            id                INTEGER PRIMARY KEY AUTOINCREMENT,
            title             TEXT NOT NULL,
            description       TEXT NOT NULL DEFAULT '',
            assignee          TEXT NOT NULL,
            assigned_by       TEXT NOT NULL,
            priority          TEXT NOT NULL CHECK(priority IN ('high','medium','low')),
            status            TEXT NOT NULL DEFAULT 'pending'
                              CHECK(status IN ('pending','in-progress','completed','escalated')),
            billable          INTEGER NOT NULL DEFAULT 0,
            category          TEXT NOT NULL,
            client            TEXT,
            due_date          TEXT NOT NULL,
            due_time          TEXT,
            estimated_hours   REAL NOT NULL DEFAULT 0,
            actual_hours      REAL NOT NULL DEFAULT 0,
            tags              TEXT NOT NULL DEFAULT '[]',
            started_at        TEXT,
            completed_at      TEXT,
            is_overdue        INTEGER NOT NULL DEFAULT 0,
            overdue_minutes   INTEGER NOT NULL DEFAULT 0,
            escalation_reason TEXT,
            created_at        TEXT NOT NULL,
            updated_at        TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS task_comments (
            id           INTEGER PRIMARY KEY AUTOINCREMENT,
            task_id      INTEGER NOT NULL REFERENCES tasks(id),
            author       TEXT NOT NULL,
            comment_text TEXT NOT NULL,
            created_at   TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_tasks_assignee ON tasks(assignee);
        CREATE INDEX IF NOT EXISTS idx_tasks_status ON tasks(status);
        CREATE INDEX IF NOT EXISTS idx_comments_task ON task_comments(task_id);
        "#,
    )?;
    Ok(())
}

fn create_kpi_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kpi_entries (
            id                    INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id               TEXT NOT NULL,
            date                  TEXT NOT NULL,
            customer_satisfaction INTEGER NOT NULL DEFAULT 3,
            timely_delivery       INTEGER NOT NULL DEFAULT 3,
            certifications        TEXT NOT NULL DEFAULT '',
            lead_generation       INTEGER NOT NULL DEFAULT 0,
            dcr_maintenance       REAL NOT NULL DEFAULT 1,
            technical_escalations INTEGER NOT NULL DEFAULT 0,
            notes                 TEXT NOT NULL DEFAULT '',
            created_at            TEXT NOT NULL,
            UNIQUE(user_id, date)
        );

        CREATE INDEX IF NOT EXISTS idx_kpi_user_date ON kpi_entries(user_id, date);
        "#,
    )?;
    Ok(())
}

fn create_leads_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS sales_leads (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            company_name   TEXT NOT NULL,
            contact_person TEXT NOT NULL DEFAULT 'TBD',
            lead_source    TEXT NOT NULL DEFAULT '',
            assigned_to    TEXT NOT NULL,
            status         TEXT NOT NULL DEFAULT 'demo-given',
            demo_date      TEXT NOT NULL,
            demo_notes     TEXT NOT NULL DEFAULT '',
            notes          TEXT NOT NULL DEFAULT '',
            created_at     TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

/// Check whether a table has a given column.
fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info('{}')", table))?;
    let cols = stmt.query_map([], |row| row.get::<_, String>(1))?;

    for c in cols {
        if c? == column {
            return Ok(true);
        }
    }
    Ok(false)
}

fn migration_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn mark_migration(conn: &Connection, version: &str, message: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [version, message],
    )?;
    Ok(())
}

/// Pre-0.3 databases tracked overdue state only on completion rows;
/// the columns were added to tasks afterwards.
fn migrate_add_overdue_columns(conn: &Connection) -> Result<()> {
    let version = "20250610_0001_add_task_overdue_columns";

    if migration_applied(conn, version)? {
        return Ok(());
    }

    if !has_column(conn, "tasks", "is_overdue")? {
        conn.execute_batch(
            r#"
            ALTER TABLE tasks ADD COLUMN is_overdue INTEGER NOT NULL DEFAULT 0;
            ALTER TABLE tasks ADD COLUMN overdue_minutes INTEGER NOT NULL DEFAULT 0;
            "#,
        )?;
    }

    mark_migration(conn, version, "Added overdue tracking columns to tasks")?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    // 1) Ensure log table
    ensure_log_table(conn)?;

    // 2) Ensure base schema
    create_report_tables(conn)?;
    create_task_tables(conn)?;
    create_kpi_table(conn)?;
    create_leads_table(conn)?;

    // 3) Column-level upgrades
    migrate_add_overdue_columns(conn)?;

    Ok(())
}
