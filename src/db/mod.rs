pub mod kpi;
pub mod leads;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod reports;
pub mod stats;
pub mod tasks;

use crate::errors::AppResult;
use rusqlite::Connection;

/// Bring a database up to the current schema. Every table and column
/// upgrade goes through the migration engine; nothing else creates schema.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    migrate::run_pending_migrations(conn)?;
    Ok(())
}
