use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{Connection, params};

/// Append a line to the internal `log` table.
/// `operation` is the command name (init/add/rename/del), `target` the
/// item name or id it acted on.
pub fn audit(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}
