use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database schema.
/// Idempotent: safe to call on every open, existing rows are untouched.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    ensure_items_table(conn)?;
    ensure_log_table(conn)?;
    Ok(())
}

/// The single domain table. `id` is assigned by SQLite on insert and
/// never reused; `name` carries no constraint (duplicates and empty
/// strings are legal at this layer).
fn ensure_items_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS items (
            id   INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT
        );
        "#,
    )?;
    Ok(())
}

/// Internal audit log, separate from the domain data.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
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
