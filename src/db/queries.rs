use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::item::Item;
use rusqlite::{Connection, Result, Row, params};

/// Load every item. Ordered by id ascending so the listing is
/// deterministic (SQLite's native order is incidental; ids are
/// assigned in insertion order and never reused).
pub fn load_all_items(pool: &DbPool) -> AppResult<Vec<Item>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT id, name FROM items ORDER BY id ASC")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn map_row(row: &Row) -> Result<Item> {
    Ok(Item {
        id: row.get("id")?,
        name: row.get("name")?,
    })
}

/// Insert a new item. The id is assigned by the engine; the name is
/// stored exactly as given (no trimming, no validation at this layer).
pub fn insert_item(conn: &Connection, name: &str) -> AppResult<()> {
    conn.execute("INSERT INTO items (name) VALUES (?1)", params![name])?;
    Ok(())
}

/// Overwrite the name of the row matching `id`.
/// A missing id is a silent no-op.
pub fn update_item(conn: &Connection, id: i64, name: &str) -> AppResult<()> {
    conn.execute(
        "UPDATE items SET name = ?1 WHERE id = ?2",
        params![name, id],
    )?;
    Ok(())
}

/// Remove the row matching `id`. A missing id is a silent no-op,
/// which also makes deletion idempotent.
pub fn delete_item(conn: &Connection, id: i64) -> AppResult<()> {
    conn.execute("DELETE FROM items WHERE id = ?1", params![id])?;
    Ok(())
}

pub fn load_log(pool: &DbPool) -> Result<Vec<(String, String, String)>> {
    let mut stmt = pool
        .conn
        .prepare("SELECT date, operation, message FROM log ORDER BY date DESC")?;

    let rows = stmt.query_map([], |row| {
        Ok((
            row.get::<_, String>(0)?,
            row.get::<_, String>(1)?,
            row.get::<_, String>(2)?,
        ))
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_pool() -> DbPool {
        let pool = DbPool::new(":memory:").expect("open in-memory db");
        crate::db::initialize::init_db(&pool.conn).expect("init schema");
        pool
    }

    #[test]
    fn init_db_twice_keeps_rows() {
        let pool = memory_pool();
        insert_item(&pool.conn, "Bread").unwrap();

        crate::db::initialize::init_db(&pool.conn).unwrap();

        let items = load_all_items(&pool).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Bread");
    }

    #[test]
    fn insert_stores_raw_name() {
        let pool = memory_pool();
        insert_item(&pool.conn, " milk ").unwrap();

        let items = load_all_items(&pool).unwrap();
        assert_eq!(items[0].name, " milk ");
    }

    #[test]
    fn update_missing_id_is_noop() {
        let pool = memory_pool();
        update_item(&pool.conn, 42, "ghost").unwrap();
        assert!(load_all_items(&pool).unwrap().is_empty());
    }

    #[test]
    fn delete_is_idempotent() {
        let pool = memory_pool();
        insert_item(&pool.conn, "Bread").unwrap();
        let id = load_all_items(&pool).unwrap()[0].id;

        delete_item(&pool.conn, id).unwrap();
        delete_item(&pool.conn, id).unwrap();

        assert!(load_all_items(&pool).unwrap().is_empty());
    }

    #[test]
    fn rename_keeps_id() {
        let pool = memory_pool();
        insert_item(&pool.conn, "Bread").unwrap();
        let id = load_all_items(&pool).unwrap()[0].id;

        update_item(&pool.conn, id, "Toast").unwrap();

        let items = load_all_items(&pool).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, id);
        assert_eq!(items[0].name, "Toast");
    }

    #[test]
    fn listing_is_ordered_by_id() {
        let pool = memory_pool();
        insert_item(&pool.conn, "Bread").unwrap();
        insert_item(&pool.conn, "Milk").unwrap();
        insert_item(&pool.conn, "Eggs").unwrap();

        let ids: Vec<i64> = load_all_items(&pool).unwrap().iter().map(|i| i.id).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        assert_eq!(ids, sorted);
    }
}
