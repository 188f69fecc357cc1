use crate::db::pool::DbPool;
use crate::db::queries::{load_all_items, update_item};
use crate::errors::AppResult;
use crate::models::item::Item;

pub struct RenameLogic;

impl RenameLogic {
    /// Overwrite the name of one item, then re-read the whole table.
    /// A stale id (row already gone) is absorbed as a no-op; the
    /// refreshed list is the only signal the caller gets.
    pub fn apply(pool: &mut DbPool, id: i64, name: &str) -> AppResult<Vec<Item>> {
        update_item(&pool.conn, id, name)?;
        load_all_items(pool)
    }
}
