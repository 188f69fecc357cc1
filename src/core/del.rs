use crate::db::pool::DbPool;
use crate::db::queries::{delete_item, load_all_items};
use crate::errors::AppResult;
use crate::models::item::Item;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete one item by id, then re-read the whole table.
    /// Deleting an id that no longer exists is a no-op.
    pub fn apply(pool: &mut DbPool, id: i64) -> AppResult<Vec<Item>> {
        delete_item(&pool.conn, id)?;
        load_all_items(pool)
    }
}
