use crate::db::pool::DbPool;
use crate::db::queries::{insert_item, load_all_items};
use crate::errors::AppResult;
use crate::models::item::Item;

pub struct AddLogic;

impl AddLogic {
    /// Insert one item, then re-read the whole table. The caller must
    /// have rejected blank input already; the name is stored raw.
    /// Returns the refreshed list so the caller never renders stale state.
    pub fn apply(pool: &mut DbPool, name: &str) -> AppResult<Vec<Item>> {
        insert_item(&pool.conn, name)?;
        load_all_items(pool)
    }
}
