use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Delete an item by id. Deletion is immediate and permanent; a
/// missing id is absorbed as a no-op.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id } = cmd {
        let mut pool = DbPool::open(&cfg.database)?;
        let items = DeleteLogic::apply(&mut pool, *id)?;

        if let Err(e) = audit(&pool.conn, "del", &id.to_string(), "Item deleted") {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        success(format!(
            "Item #{} deleted ({} items remaining).",
            id,
            items.len()
        ));
    }

    Ok(())
}
