use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::is_blank;
use crate::core::rename::RenameLogic;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{BLANK_RENAME, info, success, warning};

/// Rename an existing item.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Rename { id, name } = cmd {
        if is_blank(name) {
            warning(BLANK_RENAME);
            return Ok(());
        }

        let mut pool = DbPool::open(&cfg.database)?;

        // A stale id is a silent no-op at the store layer; the refreshed
        // listing is the only signal, matching delete behavior.
        let items = RenameLogic::apply(&mut pool, *id, name)?;

        if let Err(e) = audit(&pool.conn, "rename", &id.to_string(), "Item renamed") {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        if items.iter().any(|it| it.id == *id) {
            success(format!("Item #{} renamed to \"{}\".", id, name));
        } else {
            info(format!("No item with id {}; nothing to rename.", id));
        }
    }

    Ok(())
}
