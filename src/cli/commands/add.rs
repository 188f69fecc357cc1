use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::logic::is_blank;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{BLANK_ADD, success, warning};

/// Add a new item.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add { name } = cmd {
        // Blank input never reaches the store. The warning is a
        // recovered condition, not an error: exit status stays 0.
        if is_blank(name) {
            warning(BLANK_ADD);
            return Ok(());
        }

        let mut pool = DbPool::open(&cfg.database)?;
        let items = AddLogic::apply(&mut pool, name)?;

        if let Err(e) = audit(&pool.conn, "add", name, "Item added") {
            eprintln!("⚠️ Failed to write internal log: {}", e);
        }

        success(format!("Added \"{}\" ({} items total).", name, items.len()));
    }

    Ok(())
}
