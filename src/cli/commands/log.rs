use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_log;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Print the internal log table, newest first.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Log { print } = cmd {
        if *print {
            let pool = DbPool::open(&cfg.database)?;
            let rows = load_log(&pool)?;

            if rows.is_empty() {
                info("The internal log is empty.");
                return Ok(());
            }

            for (date, operation, message) in rows {
                println!("{} | {:<8} | {}", date, operation, message);
            }
        } else {
            info("Nothing to do. Try --print.");
        }
    }

    Ok(())
}
