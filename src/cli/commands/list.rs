use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::load_all_items;
use crate::errors::{AppError, AppResult};
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { json } = cmd {
        let pool = DbPool::open(&cfg.database)?;
        let items = load_all_items(&pool)?;

        if *json {
            let out = serde_json::to_string_pretty(&items)
                .map_err(|e| AppError::Other(e.to_string()))?;
            println!("{}", out);
            return Ok(());
        }

        if items.is_empty() {
            println!("No items.");
            return Ok(());
        }

        let mut table = Table::new(&["ID", "NAME"]);
        for item in &items {
            table.add_row(vec![item.id.to_string(), item.name.clone()]);
        }

        print!("{}", table.render(&cfg.separator_char));
        println!("{} item(s)", items.len());
    }

    Ok(())
}
