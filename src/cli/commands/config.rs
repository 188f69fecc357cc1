use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::info;
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if *print_config {
            let path = Config::config_file();
            if path.exists() {
                let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
                println!("{}", content);
            } else {
                info(format!(
                    "No config file at {:?}; using defaults (database: {}).",
                    path, cfg.database
                ));
            }
        } else {
            info("Nothing to do. Try --print.");
        }
    }

    Ok(())
}
