use crate::config::Config;
use crate::errors::AppResult;

/// Open the interactive single-screen item manager.
pub fn handle(cfg: &Config) -> AppResult<()> {
    crate::tui::run(cfg)
}
