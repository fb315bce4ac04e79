use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use std::fs;

pub fn handle(cmd: &Commands, _cfg: &Config) -> AppResult<()> {
    if let Commands::Config { print_config } = cmd {
        if *print_config {
            let path = Config::config_file();
            if path.exists() {
                info(format!("Configuration file: {}", path.display()));
                println!("{}", fs::read_to_string(&path)?);
            } else {
                warning("No configuration file found; run `stafflog init` first.");
            }
        } else {
            info("Nothing to do. Use `stafflog config --print`.");
        }
    }
    Ok(())
}
