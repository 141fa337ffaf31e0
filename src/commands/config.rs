//! `pixflip config` subcommands.

use anyhow::Result;

use crate::cli::ConfigAction;
use crate::config::Config;

/// Dispatches the `config` subcommands.
pub fn handle_config(action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = Config::load()?;
            print!("{}", config.to_toml()?);
        }
        ConfigAction::Path => {
            println!("{}", Config::config_path()?.display());
        }
        ConfigAction::Init => {
            let path = Config::config_path()?;
            if path.exists() {
                println!("config already exists at {}", path.display());
            } else {
                Config::default().save()?;
                println!("wrote default config to {}", path.display());
            }
        }
    }
    Ok(())
}
