use anyhow::Result;
use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => {
            let config = Config::load_or_default();
            if let Ok(path) = Config::path() {
                eprintln!("{} {}", "Config file:".bold(), path.display());
            }
            print!("{}", serde_yaml::to_string(&config)?);
            Ok(())
        }
        ConfigCommands::Set { key, value } => {
            let mut config = Config::load_or_default();
            config.set(&key, &value)?;
            let path = config.save()?;
            eprintln!("Saved {key} = {value} to {}", path.display());
            Ok(())
        }
    }
}
