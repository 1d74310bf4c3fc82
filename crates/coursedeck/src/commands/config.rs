use anyhow::Result;
use colored::Colorize;

use crate::cli::ConfigCommands;
use crate::config::Config;

pub fn run(command: ConfigCommands) -> Result<()> {
    match command {
        ConfigCommands::Show => show(),
        ConfigCommands::Set { key, value } => set(&key, &value),
    }
}

fn show() -> Result<()> {
    let config = Config::load_or_default();
    let path = Config::path()?;

    println!("{}", "Configuration".bold());
    println!("  {} {}", "file:".dimmed(), path.display());
    println!(
        "  theme:      {}",
        config
            .theme
            .map(|p| p.name().to_string())
            .unwrap_or_else(|| "system (default)".to_string())
    );
    println!(
        "  start_mode: {}",
        config.start_mode.as_deref().unwrap_or("first (default)")
    );
    Ok(())
}

fn set(key: &str, value: &str) -> Result<()> {
    let mut config = Config::load_or_default();
    config.set(key, value)?;
    let path = config.save()?;
    println!(
        "{} {key} = {value} ({})",
        "Saved".green(),
        path.display()
    );
    Ok(())
}
