// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::path::Path;

use crate::cli::ConfigCommand;
use crate::config::{config_path, resolve, Config};
use crate::error::{Error, Result};

/// Execute a config subcommand.
pub fn run(cmd: ConfigCommand, flag_url: Option<String>) -> Result<()> {
    match cmd {
        ConfigCommand::Show => {
            let config = resolve(flag_url)?;
            print!("{}", to_toml(&config)?);
            Ok(())
        }
        ConfigCommand::Path => {
            println!("{}", config_path()?.display());
            Ok(())
        }
        ConfigCommand::Init { force } => {
            let path = config_path()?;
            init_at(&path, force)?;
            println!("Wrote {}", path.display());
            Ok(())
        }
    }
}

/// Serialize the effective configuration.
pub fn to_toml(config: &Config) -> Result<String> {
    toml::to_string_pretty(config)
        .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))
}

/// Write a default configuration file, refusing to clobber unless forced.
pub fn init_at(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(Error::ConfigExists(path.display().to_string()));
    }
    Config::default().save(path)?;
    tracing::info!(path = %path.display(), "config written");
    Ok(())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
