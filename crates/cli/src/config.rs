// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dashboard configuration.
//!
//! Configuration is stored in `<config_dir>/reviewfeed/config.toml` (or the
//! file named by `REVIEWFEED_CONFIG`) and includes:
//! - `api_url`: Base URL of the Review API (e.g., "http://localhost:8000")
//! - `review_lines`: Lines of review text shown per row before truncation
//! - `review_width`: Column width for review text
//! - `utc`: Show times in UTC instead of the local timezone
//!
//! A missing file means defaults. The API URL can be overridden by the
//! `REVIEWFEED_API_URL` environment variable and then by `--url`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const CONFIG_DIR_NAME: &str = "reviewfeed";
const CONFIG_FILE_NAME: &str = "config.toml";
const REVIEWS_PATH: &str = "/api/reviews";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "REVIEWFEED_CONFIG";
/// Environment variable overriding `api_url`.
pub const API_URL_ENV: &str = "REVIEWFEED_API_URL";

const MIN_REVIEW_WIDTH: usize = 16;

/// Dashboard configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Base URL of the Review API. `/api/reviews` is appended.
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// Review text lines shown per row when collapsed (default: 2).
    #[serde(default = "default_review_lines")]
    pub review_lines: usize,
    /// Width of the review column in characters (default: 56).
    #[serde(default = "default_review_width")]
    pub review_width: usize,
    /// Render timestamps in UTC rather than local time.
    #[serde(default)]
    pub utc: bool,
}

fn default_api_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_review_lines() -> usize {
    2
}

fn default_review_width() -> usize {
    56
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_url: default_api_url(),
            review_lines: default_review_lines(),
            review_width: default_review_width(),
            utc: false,
        }
    }
}

impl Config {
    /// Loads configuration from the given file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Loads configuration, treating a missing file as defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Config::default())
        }
    }

    /// Saves configuration to the given file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Apply URL overrides. The flag wins over the environment.
    pub fn with_overrides(mut self, env_url: Option<String>, flag_url: Option<String>) -> Self {
        if let Some(url) = flag_url.or(env_url).filter(|u| !u.trim().is_empty()) {
            self.api_url = url.trim().to_string();
        }
        self
    }

    /// Checks every field, returning the first problem found.
    pub fn validate(&self) -> Result<()> {
        validate_api_url(&self.api_url)?;
        if self.review_lines == 0 {
            return Err(Error::Config("review_lines must be at least 1".to_string()));
        }
        if self.review_width < MIN_REVIEW_WIDTH {
            return Err(Error::Config(format!(
                "review_width must be at least {}",
                MIN_REVIEW_WIDTH
            )));
        }
        Ok(())
    }

    /// Full URL of the review collection endpoint.
    pub fn reviews_url(&self) -> String {
        format!("{}{}", self.api_url.trim_end_matches('/'), REVIEWS_PATH)
    }
}

/// Validates that the URL is an absolute http(s) URL with a host.
pub fn validate_api_url(url: &str) -> Result<()> {
    let invalid = |reason: &str| Error::InvalidApiUrl {
        url: url.to_string(),
        reason: reason.to_string(),
    };
    let rest = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .ok_or_else(|| invalid("must start with http:// or https://"))?;
    let host = rest.split('/').next().unwrap_or_default();
    if host.is_empty() {
        return Err(invalid("missing host"));
    }
    if rest.contains('?') || rest.contains('#') {
        return Err(invalid("query strings and fragments are not supported"));
    }
    Ok(())
}

/// Resolve the config file path: `$REVIEWFEED_CONFIG`, else the user config dir.
pub fn config_path() -> Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }
    dirs::config_dir()
        .map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
        .ok_or(Error::NoConfigDir)
}

/// Load the effective configuration for a command invocation.
pub fn resolve(flag_url: Option<String>) -> Result<Config> {
    let path = config_path()?;
    let config = Config::load_or_default(&path)?
        .with_overrides(std::env::var(API_URL_ENV).ok(), flag_url);
    config.validate()?;
    tracing::debug!(path = %path.display(), api_url = %config.api_url, "config resolved");
    Ok(config)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
