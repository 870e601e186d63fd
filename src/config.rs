//! Configuration parsing and validation.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::{AppError, Result};

fn default_git_binary() -> String {
    "git".into()
}

/// Global configuration parsed from an optional `git-path.toml`.
///
/// Every field has a default, so an empty document is a valid configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct GlobalConfig {
    /// Version-control executable used for root discovery.
    #[serde(default = "default_git_binary")]
    pub git_binary: String,
    /// Treat an empty discovered root as an error instead of degrading to `""`.
    #[serde(default)]
    pub strict_root: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            git_binary: default_git_binary(),
            strict_root: false,
        }
    }
}

impl GlobalConfig {
    /// Load and validate configuration from a TOML file path.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the file cannot be read or contains
    /// invalid TOML, or if validation fails.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|err| AppError::Config(format!("failed to read config: {err}")))?;
        Self::from_toml_str(&raw)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if parsing or validation fails.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&mut self) -> Result<()> {
        let trimmed = self.git_binary.trim();
        if trimmed.is_empty() {
            return Err(AppError::Config("git_binary must not be empty".into()));
        }
        if trimmed.len() != self.git_binary.len() {
            self.git_binary = trimmed.to_owned();
        }
        Ok(())
    }
}
