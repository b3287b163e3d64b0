//! Environment-driven shell configuration.

use std::path::PathBuf;

use anyhow::Context;
use thiserror::Error;

use stockroom_inventory::Catalog;

pub const CATALOG_VAR: &str = "STOCKROOM_CATALOG";
pub const MAX_THRESHOLD_VAR: &str = "STOCKROOM_MAX_THRESHOLD";

/// Upper bound offered by the interactive threshold prompts.
pub const DEFAULT_MAX_THRESHOLD: i64 = 100;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} must be an integer (got {value:?})")]
    NotAnInteger { var: &'static str, value: String },

    #[error("{var} must be at least 1 (got {value})")]
    BelowMinimum { var: &'static str, value: i64 },

    #[error("{var} cannot be empty")]
    Empty { var: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// JSON catalog replacing the built-in seed, if set.
    pub catalog_path: Option<PathBuf>,
    /// Inclusive upper bound for interactive thresholds. The engine itself
    /// only requires thresholds to be positive.
    pub max_threshold: i64,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            catalog_path: None,
            max_threshold: DEFAULT_MAX_THRESHOLD,
        }
    }
}

impl ShellConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let catalog_path = match lookup(CATALOG_VAR) {
            Some(raw) if raw.trim().is_empty() => {
                return Err(ConfigError::Empty { var: CATALOG_VAR });
            }
            Some(raw) => Some(PathBuf::from(raw.trim())),
            None => None,
        };

        let max_threshold = match lookup(MAX_THRESHOLD_VAR) {
            Some(raw) => {
                let value: i64 = raw.trim().parse().map_err(|_| ConfigError::NotAnInteger {
                    var: MAX_THRESHOLD_VAR,
                    value: raw.clone(),
                })?;
                if value < 1 {
                    return Err(ConfigError::BelowMinimum {
                        var: MAX_THRESHOLD_VAR,
                        value,
                    });
                }
                value
            }
            None => DEFAULT_MAX_THRESHOLD,
        };

        Ok(Self {
            catalog_path,
            max_threshold,
        })
    }

    /// The configured catalog file, or the built-in seed.
    pub fn load_catalog(&self) -> anyhow::Result<Catalog> {
        match &self.catalog_path {
            Some(path) => {
                let json = std::fs::read_to_string(path)
                    .with_context(|| format!("failed to read catalog {}", path.display()))?;
                let catalog = Catalog::from_json(&json)
                    .with_context(|| format!("failed to load catalog {}", path.display()))?;
                tracing::info!(path = %path.display(), records = catalog.len(), "loaded catalog file");
                Ok(catalog)
            }
            None => {
                tracing::info!("{CATALOG_VAR} not set; using built-in seed catalog");
                Ok(Catalog::seed()?)
            }
        }
    }
}
