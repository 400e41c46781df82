//! Configuration for the `vitacode` CLI.
//!
//! Each setting resolves through the chain: CLI flag > env var > config
//! file > default. The config file is TOML and optional.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, VitaError};

pub const DEFAULT_CONFIG_FILE: &str = "vitacode.toml";
pub const DEFAULT_CATALOG_FILE: &str = "catalog.json";
pub const DEFAULT_STORE_FILE: &str = "vitacode_store.json";
pub const DEFAULT_LOG_LEVEL: &str = "warn";
pub const DEFAULT_BUDGET: f64 = 200.0;

pub const ENV_CATALOG: &str = "VITACODE_CATALOG";
pub const ENV_STORE: &str = "VITACODE_STORE";
pub const ENV_LOG: &str = "VITACODE_LOG";

/// Raw contents of `vitacode.toml`; every key is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub catalog: Option<PathBuf>,
    pub store: Option<PathBuf>,
    pub log_level: Option<String>,
    pub default_budget: Option<f64>,
}

impl ConfigFile {
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read `path`. A missing file is only an error when it was asked for
    /// explicitly.
    pub fn load(path: &Path, explicit: bool) -> Result<Self> {
        if !path.exists() {
            if explicit {
                return Err(VitaError::NotFound(format!(
                    "config file {}",
                    path.display()
                )));
            }
            return Ok(Self::default());
        }
        Self::parse(&fs::read_to_string(path)?)
    }
}

/// Settings given on the command line.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub catalog: Option<PathBuf>,
    pub store: Option<PathBuf>,
    pub log_level: Option<String>,
}

/// Fully resolved settings.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub catalog: PathBuf,
    pub store: PathBuf,
    pub log_level: String,
    pub default_budget: f64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            catalog: PathBuf::from(DEFAULT_CATALOG_FILE),
            store: PathBuf::from(DEFAULT_STORE_FILE),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            default_budget: DEFAULT_BUDGET,
        }
    }
}

impl AppConfig {
    /// Resolve from the process environment and an optional config path.
    pub fn resolve(config_path: Option<&Path>, overrides: Overrides) -> Result<Self> {
        let file = match config_path {
            Some(path) => ConfigFile::load(path, true)?,
            None => ConfigFile::load(Path::new(DEFAULT_CONFIG_FILE), false)?,
        };
        Ok(Self::merge(file, overrides, |key| std::env::var(key).ok()))
    }

    /// Apply the resolution chain with an injectable environment lookup.
    pub fn merge<F>(file: ConfigFile, overrides: Overrides, env: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let env = |key: &str| env(key).filter(|v| !v.trim().is_empty());

        Self {
            catalog: overrides
                .catalog
                .or_else(|| env(ENV_CATALOG).map(PathBuf::from))
                .or(file.catalog)
                .unwrap_or(defaults.catalog),
            store: overrides
                .store
                .or_else(|| env(ENV_STORE).map(PathBuf::from))
                .or(file.store)
                .unwrap_or(defaults.store),
            log_level: overrides
                .log_level
                .or_else(|| env(ENV_LOG))
                .or(file.log_level)
                .unwrap_or(defaults.log_level),
            default_budget: file
                .default_budget
                .filter(|b| b.is_finite() && *b >= 0.0)
                .unwrap_or(defaults.default_budget),
        }
    }
}
