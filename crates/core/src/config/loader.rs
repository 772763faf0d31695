//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, Result, ResultExt};
use std::path::{Path, PathBuf};

/// Configuration wrapper
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed tables, defaulted when no file was found
    pub schema: ConfigSchema,
    /// File the schema was read from
    pub path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    ///
    /// An explicit path must exist. Without one, the standard locations are
    /// searched and a missing file falls back to defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config_path = match path {
            Some(p) if !p.exists() => return Err(Error::config_not_found(p)),
            Some(p) => Some(p.to_path_buf()),
            None => find_config_file(),
        };

        let schema = if let Some(ref p) = config_path {
            load_config_file(p)?
        } else {
            ConfigSchema::default()
        };

        tracing::info!(path = ?config_path, "Configuration loaded");

        Ok(Self {
            schema,
            path: config_path,
        })
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<PathBuf> {
    let candidates = [".apkforge.toml", "apkforge.toml", ".config/apkforge.toml"];

    candidates
        .into_iter()
        .map(PathBuf::from)
        .find(|candidate| candidate.exists())
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &Path) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::config(format!("Failed to read config file {}: {}", path.display(), e))
            .with_source(e)
    })?;

    toml::from_str(&content)
        .map_err(Error::from)
        .context(format!("While parsing {}", path.display()))
}
