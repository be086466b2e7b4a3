//! Engine configuration for rapport
//!
//! Configuration lives in a TOML file. Lookup order:
//! 1. An explicit path (the CLI's `--config`)
//! 2. `$RAPPORT_CONFIG_DIR/config.toml`
//! 3. `<platform config dir>/rapport/config.toml`
//!
//! A missing file yields defaults; a malformed one is an error.

pub mod types;

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RapportError, Result};

pub use types::{EngineConfig, SearchConfig, CONFIG_FORMAT_VERSION};

/// Environment variable overriding the configuration directory
pub const CONFIG_DIR_ENV: &str = "RAPPORT_CONFIG_DIR";

/// File name inside the configuration directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

impl EngineConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| RapportError::io_operation("read config", path.display(), e))?;
        let config: EngineConfig = toml::from_str(&content)?;

        if config.version > CONFIG_FORMAT_VERSION {
            tracing::warn!(
                path = %path.display(),
                version = config.version,
                supported = CONFIG_FORMAT_VERSION,
                "config written by a newer version"
            );
        }

        Ok(config)
    }

    /// Load configuration from a file, falling back to defaults if it is absent
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "config_missing_using_defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    /// Save configuration to a file, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| {
                RapportError::io_operation("create config directory", parent.display(), e)
            })?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| RapportError::Other(format!("failed to serialize config: {}", e)))?;
        fs::write(path, content)
            .map_err(|e| RapportError::io_operation("write config", path.display(), e))?;
        Ok(())
    }
}

/// Resolve the configuration file path
pub fn resolve_path(explicit: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
        return Ok(PathBuf::from(dir).join(CONFIG_FILE_NAME));
    }
    dirs::config_dir()
        .map(|dir| dir.join("rapport").join(CONFIG_FILE_NAME))
        .ok_or_else(|| {
            RapportError::UsageError(format!(
                "cannot determine a config directory; pass --config or set {}",
                CONFIG_DIR_ENV
            ))
        })
}
