//! Renderer configuration (TOML)
//!
//! Handles loading, saving, and providing defaults for renderer settings.
//! Every field has a default, so partial files load.
//!
//! ```toml
//! [lighting]
//! ambient_occlusion = true
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors from reading or writing a config file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to access config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Renderer configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct RenderConfig {
    /// Lighting settings
    #[serde(default)]
    pub lighting: LightingConfig,
}

/// Lighting configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightingConfig {
    /// Smooth lighting for models that ask for it (default: true)
    #[serde(default = "default_true")]
    pub ambient_occlusion: bool,
}

fn default_true() -> bool {
    true
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            ambient_occlusion: default_true(),
        }
    }
}

impl RenderConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load from `path`
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded render config");
        Ok(config)
    }

    /// Load from `path`, falling back to defaults when it is missing or invalid
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(ConfigError::Io { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                tracing::debug!(path = %path.display(), "no render config, using defaults");
                Self::default()
            }
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring render config");
                Self::default()
            }
        }
    }

    /// Write to `path`, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(path, self.to_toml_string()?).map_err(io_err)?;
        tracing::debug!(path = %path.display(), "saved render config");
        Ok(())
    }
}
