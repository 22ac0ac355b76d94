//! Transform configuration (mould.toml)
//!
//! Lets a host change the input defaults used when a component has no input
//! group. Every field is optional:
//!
//! ```toml
//! [input]
//! placeholder = "Type here"
//! size = 16
//!
//! [input.color]
//! r = 51
//! g = 51
//! b = 51
//! a = 1
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::input::InputProps;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the config file
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config text is not valid
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    /// Config could not be written back out
    #[error("Failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Result type for config operations
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Top-level transform configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TransformConfig {
    /// Input group used when a component supplies none
    #[serde(default)]
    pub input: InputProps,
}

impl TransformConfig {
    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded transform config");
        Ok(config)
    }

    /// Serialize to TOML string
    pub fn to_toml(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
