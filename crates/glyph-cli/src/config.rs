//! Optional TOML configuration.
//!
//! ```toml
//! sources = ["data/box.csv", "data/diamond.csv"]
//!
//! [normalize]
//! primary_prefix = "blue"
//! secondary_prefix = "red"
//! ```
//!
//! Relative source paths are resolved against the config file's directory.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use glyph_normalization::NormalizeOptions;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlyphConfig {
    pub sources: Vec<PathBuf>,
    pub normalize: NormalizeOptions,
}

impl GlyphConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config: GlyphConfig =
            toml::from_str(&content).map_err(|e| ConfigError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        if let Some(base) = path.parent() {
            for source in &mut config.sources {
                if source.is_relative() {
                    *source = base.join(&*source);
                }
            }
        }
        tracing::debug!(path = %path.display(), sources = config.sources.len(), "config loaded");
        Ok(config)
    }

    /// Applies command-line overrides. Non-empty `sources` replace the
    /// configured list; prefixes replace the configured ones.
    #[must_use]
    pub fn with_overrides(
        mut self,
        sources: &[PathBuf],
        primary_prefix: Option<&str>,
        secondary_prefix: Option<&str>,
    ) -> Self {
        if !sources.is_empty() {
            self.sources = sources.to_vec();
        }
        if let Some(prefix) = primary_prefix {
            self.normalize.primary_prefix = prefix.to_string();
        }
        if let Some(prefix) = secondary_prefix {
            self.normalize.secondary_prefix = prefix.to_string();
        }
        self
    }
}
