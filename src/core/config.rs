//! Configuration - where the three input sources live
//!
//! Locations resolve in this order: explicit overrides (command-line flags or
//! `SHOPEFF_*` environment variables), then `shopeff.yaml` in the data
//! directory, then the default file names inside the data directory.

use std::path::{Path, PathBuf};

use miette::Diagnostic;
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Name of the optional configuration file inside the data directory
pub const CONFIG_FILE_NAME: &str = "shopeff.yaml";

pub const DEFAULT_JOBS_FILE: &str = "repair_jobs.csv";
pub const DEFAULT_TYPES_FILE: &str = "repair_types.csv";
pub const DEFAULT_MECHANICS_FILE: &str = "mechanics.csv";

#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    #[error("Cannot read config file {}", .path.display())]
    #[diagnostic(code(shopeff::config::io))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {}", .path.display())]
    #[diagnostic(
        code(shopeff::config::parse),
        help("expected optional `jobs`, `types` and `mechanics` keys holding file paths")
    )]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yml::Error,
    },
}

/// Resolved locations of the three sources
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sources {
    pub jobs: PathBuf,
    pub types: PathBuf,
    pub mechanics: PathBuf,
}

/// Per-source overrides; `None` falls through to the config file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceOverrides {
    pub jobs: Option<PathBuf>,
    pub types: Option<PathBuf>,
    pub mechanics: Option<PathBuf>,
}

/// Contents of `shopeff.yaml`. Relative paths are taken from the data directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub jobs: Option<PathBuf>,

    #[serde(default)]
    pub types: Option<PathBuf>,

    #[serde(default)]
    pub mechanics: Option<PathBuf>,
}

impl Config {
    /// Load `shopeff.yaml` from `data_dir`, or the empty config if absent
    pub fn load(data_dir: &Path) -> Result<Self, ConfigError> {
        let path = data_dir.join(CONFIG_FILE_NAME);
        if !path.is_file() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        debug!(path = %path.display(), "reading config file");

        // An empty file deserializes to unit, not a mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yml::from_str(&content).map_err(|source| ConfigError::Parse { path, source })
    }

    /// Combine overrides, this config and the defaults into final locations
    pub fn resolve(&self, data_dir: &Path, overrides: &SourceOverrides) -> Sources {
        let pick = |flag: &Option<PathBuf>, file: &Option<PathBuf>, default: &str| {
            flag.clone().unwrap_or_else(|| match file {
                Some(path) => data_dir.join(path),
                None => data_dir.join(default),
            })
        };

        Sources {
            jobs: pick(&overrides.jobs, &self.jobs, DEFAULT_JOBS_FILE),
            types: pick(&overrides.types, &self.types, DEFAULT_TYPES_FILE),
            mechanics: pick(&overrides.mechanics, &self.mechanics, DEFAULT_MECHANICS_FILE),
        }
    }
}
