use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::utils::error::{CatalogError, Result};

/// Optional file-based configuration. Every field mirrors a CLI option and
/// is itself optional; unset fields fall through to the built-in defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub data_dir: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub pace_secs: Option<u64>,
    pub source: Option<SourceConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub chart_url: Option<String>,
    pub base_url: Option<String>,
    pub guide_url: Option<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| CatalogError::Config {
            message: format!("TOML parsing error: {e}"),
        })
    }

    pub fn chart_url(&self) -> Option<&String> {
        self.source.as_ref().and_then(|s| s.chart_url.as_ref())
    }

    pub fn base_url(&self) -> Option<&String> {
        self.source.as_ref().and_then(|s| s.base_url.as_ref())
    }

    pub fn guide_url(&self) -> Option<&String> {
        self.source.as_ref().and_then(|s| s.guide_url.as_ref())
    }
}
