use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Portal settings, read from an optional TOML file
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PortalConfig {
    /// Directory holding favorites and recently viewed state
    pub data_dir: PathBuf,
    /// Listing source: `sample`, `file:<path>` or a URL
    pub source: String,
    /// Page address recorded on contact enquiries
    pub page_url: String,
    pub contact: ContactConfig,
}

/// Contact form delivery settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ContactConfig {
    /// POST enquiries here; unset means submissions are simulated
    pub endpoint: Option<String>,
    /// Artificial delay of a simulated submission
    pub delay_ms: u64,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".property-portal"),
            source: "sample".to_string(),
            page_url: "http://localhost:3000/".to_string(),
            contact: ContactConfig::default(),
        }
    }
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            delay_ms: 1000,
        }
    }
}

impl ContactConfig {
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl PortalConfig {
    /// Read `path`; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load `path` when given, otherwise use defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }
}
