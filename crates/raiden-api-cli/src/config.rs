/*
[INPUT]:  YAML configuration file, command-line overrides
[OUTPUT]: Resolved node connection settings
[POS]:    Configuration layer - client setup
[UPDATE]: When adding new configuration options
*/

use anyhow::{Context, Result};
use raiden_api_client::{ClientConfig, DEFAULT_API_VERSION};
use serde::{Deserialize, Serialize};

/// Connection settings for the node API
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NodeConfig {
    /// Base URL of the node API (e.g., "http://localhost:5001/api")
    #[serde(default)]
    pub base_url: Option<String>,
    /// API version segment
    #[serde(default)]
    pub version: Option<String>,
}

impl NodeConfig {
    /// Load configuration from YAML file
    pub fn from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Apply command-line values on top of the file values
    pub fn with_overrides(mut self, base_url: Option<String>, version: Option<String>) -> Self {
        if base_url.is_some() {
            self.base_url = base_url;
        }
        if version.is_some() {
            self.version = version;
        }
        self
    }

    pub fn into_client_config(self) -> Result<ClientConfig> {
        let base_url = self
            .base_url
            .context("node base url missing; pass --base-url or set base_url in the config file")?;
        let version = self
            .version
            .unwrap_or_else(|| DEFAULT_API_VERSION.to_string());
        Ok(ClientConfig::new(base_url).with_version(version))
    }
}
