/*
[INPUT]:  Base URL, API version, optional transport
[OUTPUT]: Configured client with a fixed request root
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding construction options or changing root resolution
*/

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::http::transport::{HttpTransport, ReqwestTransport};
use crate::http::{RaidenError, Result};

/// API version used when none is given
pub const DEFAULT_API_VERSION: &str = "v1";

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Node API base, e.g. `http://localhost:5001/api`
    pub base_url: String,
    #[serde(default = "default_version")]
    pub version: String,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            version: default_version(),
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }
}

fn default_version() -> String {
    DEFAULT_API_VERSION.to_string()
}

/// HTTP client for a Raiden node's REST API
#[derive(Debug, Clone)]
pub struct RaidenClient {
    transport: Arc<dyn HttpTransport>,
    api_root: String,
}

impl RaidenClient {
    /// Create a client for `{base_url}/{version}` using the reqwest transport
    pub fn new(base_url: &str, version: &str) -> Result<Self> {
        Self::with_config(ClientConfig::new(base_url).with_version(version))
    }

    /// Create a client for `{base_url}/v1`
    pub fn with_default_version(base_url: &str) -> Result<Self> {
        Self::new(base_url, DEFAULT_API_VERSION)
    }

    pub fn with_config(config: ClientConfig) -> Result<Self> {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    /// Create a client that sends every request through `transport`
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Result<Self> {
        let api_root = resolve_api_root(&config.base_url, &config.version)?;
        tracing::debug!(api_root = %api_root, "raiden client configured");
        Ok(Self {
            transport,
            api_root,
        })
    }

    /// Versioned request root, without a trailing slash
    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Absolute URI of a resource path below the root
    pub(crate) fn resource_uri(&self, path: &str) -> String {
        format!("{}/{}", self.api_root, path.trim_start_matches('/'))
    }

    pub(crate) fn transport(&self) -> &dyn HttpTransport {
        self.transport.as_ref()
    }
}

fn resolve_api_root(base_url: &str, version: &str) -> Result<String> {
    let base_url = base_url.trim().trim_end_matches('/');
    if base_url.is_empty() {
        return Err(RaidenError::Config("baseUrl is required".to_string()));
    }
    let version = version.trim().trim_matches('/');
    if version.is_empty() {
        return Err(RaidenError::Config("version is required".to_string()));
    }

    let parsed = Url::parse(base_url)
        .map_err(|e| RaidenError::Config(format!("baseUrl `{base_url}` is invalid: {e}")))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(RaidenError::Config(format!(
            "baseUrl `{base_url}` must use http or https"
        )));
    }

    Ok(format!("{base_url}/{version}"))
}
