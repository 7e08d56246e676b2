//! # Catalog Configuration
//!
//! Configuration management for the catalog client.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     STOREFRONT_API_URL=https://fakestoreapi.com                         │
//! │     STOREFRONT_SOURCE=local                                             │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/catalog/storefront.toml (Linux)                           │
//! │     ~/Library/Application Support/com.storefront.catalog/... (macOS)   │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     remote source, 20 products per page, 30s timeout                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # storefront.toml
//! [source]
//! default = "remote"  # remote | local
//! api_url = "https://fakestoreapi.com"
//! dataset_path = "/opt/storefront/products.json"
//!
//! [paging]
//! page_size = 20
//!
//! [http]
//! timeout_secs = 30
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use storefront_core::validation::validate_page_size;
use storefront_core::{DataSource, DEFAULT_PAGE_SIZE};
use tracing::{debug, info, warn};
use url::Url;

use crate::error::{ClientError, ClientResult};

// =============================================================================
// Source Settings
// =============================================================================

/// Where products come from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSettings {
    /// Source used when the caller does not pick one.
    #[serde(default)]
    pub default: DataSource,

    /// Base URL of the listing API. `/products` is appended.
    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Dataset file for the local source. The bundled dataset is used when unset.
    #[serde(default)]
    pub dataset_path: Option<PathBuf>,
}

fn default_api_url() -> String {
    "https://fakestoreapi.com".to_string()
}

impl Default for SourceSettings {
    fn default() -> Self {
        SourceSettings {
            default: DataSource::default(),
            api_url: default_api_url(),
            dataset_path: None,
        }
    }
}

// =============================================================================
// Paging Settings
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagingSettings {
    /// Products requested per page (`limit` query parameter).
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

impl Default for PagingSettings {
    fn default() -> Self {
        PagingSettings {
            page_size: default_page_size(),
        }
    }
}

// =============================================================================
// HTTP Settings
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpSettings {
    /// Per-request timeout (seconds).
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_timeout() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("storefront/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for HttpSettings {
    fn default() -> Self {
        HttpSettings {
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl HttpSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete catalog configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    #[serde(default)]
    pub source: SourceSettings,

    #[serde(default)]
    pub paging: PagingSettings,

    #[serde(default)]
    pub http: HttpSettings,
}

impl CatalogConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (storefront.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ClientResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading catalog config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ClientResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ClientError::ConfigSaveFailed("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ClientError::ConfigSaveFailed(e.to_string()))?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents).map_err(|e| ClientError::ConfigSaveFailed(e.to_string()))?;

        info!(?path, "Catalog config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ClientResult<()> {
        self.api_base()?;

        validate_page_size(self.paging.page_size)
            .map_err(|e| ClientError::InvalidConfig(e.to_string()))?;

        if self.http.timeout_secs == 0 {
            return Err(ClientError::InvalidConfig(
                "timeout_secs must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Parses the API base URL, requiring an http(s) scheme.
    pub fn api_base(&self) -> ClientResult<Url> {
        let url = Url::parse(&self.source.api_url)?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            other => Err(ClientError::InvalidUrl(format!(
                "API URL must use http or https, got: {}",
                other
            ))),
        }
    }

    /// Applies environment variable overrides.
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from `lookup`, keyed by environment variable name.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup("STOREFRONT_API_URL") {
            debug!(url = %url, "Overriding API URL from environment");
            self.source.api_url = url;
        }

        if let Some(path) = lookup("STOREFRONT_DATASET") {
            debug!(path = %path, "Overriding dataset path from environment");
            self.source.dataset_path = Some(PathBuf::from(path));
        }

        if let Some(source) = lookup("STOREFRONT_SOURCE") {
            match source.parse() {
                Ok(parsed) => self.source.default = parsed,
                Err(_) => warn!(source = %source, "Unknown data source in environment"),
            }
        }

        if let Some(size) = lookup("STOREFRONT_PAGE_SIZE") {
            if let Ok(size) = size.parse::<u32>() {
                self.paging.page_size = size;
            }
        }

        if let Some(timeout) = lookup("STOREFRONT_HTTP_TIMEOUT") {
            if let Ok(secs) = timeout.parse::<u64>() {
                self.http.timeout_secs = secs;
            }
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "storefront", "catalog")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }
}
