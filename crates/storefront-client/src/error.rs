//! # Client Error Types
//!
//! Error types for catalog I/O.
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Client Error Categories                            │
//! │                                                                         │
//! │  ┌─────────────────┐  ┌─────────────────┐  ┌─────────────────────────┐ │
//! │  │  Configuration  │  │    Network      │  │     Data                │ │
//! │  │                 │  │                 │  │                         │ │
//! │  │  InvalidConfig  │  │  Network        │  │  Core(DataFormat)       │ │
//! │  │  InvalidUrl     │  │  HttpStatus     │  │  Deserialization        │ │
//! │  │  ConfigLoad/Save│  │  Timeout        │  │  DatasetUnavailable     │ │
//! │  └─────────────────┘  └─────────────────┘  └─────────────────────────┘ │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The controller stores `error.to_string()` in the snapshot; there is no
//! separate user-facing message table.

use storefront_core::{CoreError, ProductId};
use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors raised by sources, configuration, and the controller.
#[derive(Debug, Error)]
pub enum ClientError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid API base URL.
    #[error("Invalid API URL: {0}")]
    InvalidUrl(String),

    /// Failed to load config file.
    #[error("Failed to load config: {0}")]
    ConfigLoadFailed(String),

    /// Failed to save config file.
    #[error("Failed to save config: {0}")]
    ConfigSaveFailed(String),

    // =========================================================================
    // Network Errors
    // =========================================================================
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("Request to {url} failed with status {status}")]
    HttpStatus { status: u16, url: String },

    /// The request timed out.
    #[error("Request timed out: {0}")]
    Timeout(String),

    /// The response body was not the expected JSON.
    #[error("Unexpected response body: {0}")]
    Deserialization(String),

    // =========================================================================
    // Data Errors
    // =========================================================================
    /// The bundled dataset file could not be read.
    #[error("Local dataset unavailable: {0}")]
    DatasetUnavailable(String),

    /// Product is not part of the working set.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Domain error from storefront-core.
    #[error(transparent)]
    Core(#[from] CoreError),
}

// =============================================================================
// Error Conversions
// =============================================================================

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ClientError::Timeout(err.to_string())
        } else if err.is_decode() {
            ClientError::Deserialization(err.to_string())
        } else if let Some(status) = err.status() {
            ClientError::HttpStatus {
                status: status.as_u16(),
                url: err.url().map(|u| u.to_string()).unwrap_or_default(),
            }
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

impl From<url::ParseError> for ClientError {
    fn from(err: url::ParseError) -> Self {
        ClientError::InvalidUrl(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Deserialization(err.to_string())
    }
}

impl From<std::io::Error> for ClientError {
    fn from(err: std::io::Error) -> Self {
        ClientError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::de::Error> for ClientError {
    fn from(err: toml::de::Error) -> Self {
        ClientError::ConfigLoadFailed(err.to_string())
    }
}

impl From<toml::ser::Error> for ClientError {
    fn from(err: toml::ser::Error) -> Self {
        ClientError::ConfigSaveFailed(err.to_string())
    }
}

// =============================================================================
// Error Categorization
// =============================================================================

impl ClientError {
    /// Returns true for transport failures (the `NetworkError` kind).
    pub fn is_network(&self) -> bool {
        matches!(
            self,
            ClientError::Network(_)
                | ClientError::HttpStatus { .. }
                | ClientError::Timeout(_)
                | ClientError::Deserialization(_)
        )
    }

    /// Returns true when the local dataset is malformed (the `DataFormatError` kind).
    pub fn is_data_format(&self) -> bool {
        matches!(self, ClientError::Core(CoreError::DataFormat { .. }))
    }

    /// Returns true if this error indicates a configuration problem.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            ClientError::InvalidConfig(_)
                | ClientError::InvalidUrl(_)
                | ClientError::ConfigLoadFailed(_)
                | ClientError::ConfigSaveFailed(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert!(ClientError::Network("connection refused".into()).is_network());
        assert!(ClientError::HttpStatus {
            status: 503,
            url: "http://x".into()
        }
        .is_network());
        assert!(ClientError::Core(CoreError::data_format("bad")).is_data_format());
        assert!(!ClientError::InvalidConfig("x".into()).is_network());
        assert!(ClientError::InvalidUrl("x".into()).is_config_error());
    }

    #[test]
    fn test_core_error_is_transparent() {
        let err: ClientError = CoreError::data_format("`products` must be an array").into();
        assert_eq!(
            err.to_string(),
            "Invalid local data format: `products` must be an array"
        );
    }

    #[test]
    fn test_status_message() {
        let err = ClientError::HttpStatus {
            status: 404,
            url: "https://fakestoreapi.com/products".into(),
        };
        assert_eq!(
            err.to_string(),
            "Request to https://fakestoreapi.com/products failed with status 404"
        );
    }
}
