//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                    │
//! │  ├── CoreError        - Catalog domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  storefront-client errors (separate crate)                             │
//! │  └── ClientError      - Network, config and dataset I/O failures       │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ClientError → snapshot.error      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core catalog errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoreError {
    /// The local dataset does not have the `{ products: [...] }` shape.
    ///
    /// ## When This Occurs
    /// - The document is not JSON
    /// - `products` is missing or is not an array
    /// - An entry in `products` is missing a required field
    #[error("Invalid local data format: {reason}")]
    DataFormat { reason: String },

    /// A category outside the discovered set was selected.
    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    /// A caller-supplied value was rejected.
    #[error("Invalid input: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Creates a data format error.
    pub fn data_format(reason: impl Into<String>) -> Self {
        CoreError::DataFormat {
            reason: reason.into(),
        }
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Rejections of caller-supplied values (page size, category, source name).
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    /// The value is empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Page size or similar bound outside `min..=max`.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Zero where a count is expected.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g., malformed URL).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Result alias used throughout storefront-core.
pub type CoreResult<T> = Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_format_message() {
        let err = CoreError::data_format("`products` must be an array");
        assert_eq!(
            err.to_string(),
            "Invalid local data format: `products` must be an array"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::MustBePositive {
            field: "page_size".to_string(),
        };
        assert_eq!(err.to_string(), "page_size must be positive");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "category".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
