//! # Validation Module
//!
//! Input validation for catalog operations.
//!
//! Product fields are never validated here: prices and ratings are shown as
//! delivered. Only the knobs a caller controls are checked.

use crate::error::{CoreError, ValidationError};
use crate::MAX_PAGE_SIZE;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Validates a configured page size.
///
/// ## Rules
/// - Must be greater than zero
/// - Must not exceed [`MAX_PAGE_SIZE`]
///
/// ## Example
/// ```rust
/// use storefront_core::validation::validate_page_size;
///
/// assert!(validate_page_size(20).is_ok());
/// assert!(validate_page_size(0).is_err());
/// ```
pub fn validate_page_size(page_size: u32) -> ValidationResult<u32> {
    if page_size == 0 {
        return Err(ValidationError::MustBePositive {
            field: "page_size".to_string(),
        });
    }

    if page_size > MAX_PAGE_SIZE {
        return Err(ValidationError::OutOfRange {
            field: "page_size".to_string(),
            min: 1,
            max: MAX_PAGE_SIZE as i64,
        });
    }

    Ok(page_size)
}

/// Checks that `category` is one of the discovered categories.
///
/// The presentation layer only offers discovered categories, so a miss here
/// means the caller is out of sync with the snapshot it rendered.
pub fn validate_category(categories: &[String], category: &str) -> Result<(), CoreError> {
    if category.is_empty() {
        return Err(ValidationError::Required {
            field: "category".to_string(),
        }
        .into());
    }

    if categories.iter().any(|c| c == category) {
        Ok(())
    } else {
        Err(CoreError::UnknownCategory(category.to_string()))
    }
}

/// Computes the number of pages needed for `total` items.
///
/// `ceil(total / page_size)`; a zero page size yields zero pages.
pub fn total_pages(total: u64, page_size: u32) -> u32 {
    if page_size == 0 {
        return 0;
    }
    let pages = total.div_ceil(u64::from(page_size));
    u32::try_from(pages).unwrap_or(u32::MAX)
}
