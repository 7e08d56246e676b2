//! # Local Dataset
//!
//! Parsing for the bundled product dataset.
//!
//! ## Expected Shape
//! ```json
//! {
//!   "products": [
//!     { "id": 1, "title": "Red Shoe", "category": "shoes", "price": 20 }
//!   ]
//! }
//! ```
//!
//! Anything else (no `products`, `products` not an array, an entry missing
//! `id`/`title`/`price`) is a [`CoreError::DataFormat`].

use serde_json::Value;

use crate::error::{CoreError, CoreResult};
use crate::types::Product;

/// Parses a dataset document into normalized products.
pub fn parse_local_dataset(document: &str) -> CoreResult<Vec<Product>> {
    let value: Value = serde_json::from_str(document)
        .map_err(|e| CoreError::data_format(format!("not valid JSON: {}", e)))?;
    products_from_value(value)
}

/// Extracts and normalizes the `products` array from a parsed document.
pub fn products_from_value(mut value: Value) -> CoreResult<Vec<Product>> {
    let entries = match value.get_mut("products").map(Value::take) {
        Some(Value::Array(entries)) => entries,
        Some(_) => return Err(CoreError::data_format("`products` must be an array")),
        None => return Err(CoreError::data_format("missing `products` field")),
    };

    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| {
            serde_json::from_value::<Product>(entry)
                .map(normalize)
                .map_err(|e| CoreError::data_format(format!("product at index {}: {}", index, e)))
        })
        .collect()
}

/// Fills the defaults the bundled dataset relies on.
///
/// - `discount` defaults to `0`
/// - `color` defaults to `""`
fn normalize(mut product: Product) -> Product {
    product.discount.get_or_insert(0.0);
    product.color.get_or_insert_with(String::new);
    product
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_products_array() {
        let products = parse_local_dataset(
            r#"{"products":[
                {"id":1,"title":"Red Shoe","category":"shoes","price":20},
                {"id":2,"title":"Blue Hat","category":"hats","price":10,"discount":15,"brand":"Acme"}
            ]}"#,
        )
        .unwrap();

        assert_eq!(products.len(), 2);
        assert_eq!(products[0].discount, Some(0.0));
        assert_eq!(products[0].color.as_deref(), Some(""));
        assert_eq!(products[1].discount, Some(15.0));
        assert_eq!(products[1].brand.as_deref(), Some("Acme"));
    }

    #[test]
    fn test_rejects_non_array_products() {
        let err = parse_local_dataset(r#"{"products":"bad"}"#).unwrap_err();
        assert!(matches!(err, CoreError::DataFormat { .. }));
        assert!(err.to_string().contains("must be an array"));
    }

    #[test]
    fn test_rejects_missing_products() {
        let err = parse_local_dataset(r#"{"items":[]}"#).unwrap_err();
        assert!(err.to_string().contains("missing `products`"));
    }

    #[test]
    fn test_rejects_invalid_json() {
        let err = parse_local_dataset("{not json").unwrap_err();
        assert!(matches!(err, CoreError::DataFormat { .. }));
    }

    #[test]
    fn test_rejects_entry_without_title() {
        let err = parse_local_dataset(r#"{"products":[{"id":1,"price":3}]}"#).unwrap_err();
        assert!(err.to_string().contains("index 0"));
    }

    #[test]
    fn test_empty_products_is_valid() {
        assert!(parse_local_dataset(r#"{"products":[]}"#).unwrap().is_empty());
    }
}
