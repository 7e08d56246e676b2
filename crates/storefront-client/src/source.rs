//! # Product Sources
//!
//! The seam between the controller and the remote listing endpoint.
//!
//! ## Request Contract
//! ```text
//! GET {base}/products?page={n}&limit={size}[&type={category}][&sort={asc|desc}]
//!     → { "products": Product[], "total": number }
//! GET {base}/products/category
//!     → string[]
//! GET {base}/products/{id}
//!     → Product
//! ```

use async_trait::async_trait;
use serde::Deserialize;
use std::sync::Arc;
use storefront_core::{CatalogState, Product, ProductId, SortOrder, ALL_CATEGORY};

use crate::error::ClientResult;

/// Parameters of one page request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageQuery {
    /// 1-based page number.
    pub page: u32,
    /// Page size (`limit`).
    pub limit: u32,
    /// Category filter; `None` for "all".
    pub category: Option<String>,
    pub sort: SortOrder,
}

impl PageQuery {
    /// Builds the query for `page` under the state's category and sort order.
    pub fn for_state(state: &CatalogState, page: u32) -> Self {
        let category = state.selected_category();
        PageQuery {
            page,
            limit: state.page_size(),
            category: (category != ALL_CATEGORY).then(|| category.to_string()),
            sort: state.sort_order(),
        }
    }
}

/// One page of the remote listing.
///
/// Missing fields default to an empty page.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ProductPage {
    #[serde(default)]
    pub products: Vec<Product>,
    #[serde(default)]
    pub total: u64,
}

/// A paginated, server-sorted product listing.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Fetches one page of products.
    async fn fetch_page(&self, query: &PageQuery) -> ClientResult<ProductPage>;

    /// Fetches the list of category tags.
    async fn fetch_categories(&self) -> ClientResult<Vec<String>>;

    /// Fetches a single product for the detail view.
    async fn fetch_product(&self, id: ProductId) -> ClientResult<Product>;
}

#[async_trait]
impl<T: ProductSource + ?Sized> ProductSource for Arc<T> {
    async fn fetch_page(&self, query: &PageQuery) -> ClientResult<ProductPage> {
        (**self).fetch_page(query).await
    }

    async fn fetch_categories(&self) -> ClientResult<Vec<String>> {
        (**self).fetch_categories().await
    }

    async fn fetch_product(&self, id: ProductId) -> ClientResult<Product> {
        (**self).fetch_product(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::DataSource;

    #[test]
    fn test_query_omits_all_category() {
        let state = CatalogState::new(DataSource::Remote, 20);
        let query = PageQuery::for_state(&state, 1);
        assert_eq!(query.category, None);
        assert_eq!(query.limit, 20);
        assert_eq!(query.sort, SortOrder::Asc);
    }

    #[test]
    fn test_page_defaults_when_fields_missing() {
        let page: ProductPage = serde_json::from_str("{}").unwrap();
        assert!(page.products.is_empty());
        assert_eq!(page.total, 0);
    }
}
