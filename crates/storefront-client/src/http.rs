//! # HTTP Product Source
//!
//! [`ProductSource`] backed by the remote listing API.

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use storefront_core::{Product, ProductId};
use tracing::debug;
use url::Url;

use crate::config::CatalogConfig;
use crate::error::{ClientError, ClientResult};
use crate::source::{PageQuery, ProductPage, ProductSource};

/// Listing API client.
#[derive(Debug, Clone)]
pub struct HttpProductSource {
    client: Client,
    base_url: Url,
}

impl HttpProductSource {
    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid or the HTTP client cannot
    /// be constructed.
    pub fn new(config: &CatalogConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(config.http.timeout())
            .user_agent(config.http.user_agent.clone())
            .build()
            .map_err(|e| ClientError::InvalidConfig(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.api_base()?,
        })
    }

    /// `{base}/products?page=..&limit=..[&type=..]&sort=..`
    pub fn page_url(&self, query: &PageQuery) -> ClientResult<Url> {
        let mut url = self.products_url(&[])?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs.append_pair("page", &query.page.to_string());
            pairs.append_pair("limit", &query.limit.to_string());
            if let Some(category) = &query.category {
                pairs.append_pair("type", category);
            }
            pairs.append_pair("sort", query.sort.as_query_value());
        }
        Ok(url)
    }

    /// `{base}/products/category`
    pub fn categories_url(&self) -> ClientResult<Url> {
        self.products_url(&["category"])
    }

    /// `{base}/products/{id}`
    pub fn product_url(&self, id: ProductId) -> ClientResult<Url> {
        self.products_url(&[&id.to_string()])
    }

    fn products_url(&self, tail: &[&str]) -> ClientResult<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .push("products")
            .extend(tail);
        Ok(url)
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> ClientResult<T> {
        debug!(url = %url, "GET");

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::HttpStatus {
                status: status.as_u16(),
                url: url.to_string(),
            });
        }

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    async fn fetch_page(&self, query: &PageQuery) -> ClientResult<ProductPage> {
        let url = self.page_url(query)?;
        self.get_json(url).await
    }

    async fn fetch_categories(&self) -> ClientResult<Vec<String>> {
        let url = self.categories_url()?;
        self.get_json(url).await
    }

    async fn fetch_product(&self, id: ProductId) -> ClientResult<Product> {
        let url = self.product_url(id)?;
        self.get_json(url).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::SortOrder;

    fn source(base: &str) -> HttpProductSource {
        let mut config = CatalogConfig::default();
        config.source.api_url = base.to_string();
        HttpProductSource::new(&config).unwrap()
    }

    #[test]
    fn test_page_url_with_category_and_sort() {
        let query = PageQuery {
            page: 2,
            limit: 20,
            category: Some("shoes".to_string()),
            sort: SortOrder::Desc,
        };
        let url = source("https://fakestoreapi.com").page_url(&query).unwrap();
        assert_eq!(
            url.as_str(),
            "https://fakestoreapi.com/products?page=2&limit=20&type=shoes&sort=desc"
        );
    }

    #[test]
    fn test_page_url_without_category() {
        let query = PageQuery {
            page: 1,
            limit: 20,
            category: None,
            sort: SortOrder::Asc,
        };
        let url = source("http://localhost:8080/api/").page_url(&query).unwrap();
        assert_eq!(
            url.as_str(),
            "http://localhost:8080/api/products?page=1&limit=20&sort=asc"
        );
    }

    #[test]
    fn test_category_is_query_encoded() {
        let query = PageQuery {
            page: 1,
            limit: 20,
            category: Some("men's clothing".to_string()),
            sort: SortOrder::Asc,
        };
        let url = source("https://fakestoreapi.com").page_url(&query).unwrap();
        assert!(url.as_str().contains("type=men%27s+clothing"));
    }

    #[test]
    fn test_categories_and_detail_urls() {
        let source = source("https://fakestoreapi.com");
        assert_eq!(
            source.categories_url().unwrap().as_str(),
            "https://fakestoreapi.com/products/category"
        );
        assert_eq!(
            source.product_url(7).unwrap().as_str(),
            "https://fakestoreapi.com/products/7"
        );
    }
}
