//! In-memory listing API for controller tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use storefront_client::{ClientError, ClientResult, PageQuery, ProductPage, ProductSource};
use storefront_core::{Product, ProductId, SortOrder};
use tokio::sync::Semaphore;

pub fn product(id: ProductId, title: &str, category: &str, price: f64) -> Product {
    Product {
        id,
        title: title.to_string(),
        description: Some(format!("{} for everyday use", title)),
        price,
        category: category.to_string(),
        image: format!("https://img.example/{}.png", id),
        rating: None,
        brand: None,
        model: None,
        color: None,
        discount: None,
    }
}

/// `count` products alternating between "shoes" and "hats", priced by id.
pub fn catalog_of(count: u64) -> Vec<Product> {
    (1..=count)
        .map(|id| {
            let category = if id % 2 == 0 { "hats" } else { "shoes" };
            product(id, &format!("Item {}", id), category, id as f64)
        })
        .collect()
}

/// Serves pages out of a fixed product list, filtered and sorted like the
/// real endpoint. Requests can be held at a gate to interleave stimuli.
pub struct MockSource {
    products: Vec<Product>,
    categories: Vec<String>,
    fail_pages: AtomicBool,
    fail_categories: AtomicBool,
    gated: AtomicBool,
    gate: Semaphore,
    requests: Mutex<Vec<PageQuery>>,
}

impl MockSource {
    pub fn new(products: Vec<Product>) -> Self {
        let mut categories: Vec<String> = Vec::new();
        for p in &products {
            if !categories.contains(&p.category) {
                categories.push(p.category.clone());
            }
        }
        MockSource {
            products,
            categories,
            fail_pages: AtomicBool::new(false),
            fail_categories: AtomicBool::new(false),
            gated: AtomicBool::new(false),
            gate: Semaphore::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// Serves `categories` from the category endpoint instead of the tags
    /// found in the products.
    pub fn with_categories(mut self, categories: &[&str]) -> Self {
        self.categories = categories.iter().map(|c| c.to_string()).collect();
        self
    }

    pub fn fail_pages(&self, fail: bool) {
        self.fail_pages.store(fail, Ordering::SeqCst);
    }

    pub fn fail_categories(&self, fail: bool) {
        self.fail_categories.store(fail, Ordering::SeqCst);
    }

    /// Holds every following page request until released.
    pub fn gate_on(&self) {
        self.gated.store(true, Ordering::SeqCst);
    }

    pub fn release(&self, requests: usize) {
        self.gate.add_permits(requests);
    }

    pub fn requests(&self) -> Vec<PageQuery> {
        self.requests.lock().unwrap().clone()
    }

    pub fn requests_for_page(&self, page: u32) -> usize {
        self.requests().iter().filter(|q| q.page == page).count()
    }
}

#[async_trait]
impl ProductSource for MockSource {
    async fn fetch_page(&self, query: &PageQuery) -> ClientResult<ProductPage> {
        self.requests.lock().unwrap().push(query.clone());

        if self.gated.load(Ordering::SeqCst) {
            self.gate.acquire().await.expect("gate closed").forget();
        }
        if self.fail_pages.load(Ordering::SeqCst) {
            return Err(ClientError::Network("connection refused".to_string()));
        }

        let mut matching: Vec<Product> = self
            .products
            .iter()
            .filter(|p| query.category.as_deref().map_or(true, |c| p.category == c))
            .cloned()
            .collect();
        matching.sort_by(|a, b| a.price.total_cmp(&b.price));
        if query.sort == SortOrder::Desc {
            matching.reverse();
        }

        let total = matching.len() as u64;
        let start = ((query.page - 1) * query.limit) as usize;
        let products = matching
            .into_iter()
            .skip(start)
            .take(query.limit as usize)
            .collect();

        Ok(ProductPage { products, total })
    }

    async fn fetch_categories(&self) -> ClientResult<Vec<String>> {
        if self.fail_categories.load(Ordering::SeqCst) {
            return Err(ClientError::Network("categories unavailable".to_string()));
        }
        Ok(self.categories.clone())
    }

    async fn fetch_product(&self, id: ProductId) -> ClientResult<Product> {
        self.products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(ClientError::HttpStatus {
                status: 404,
                url: format!("mock://products/{}", id),
            })
    }
}
