//! # Catalog State
//!
//! The product working set and the views derived from it.
//!
//! ## Derivation Rules
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Derivations                              │
//! │                                                                         │
//! │   all ──────┬──► categories = ["all"] ++ distinct(server ++ all.cat)    │
//! │             │                                                           │
//! │             └──► filtered   = all                                       │
//! │                               .filter(category == selected | "all")     │
//! │                               .filter(title|description ∋ query)        │
//! │                                                                         │
//! │   `filtered` and `categories` are recomputed after every mutation of    │
//! │   `all`, `selected_category` or `search_query`. Nothing else writes     │
//! │   them.                                                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Generations
//! Every stimulus that discards the working set (new source, remote category
//! switch, sort toggle, teardown) bumps `generation`. A fetch records the
//! generation it was issued under; the I/O layer drops any response whose
//! generation no longer matches.
//!
//! `session` only moves on a full reset. Responses that describe the source
//! rather than a listing (the category list) are checked against it instead.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CoreResult;
use crate::types::{DataSource, LoadState, Product, ProductId, SortOrder};
use crate::validation::{total_pages, validate_category};
use crate::{ALL_CATEGORY, NO_RESULTS_PLACEHOLDER};

// =============================================================================
// Pure Derivations
// =============================================================================

/// Narrows `all` by category and search query.
///
/// - `category == "all"` keeps every category
/// - the query is matched case-insensitively against title or description
/// - an empty query keeps everything in the category
pub fn filter_products(all: &[Product], category: &str, query: &str) -> Vec<Product> {
    let needle = query.to_lowercase();
    all.iter()
        .filter(|p| category == ALL_CATEGORY || p.category == category)
        .filter(|p| p.matches_lowercase(&needle))
        .cloned()
        .collect()
}

/// Builds the category list: `"all"` first, then each distinct category once
/// in order of discovery.
///
/// `server` categories are listed before those discovered in `all`. Empty
/// tags and the sentinel itself are skipped.
pub fn derive_categories(server: &[String], all: &[Product]) -> Vec<String> {
    let mut categories = vec![ALL_CATEGORY.to_string()];
    let discovered = server
        .iter()
        .map(String::as_str)
        .chain(all.iter().map(|p| p.category.as_str()));

    for category in discovered {
        if category.is_empty() || categories.iter().any(|c| c == category) {
            continue;
        }
        categories.push(category.to_string());
    }
    categories
}

// =============================================================================
// Catalog State
// =============================================================================

/// The state owned by one catalog controller.
#[derive(Debug, Clone)]
pub struct CatalogState {
    source: DataSource,
    page_size: u32,
    all: Vec<Product>,
    filtered: Vec<Product>,
    server_categories: Vec<String>,
    categories: Vec<String>,
    selected_category: String,
    search_query: String,
    sort_order: SortOrder,
    page: u32,
    total_pages: u32,
    first_page_loaded: bool,
    load_state: LoadState,
    error: Option<String>,
    generation: u64,
    session: u64,
    loaded_at: Option<DateTime<Utc>>,
}

impl CatalogState {
    /// Creates an idle, empty state for `source`.
    pub fn new(source: DataSource, page_size: u32) -> Self {
        CatalogState {
            source,
            page_size,
            all: Vec::new(),
            filtered: Vec::new(),
            server_categories: Vec::new(),
            categories: vec![ALL_CATEGORY.to_string()],
            selected_category: ALL_CATEGORY.to_string(),
            search_query: String::new(),
            sort_order: SortOrder::default(),
            page: 1,
            total_pages: 1,
            first_page_loaded: false,
            load_state: LoadState::Idle,
            error: None,
            generation: 0,
            session: 0,
            loaded_at: None,
        }
    }

    /// Discards everything and switches to `source`.
    ///
    /// Keeps the generation and session counters monotonic and bumps both.
    /// Returns the new generation.
    pub fn reset(&mut self, source: DataSource) -> u64 {
        let generation = self.generation + 1;
        let session = self.session + 1;
        *self = CatalogState::new(source, self.page_size);
        self.generation = generation;
        self.session = session;
        generation
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn source(&self) -> DataSource {
        self.source
    }

    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Every product known to the catalog.
    pub fn all(&self) -> &[Product] {
        &self.all
    }

    /// The category- and query-narrowed view.
    pub fn filtered(&self) -> &[Product] {
        &self.filtered
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn selected_category(&self) -> &str {
        &self.selected_category
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn sort_order(&self) -> SortOrder {
        self.sort_order
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn session(&self) -> u64 {
        self.session
    }

    /// Returns the page `load_more` would fetch, or `None` when exhausted.
    ///
    /// Until page 1 of the current listing has arrived, that is page 1.
    pub fn next_page(&self) -> Option<u32> {
        if !self.first_page_loaded {
            return Some(1);
        }
        (self.page < self.total_pages).then(|| self.page + 1)
    }

    /// Finds a product in the filtered view.
    pub fn find_in_view(&self, id: ProductId) -> Option<&Product> {
        self.filtered.iter().find(|p| p.id == id)
    }

    // =========================================================================
    // Stimuli
    // =========================================================================

    /// Sets the search query and re-derives the view from `all`.
    pub fn set_search(&mut self, query: &str) {
        self.search_query = query.to_string();
        self.refilter();
    }

    /// Selects a discovered category and clears the search query.
    pub fn select_category(&mut self, category: &str) -> CoreResult<()> {
        validate_category(&self.categories, category)?;
        self.selected_category = category.to_string();
        self.search_query.clear();
        self.refilter();
        Ok(())
    }

    /// Flips the sort order and returns the new one.
    pub fn toggle_sort(&mut self) -> SortOrder {
        self.sort_order = self.sort_order.toggled();
        self.sort_order
    }

    /// Bumps the generation, invalidating every in-flight request.
    pub fn invalidate(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Drops loaded products and rewinds to page 1 ahead of a fresh fetch.
    ///
    /// Discovered categories survive so the selector stays populated.
    pub fn clear_results(&mut self) {
        self.all.clear();
        self.filtered.clear();
        self.page = 1;
        self.total_pages = 1;
        self.first_page_loaded = false;
    }

    /// Marks a load as in flight.
    pub fn begin_load(&mut self) {
        self.load_state = LoadState::Loading;
    }

    /// Replaces the working set (local source).
    pub fn replace_products(&mut self, products: Vec<Product>) {
        self.all = products;
        self.page = 1;
        self.total_pages = 1;
        self.first_page_loaded = true;
        self.rederive();
        self.finish_ok();
    }

    /// Records server-provided categories.
    pub fn set_server_categories(&mut self, categories: Vec<String>) {
        self.server_categories = categories;
        self.categories = derive_categories(&self.server_categories, &self.all);
    }

    /// Appends one fetched page. Never replaces earlier pages.
    pub fn append_page(&mut self, page: u32, total: u64, products: Vec<Product>) {
        self.total_pages = total_pages(total, self.page_size);
        self.page = page;
        self.first_page_loaded = true;
        self.all.extend(products);
        self.rederive();
        self.finish_ok();
    }

    /// Records a failed load.
    pub fn fail(&mut self, message: impl Into<String>) {
        self.load_state = LoadState::Error;
        self.error = Some(message.into());
    }

    /// Records a failed initial load: nothing is shown but the error.
    pub fn fail_and_clear(&mut self, message: impl Into<String>) {
        self.all.clear();
        self.filtered.clear();
        self.fail(message);
    }

    // =========================================================================
    // Presentation
    // =========================================================================

    /// Captures a read-only snapshot for rendering.
    pub fn snapshot(&self) -> CatalogSnapshot {
        let placeholder = (self.load_state == LoadState::Ready && self.filtered.is_empty())
            .then(|| NO_RESULTS_PLACEHOLDER.to_string());

        CatalogSnapshot {
            source: self.source,
            filtered: self.filtered.clone(),
            categories: self.categories.clone(),
            selected_category: self.selected_category.clone(),
            search_query: self.search_query.clone(),
            sort_order: self.sort_order,
            page: self.page,
            total_pages: self.total_pages,
            state: self.load_state,
            loading: self.is_loading(),
            error: self.error.clone(),
            placeholder,
            loaded_at: self.loaded_at,
        }
    }

    /// Builds the navigation command for a product in the view.
    pub fn open_product(&self, id: ProductId) -> Option<CatalogCommand> {
        self.find_in_view(id)
            .cloned()
            .map(|product| CatalogCommand::ShowProductDetail { product })
    }

    fn finish_ok(&mut self) {
        self.load_state = LoadState::Ready;
        self.error = None;
        self.loaded_at = Some(Utc::now());
    }

    fn rederive(&mut self) {
        self.categories = derive_categories(&self.server_categories, &self.all);
        self.refilter();
    }

    fn refilter(&mut self) {
        self.filtered = filter_products(&self.all, &self.selected_category, &self.search_query);
    }
}

// =============================================================================
// Presentation Boundary
// =============================================================================

/// Read-only view handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogSnapshot {
    pub source: DataSource,
    pub filtered: Vec<Product>,
    pub categories: Vec<String>,
    pub selected_category: String,
    pub search_query: String,
    pub sort_order: SortOrder,
    pub page: u32,
    pub total_pages: u32,
    pub state: LoadState,
    pub loading: bool,
    pub error: Option<String>,
    /// Set when a load succeeded but nothing matches.
    pub placeholder: Option<String>,
    pub loaded_at: Option<DateTime<Utc>>,
}

/// Commands the controller hands to the presentation layer to interpret.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CatalogCommand {
    /// Navigate to the detail view of `product`.
    ShowProductDetail { product: Product },
}
