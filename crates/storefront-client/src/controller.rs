//! # Product Catalog Controller
//!
//! Owns one [`CatalogState`] and applies the catalog's stimuli to it.
//!
//! ## Stimuli
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Controller Operations                              │
//! │                                                                         │
//! │  Stimulus              Local source            Remote source            │
//! │  ────────              ────────────            ─────────────            │
//! │  load_initial(src)     read dataset            join!(categories, p1)    │
//! │  search(q)             re-filter all           re-filter all            │
//! │  select_category(c)    re-filter all           clear + fetch p1(c)      │
//! │  toggle_sort()         no-op                   flip + clear + fetch p1  │
//! │  load_more()           unsupported             fetch page+1, append     │
//! │                                                                         │
//! │  Every fetch carries the generation it was issued under. A response     │
//! │  whose generation is no longer current is dropped, never applied.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The initial category list is the exception: it survives a newer category
//! switch or sort toggle and is dropped only by a reset (`load_initial`,
//! `dispose`).
//!
//! ## Locking
//! State sits behind a `std::sync::Mutex`. The guard is never held across an
//! `.await`: each operation locks to read/prepare, releases for the request,
//! and locks again to apply the response. Checking and setting the loading
//! flag happen under one guard, so two concurrent `load_more` calls issue one
//! request.

use std::sync::{Mutex, MutexGuard, PoisonError};
use storefront_core::{
    CatalogCommand, CatalogSnapshot, CatalogState, CoreResult, DataSource, Product, ProductId,
};
use tracing::{debug, info, warn};

use crate::config::CatalogConfig;
use crate::error::{ClientError, ClientResult};
use crate::http::HttpProductSource;
use crate::local::LocalDataset;
use crate::source::{PageQuery, ProductSource};

/// Result of a [`ProductCatalogController::load_more`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadMoreOutcome {
    /// The next page arrived; carries the number of appended products.
    Appended(usize),
    /// Every page is already loaded.
    Exhausted,
    /// Another load is in flight; nothing was requested.
    InFlight,
    /// The local source has no pages.
    Unsupported,
    /// The response arrived after a newer stimulus and was dropped.
    Stale,
    /// The request failed; the message is also stored in the snapshot.
    Failed(String),
}

enum PageFetch {
    Applied(usize),
    Stale,
    Failed(String),
}

/// The catalog controller.
pub struct ProductCatalogController<S> {
    source: S,
    dataset: LocalDataset,
    state: Mutex<CatalogState>,
}

impl ProductCatalogController<HttpProductSource> {
    /// Builds a controller talking to the configured API and dataset.
    ///
    /// The controller starts idle; call [`load_initial`](Self::load_initial).
    pub fn from_config(config: &CatalogConfig) -> ClientResult<Self> {
        config.validate()?;
        Ok(Self::new(
            HttpProductSource::new(config)?,
            LocalDataset::from_config(config),
            config.source.default,
            config.paging.page_size,
        ))
    }
}

impl<S: ProductSource> ProductCatalogController<S> {
    pub fn new(source: S, dataset: LocalDataset, initial: DataSource, page_size: u32) -> Self {
        ProductCatalogController {
            source,
            dataset,
            state: Mutex::new(CatalogState::new(initial, page_size)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, CatalogState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Read-only view for the presentation layer.
    pub fn snapshot(&self) -> CatalogSnapshot {
        self.lock().snapshot()
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// Discards the working set and loads from `source`.
    pub async fn load_initial(&self, source: DataSource) -> CatalogSnapshot {
        let generation = {
            let mut state = self.lock();
            let generation = state.reset(source);
            state.begin_load();
            generation
        };
        info!(%source, generation, "Loading catalog");

        match source {
            DataSource::Local => self.load_local(generation),
            DataSource::Remote => self.load_remote(generation).await,
        }

        self.snapshot()
    }

    /// Narrows the view to products whose title or description contains
    /// `query`, case-insensitively, within the selected category.
    pub fn search(&self, query: &str) -> CatalogSnapshot {
        let mut state = self.lock();
        state.set_search(query);
        debug!(query, matches = state.filtered().len(), "Search applied");
        state.snapshot()
    }

    /// Selects a category and clears the search query.
    ///
    /// Local: re-filters in place. Remote: the server is the source of truth
    /// per category, so results are cleared and page 1 is fetched.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::UnknownCategory`](storefront_core::CoreError) for
    /// a category outside the snapshot's `categories`.
    pub async fn select_category(&self, category: &str) -> CoreResult<CatalogSnapshot> {
        let (generation, query) = {
            let mut state = self.lock();
            state.select_category(category)?;
            if !state.source().is_remote() {
                return Ok(state.snapshot());
            }
            let generation = state.invalidate();
            state.clear_results();
            state.begin_load();
            (generation, PageQuery::for_state(&state, 1))
        };
        info!(category, generation, "Category selected, refetching");

        self.fetch_page(generation, query).await;
        Ok(self.snapshot())
    }

    /// Flips the sort order and refetches page 1 with the new order.
    ///
    /// The local source has no sort control; this is a no-op there.
    pub async fn toggle_sort(&self) -> CatalogSnapshot {
        let (generation, query) = {
            let mut state = self.lock();
            if !state.source().is_remote() {
                debug!("Sort toggle ignored for local source");
                return state.snapshot();
            }
            let generation = state.invalidate();
            let order = state.toggle_sort();
            state.clear_results();
            state.begin_load();
            debug!(%order, generation, "Sort order toggled");
            (generation, PageQuery::for_state(&state, 1))
        };

        self.fetch_page(generation, query).await;
        self.snapshot()
    }

    /// Fetches the next page and appends it.
    ///
    /// Does nothing when every page is loaded or a load is already in flight.
    pub async fn load_more(&self) -> LoadMoreOutcome {
        let (generation, query) = {
            let mut state = self.lock();
            if !state.source().is_remote() {
                return LoadMoreOutcome::Unsupported;
            }
            if state.is_loading() {
                debug!(page = state.page(), "load_more skipped, load in flight");
                return LoadMoreOutcome::InFlight;
            }
            let Some(next) = state.next_page() else {
                return LoadMoreOutcome::Exhausted;
            };
            state.begin_load();
            (state.generation(), PageQuery::for_state(&state, next))
        };

        match self.fetch_page(generation, query).await {
            PageFetch::Applied(count) => LoadMoreOutcome::Appended(count),
            PageFetch::Stale => LoadMoreOutcome::Stale,
            PageFetch::Failed(message) => LoadMoreOutcome::Failed(message),
        }
    }

    /// Returns the navigation command for a product in the filtered view.
    pub fn open_product(&self, id: ProductId) -> Option<CatalogCommand> {
        self.lock().open_product(id)
    }

    /// Fetches the full record for the detail view.
    ///
    /// The local source answers from the working set.
    pub async fn product_detail(&self, id: ProductId) -> ClientResult<Product> {
        {
            let state = self.lock();
            if !state.source().is_remote() {
                return state
                    .all()
                    .iter()
                    .find(|p| p.id == id)
                    .cloned()
                    .ok_or(ClientError::ProductNotFound(id));
            }
        }
        self.source.fetch_product(id).await
    }

    /// Tears the catalog down. Responses still in flight are dropped.
    pub fn dispose(&self) {
        let mut state = self.lock();
        let source = state.source();
        let generation = state.reset(source);
        debug!(generation, "Catalog disposed");
    }

    // =========================================================================
    // Loading
    // =========================================================================

    fn load_local(&self, generation: u64) {
        let result = self.dataset.load();

        let mut state = self.lock();
        if state.generation() != generation {
            debug!(generation, "Dropping stale local dataset");
            return;
        }
        match result {
            Ok(products) => {
                info!(count = products.len(), "Local dataset loaded");
                state.replace_products(products);
            }
            Err(e) => {
                warn!(error = %e, "Local dataset rejected");
                state.fail_and_clear(e.to_string());
            }
        }
    }

    async fn load_remote(&self, generation: u64) {
        let (session, query) = {
            let state = self.lock();
            (state.session(), PageQuery::for_state(&state, 1))
        };

        let (categories, page) = tokio::join!(
            self.source.fetch_categories(),
            self.source.fetch_page(&query)
        );

        let mut state = self.lock();
        if state.session() != session {
            debug!(generation, "Dropping initial load from a previous session");
            return;
        }

        // The category list is independent of category and sort.
        if state.generation() != generation {
            if let Ok(categories) = categories {
                state.set_server_categories(categories);
            }
            debug!(generation, "Dropping stale initial page");
            return;
        }

        let mut first_error = None;
        match page {
            Ok(page) => {
                info!(count = page.products.len(), total = page.total, "First page loaded");
                state.append_page(query.page, page.total, page.products);
            }
            Err(e) => first_error = Some(e),
        }
        match categories {
            Ok(categories) => state.set_server_categories(categories),
            Err(e) => {
                first_error.get_or_insert(e);
            }
        }

        if let Some(e) = first_error {
            warn!(error = %e, "Initial load failed");
            state.fail(e.to_string());
        }
    }

    async fn fetch_page(&self, generation: u64, query: PageQuery) -> PageFetch {
        let result = self.source.fetch_page(&query).await;

        let mut state = self.lock();
        if state.generation() != generation {
            debug!(
                page = query.page,
                generation,
                current = state.generation(),
                "Dropping stale page response"
            );
            return PageFetch::Stale;
        }

        match result {
            Ok(page) => {
                let count = page.products.len();
                state.append_page(query.page, page.total, page.products);
                debug!(page = query.page, count, total_pages = state.total_pages(), "Page appended");
                PageFetch::Applied(count)
            }
            Err(e) => {
                warn!(page = query.page, error = %e, "Page fetch failed");
                let message = e.to_string();
                state.fail(message.clone());
                PageFetch::Failed(message)
            }
        }
    }
}
