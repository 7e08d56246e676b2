//! # storefront-client: Catalog I/O and Controller
//!
//! This crate connects the pure catalog state in `storefront-core` to the
//! outside world: the paginated listing API, the bundled dataset, and the
//! configuration file.
//!
//! ## Data Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Catalog Data Flow                                │
//! │                                                                         │
//! │  Presentation ──stimulus──► ProductCatalogController                   │
//! │       ▲                            │                                    │
//! │       │                ┌───────────┴───────────┐                        │
//! │       │                ▼                       ▼                        │
//! │       │        HttpProductSource         LocalDataset                   │
//! │       │        GET /products?page=..     { products: [...] }            │
//! │       │                │                       │                        │
//! │       │                └───────────┬───────────┘                        │
//! │       │                            ▼                                    │
//! │       └──── CatalogSnapshot ◄── CatalogState (storefront-core)          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`controller`] - `ProductCatalogController`, the only mutation surface
//! - [`source`] - `ProductSource` trait and request/response types
//! - [`http`] - `HttpProductSource` (reqwest)
//! - [`local`] - `LocalDataset` loading
//! - [`config`] - TOML + environment configuration
//! - [`error`] - Client error types
//!
//! ## Usage
//!
//! ```rust,no_run
//! use storefront_client::{CatalogConfig, ProductCatalogController};
//! use storefront_core::DataSource;
//!
//! # async fn run() -> Result<(), storefront_client::ClientError> {
//! let config = CatalogConfig::load(None)?;
//! let catalog = ProductCatalogController::from_config(&config)?;
//!
//! let snapshot = catalog.load_initial(DataSource::Remote).await;
//! println!("{} of {} pages", snapshot.page, snapshot.total_pages);
//!
//! catalog.load_more().await;
//! let narrowed = catalog.search("backpack");
//! # let _ = narrowed;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod controller;
pub mod error;
pub mod http;
pub mod local;
pub mod source;

pub use config::CatalogConfig;
pub use controller::{LoadMoreOutcome, ProductCatalogController};
pub use error::{ClientError, ClientResult};
pub use http::HttpProductSource;
pub use local::LocalDataset;
pub use source::{PageQuery, ProductPage, ProductSource};
