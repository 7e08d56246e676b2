//! # storefront-core: Pure Catalog Logic
//!
//! This crate is the **heart** of the storefront catalog. It contains the
//! list filtering, category discovery and pagination arithmetic as pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Storefront Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation (storefront-cli)                   │   │
//! │  │    Search box ──► Category chips ──► Product list ──► Detail    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ CatalogSnapshot / CatalogCommand       │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │          storefront-client (ProductCatalogController)           │   │
//! │  │      HTTP listing endpoint, local dataset file, generations     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │              ★ storefront-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │  catalog  │  │  dataset  │  │ validation│  │   │
//! │  │   │  Product  │  │  filters  │  │  {products│  │ page size │  │   │
//! │  │   │ SortOrder │  │  paging   │  │   : [..]} │  │ category  │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO NETWORK • PURE FUNCTIONS                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Rating, SortOrder, DataSource)
//! - [`catalog`] - `CatalogState` and the derivation functions behind it
//! - [`dataset`] - Local dataset parsing and normalization
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::dataset::parse_local_dataset;
//! use storefront_core::{CatalogState, DataSource};
//!
//! let products = parse_local_dataset(
//!     r#"{"products":[{"id":1,"title":"Red Shoe","category":"shoes","price":20}]}"#,
//! )
//! .unwrap();
//!
//! let mut state = CatalogState::new(DataSource::Local, 20);
//! state.replace_products(products);
//! state.set_search("red");
//!
//! assert_eq!(state.filtered().len(), 1);
//! assert_eq!(state.categories(), ["all", "shoes"]);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod catalog;
pub mod dataset;
pub mod error;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use catalog::{CatalogCommand, CatalogSnapshot, CatalogState};
pub use error::{CoreError, CoreResult, ValidationError};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Sentinel category that selects every product.
///
/// Always the first entry of the category list.
pub const ALL_CATEGORY: &str = "all";

/// Number of products the listing endpoint returns per page.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Upper bound accepted for a configured page size.
pub const MAX_PAGE_SIZE: u32 = 100;

/// Text shown in place of the list when the filtered view is empty.
pub const NO_RESULTS_PLACEHOLDER: &str = "No products found";
