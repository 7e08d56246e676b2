//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │   SortOrder     │   │   DataSource    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id             │   │  Asc            │   │  Remote         │       │
//! │  │  title          │   │  Desc           │   │  Local          │       │
//! │  │  price          │   └─────────────────┘   └─────────────────┘       │
//! │  │  category       │                                                   │
//! │  │  rating?        │   ┌─────────────────┐                             │
//! │  │  brand? model?  │   │   LoadState     │                             │
//! │  │  color? disc.?  │   │  Idle ─► Loading ─► Ready | Error          │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The remote listing and the bundled dataset share one `Product` shape.
//! Fields only one of them carries are optional.

use serde::{Deserialize, Serialize};

/// Product identifier as delivered by both sources.
pub type ProductId = u64;

// =============================================================================
// Product
// =============================================================================

/// Customer rating summary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Average rating.
    pub rate: f64,
    /// Number of reviews.
    pub count: u32,
}

/// A product in the catalog.
///
/// Numeric fields are carried as delivered: no coercion, no range checks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Unique key within a source.
    pub id: ProductId,

    /// Display name.
    pub title: String,

    /// Long description. The bundled dataset may omit it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Unit price as delivered.
    pub price: f64,

    /// Category tag used for filtering.
    #[serde(default)]
    pub category: String,

    /// Image URI.
    #[serde(default)]
    pub image: String,

    /// Rating summary (remote listing only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<Rating>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub brand: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,

    /// Discount percentage (bundled dataset only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<f64>,
}

impl Product {
    /// Returns the description, or an empty string when absent.
    #[inline]
    pub fn description_or_empty(&self) -> &str {
        self.description.as_deref().unwrap_or("")
    }

    /// Returns true if the title or description contains `needle`.
    ///
    /// `needle` must already be lowercased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description_or_empty().to_lowercase().contains(needle)
    }

    /// Returns true if the product carries a positive discount.
    pub fn has_discount(&self) -> bool {
        self.discount.is_some_and(|d| d > 0.0)
    }

    /// Formats the price for display (two decimals, dollar sign).
    pub fn formatted_price(&self) -> String {
        format!("${:.2}", self.price)
    }
}

// =============================================================================
// Sort Order
// =============================================================================

/// Server-side sort order for the remote listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Returns the opposite order.
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }

    /// Value of the `sort` query parameter.
    pub fn as_query_value(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_query_value())
    }
}

// =============================================================================
// Data Source
// =============================================================================

/// Where the catalog's products come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataSource {
    /// Paginated HTTP listing endpoint.
    #[default]
    Remote,
    /// Bundled static JSON dataset.
    Local,
}

impl DataSource {
    /// Returns true if this source paginates and sorts on the server.
    pub fn is_remote(self) -> bool {
        matches!(self, DataSource::Remote)
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Remote => write!(f, "remote"),
            DataSource::Local => write!(f, "local"),
        }
    }
}

impl std::str::FromStr for DataSource {
    type Err = crate::ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "remote" | "api" => Ok(DataSource::Remote),
            "local" => Ok(DataSource::Local),
            other => Err(crate::ValidationError::InvalidFormat {
                field: "source".to_string(),
                reason: format!("unknown data source '{}', expected remote or local", other),
            }),
        }
    }
}

// =============================================================================
// Load State
// =============================================================================

/// Lifecycle of the controller's most recent load.
///
/// ```text
/// Idle ──► Loading ──► Ready
///            ▲   └───► Error
///            └──────────┘  (any later stimulus re-attempts)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    #[default]
    Idle,
    Loading,
    Ready,
    Error,
}
