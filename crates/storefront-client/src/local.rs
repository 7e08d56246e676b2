//! # Local Dataset
//!
//! Synchronous loading of the static product dataset.
//!
//! The dataset is either the document compiled into this crate, an
//! in-memory document, or a file named in configuration. It is read on every
//! [`LocalDataset::load`] so a data-source switch always sees the current
//! file contents.

use std::path::PathBuf;
use storefront_core::dataset::parse_local_dataset;
use storefront_core::Product;
use tracing::debug;

use crate::config::CatalogConfig;
use crate::error::{ClientError, ClientResult};

const BUNDLED_DATASET: &str = include_str!("../data/products.json");

#[derive(Debug, Clone)]
enum Origin {
    Document(String),
    File(PathBuf),
}

/// Handle to the local product dataset.
#[derive(Debug, Clone)]
pub struct LocalDataset {
    origin: Origin,
}

impl LocalDataset {
    /// The dataset shipped with the crate.
    pub fn bundled() -> Self {
        Self::from_document(BUNDLED_DATASET)
    }

    /// A dataset held in memory.
    pub fn from_document(document: impl Into<String>) -> Self {
        LocalDataset {
            origin: Origin::Document(document.into()),
        }
    }

    /// A dataset read from `path` at load time.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        LocalDataset {
            origin: Origin::File(path.into()),
        }
    }

    /// The configured dataset file, or the bundled one.
    pub fn from_config(config: &CatalogConfig) -> Self {
        match &config.source.dataset_path {
            Some(path) => Self::from_path(path.clone()),
            None => Self::bundled(),
        }
    }

    /// Reads and validates the dataset.
    ///
    /// # Errors
    ///
    /// - [`ClientError::DatasetUnavailable`] if the file cannot be read
    /// - [`ClientError::Core`] with `DataFormat` if the shape is wrong
    pub fn load(&self) -> ClientResult<Vec<Product>> {
        let products = match &self.origin {
            Origin::Document(document) => parse_local_dataset(document)?,
            Origin::File(path) => {
                debug!(?path, "Reading local dataset");
                let document = std::fs::read_to_string(path).map_err(|e| {
                    ClientError::DatasetUnavailable(format!("{}: {}", path.display(), e))
                })?;
                parse_local_dataset(&document)?
            }
        };
        Ok(products)
    }
}

impl Default for LocalDataset {
    fn default() -> Self {
        Self::bundled()
    }
}
