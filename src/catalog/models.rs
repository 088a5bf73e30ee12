//! Catalog Models
//!
//! Travel products (destinations) and options (add-ons), plus the file
//! format the catalog is loaded from.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::pricing::ItemKind;

/// One priced entry of either catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CatalogItem {
    /// Unique within its catalog kind
    pub name: String,

    /// Relative path of the product image, served under `/images`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_path: Option<String>,

    /// Unit price
    #[serde(default)]
    pub price: u64,
}

impl CatalogItem {
    pub fn new(name: impl Into<String>, price: u64) -> Self {
        Self {
            name: name.into(),
            image_path: None,
            price,
        }
    }

    pub fn with_image(mut self, image_path: impl Into<String>) -> Self {
        self.image_path = Some(image_path.into());
        self
    }
}

/// On-disk catalog layout
#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    #[serde(alias = "products")]
    pub countries: Vec<CatalogItem>,

    #[serde(default)]
    pub options: Vec<CatalogItem>,
}

/// Query string of the listing endpoints
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceFilter {
    /// Upper price bound; 0 or absent disables the filter
    pub max_price: Option<u64>,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate {kind:?} entry: {name}")]
    DuplicateItem { kind: ItemKind, name: String },
}
