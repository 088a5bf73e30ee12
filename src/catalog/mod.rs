//! Catalog Domain Module
//!
//! - Catalog item models and the catalog file format
//! - Loading, duplicate checks and price filtering
//! - REST API handlers for `/products` and `/options`

pub mod handlers;
pub mod models;
pub mod state;

pub use handlers::routes;
pub use models::{CatalogError, CatalogItem};
pub use state::Catalog;
