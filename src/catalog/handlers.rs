//! REST API handlers for the catalog

use super::models::{CatalogItem, PriceFilter};
use crate::pricing::ItemKind;
use crate::state::SharedState;
use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

/// Creates routes for catalog listing
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/products", get(list_products))
        .route("/options", get(list_options))
}

/// Endpoint: GET /products
async fn list_products(
    State(state): State<SharedState>,
    Query(filter): Query<PriceFilter>,
) -> Json<Vec<CatalogItem>> {
    Json(state.catalog.filtered(ItemKind::Products, filter.max_price))
}

/// Endpoint: GET /options
async fn list_options(
    State(state): State<SharedState>,
    Query(filter): Query<PriceFilter>,
) -> Json<Vec<CatalogItem>> {
    Json(state.catalog.filtered(ItemKind::Options, filter.max_price))
}
