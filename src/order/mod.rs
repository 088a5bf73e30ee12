//! Order Domain Module
//!
//! - Order, quote and redemption-check models
//! - In-memory order history
//! - REST API handlers for quoting, checkout and history

pub mod handlers;
pub mod helpers;
pub mod models;
pub mod state;

pub use handlers::routes;
