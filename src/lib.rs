//! Travel Order Library
//!
//! This library provides the backend of a travel-product ordering demo:
//! catalog listing, order pricing with point redemption, order submission
//! and an optional JWT login carrying the point balance.

// Domain modules
pub mod auth;
pub mod catalog;
pub mod order;
pub mod pricing;

// Infrastructure
pub mod config;
pub mod error;
pub mod router;
pub mod state;
