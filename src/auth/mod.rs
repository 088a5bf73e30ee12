//! Session / Identity Module
//!
//! - In-memory accounts with argon2 password hashes and point balances
//! - HS256 session tokens
//! - REST API handlers for register, login and balance access

pub mod handlers;
pub mod helpers;
pub mod jwt;
pub mod models;
pub mod state;

pub use handlers::routes;
