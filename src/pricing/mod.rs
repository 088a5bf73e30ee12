//! Pricing Domain Module
//!
//! Pure order pricing and points redemption:
//! - Cart and price book models
//! - Totals, redemption validation and payment settlement
//! - Lenient parsing of form-style numeric input

pub mod calculator;
pub mod error;
pub mod helpers;
pub mod models;

pub use calculator::{compute_totals, settle_payment, validate_redemption};
pub use error::PaymentError;
pub use models::{
    Cart, ItemKind, PaymentOutcome, PriceBook, RedemptionReason, Totals, ValidationResult,
};
