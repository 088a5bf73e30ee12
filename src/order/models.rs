//! Order Domain Models

use crate::pricing::helpers::deserialize_points;
use crate::pricing::{Cart, PaymentOutcome, Totals};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Cart snapshot for a live total
#[derive(Debug, Default, Deserialize)]
pub struct QuoteInput {
    #[serde(default)]
    pub products: Cart,

    #[serde(default)]
    pub options: Cart,
}

/// Live check of a points field
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RedemptionCheckInput {
    #[serde(default)]
    pub grand_total: u64,

    #[serde(default, deserialize_with = "deserialize_points")]
    pub requested_points: i64,

    /// Balance to check against for anonymous sessions
    #[serde(default)]
    pub user_points: Option<u64>,
}

/// Finalized order submitted at checkout
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderInput {
    #[serde(default)]
    pub products: Cart,

    #[serde(default)]
    pub options: Cart,

    /// Totals as the client computed them; recomputed server-side
    #[serde(default)]
    pub totals: Option<Totals>,

    #[serde(default)]
    pub use_points: bool,

    #[serde(default, deserialize_with = "deserialize_points")]
    pub used_points: i64,
}

/// Entry of the order history
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    pub order_number: u32,

    /// Amount charged after redemption
    pub price: u64,

    pub used_points: u64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_number: u32,
    pub totals: Totals,
    pub payment: PaymentOutcome,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}
