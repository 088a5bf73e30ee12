//! Pricing Domain Models
//!
//! Cart snapshots, price lookups and the results produced by the
//! calculator.

use super::helpers::coerce_quantity;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashMap;

// =============================================================================
// Catalog Kinds and Prices
// =============================================================================

/// The two disjoint catalogs an order draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    Products,
    Options,
}

/// Unit prices keyed by item name, one table per catalog kind
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PriceBook {
    pub products: HashMap<String, u64>,
    pub options: HashMap<String, u64>,
}

impl PriceBook {
    /// Returns the unit price of `name`, or 0 when the catalog does not know it.
    pub fn unit_price(&self, kind: ItemKind, name: &str) -> u64 {
        let table = match kind {
            ItemKind::Products => &self.products,
            ItemKind::Options => &self.options,
        };
        table.get(name).copied().unwrap_or(0)
    }
}

// =============================================================================
// Cart
// =============================================================================

/// Item name to selected quantity for one catalog kind.
///
/// Deserialization is lenient the same way a form field is: empty,
/// negative, null or non-numeric quantities become 0.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cart(HashMap<String, u64>);

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the quantity for `name`; a quantity of 0 removes the line.
    pub fn set(&mut self, name: impl Into<String>, quantity: u64) {
        let name = name.into();
        if quantity == 0 {
            self.0.remove(&name);
        } else {
            self.0.insert(name, quantity);
        }
    }

    pub fn quantity(&self, name: &str) -> u64 {
        self.0.get(name).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(name, qty)| (name.as_str(), *qty))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<const N: usize> From<[(&str, u64); N]> for Cart {
    fn from(lines: [(&str, u64); N]) -> Self {
        let mut cart = Cart::new();
        for (name, qty) in lines {
            cart.set(name, qty);
        }
        cart
    }
}

impl<'de> Deserialize<'de> for Cart {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<HashMap<String, Value>> = Option::deserialize(deserializer)?;
        let mut cart = Cart::new();
        for (name, value) in raw.unwrap_or_default() {
            cart.set(name, coerce_quantity(&value));
        }
        Ok(cart)
    }
}

// =============================================================================
// Calculator Results
// =============================================================================

/// Derived cart totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Totals {
    #[serde(rename = "products")]
    pub products_total: u64,

    #[serde(rename = "options")]
    pub options_total: u64,

    #[serde(rename = "total")]
    pub grand_total: u64,
}

/// Why a redemption request was accepted or refused
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RedemptionReason {
    None,
    InsufficientPoints,
    ExceedsTotal,
}

impl RedemptionReason {
    /// User-facing message, `None` for an accepted request
    pub fn message(self) -> Option<&'static str> {
        match self {
            RedemptionReason::None => None,
            RedemptionReason::InsufficientPoints => {
                Some("Cannot use more points than the current balance.")
            }
            RedemptionReason::ExceedsTotal => {
                Some("Points used cannot exceed the payment amount.")
            }
        }
    }
}

/// Advisory result of checking a redemption request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub reason: RedemptionReason,
    pub message: Option<&'static str>,
}

impl ValidationResult {
    pub fn from_reason(reason: RedemptionReason) -> Self {
        Self {
            is_valid: reason == RedemptionReason::None,
            reason,
            message: reason.message(),
        }
    }
}

/// Binding outcome of a settled payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentOutcome {
    pub success: bool,
    pub final_price: u64,
    pub remaining_points: u64,
    pub used_points: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cart_deserializes_leniently() {
        let cart: Cart = serde_json::from_value(json!({
            "America": 2,
            "England": "",
            "Portland": "3",
            "Atlantis": -1,
            "Moon": null
        }))
        .unwrap();

        assert_eq!(cart.quantity("America"), 2);
        assert_eq!(cart.quantity("Portland"), 3);
        assert_eq!(cart.quantity("England"), 0);
        assert_eq!(cart.iter().count(), 2);
    }

    #[test]
    fn test_null_cart_is_empty() {
        let cart: Cart = serde_json::from_value(Value::Null).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_setting_zero_removes_line() {
        let mut cart = Cart::from([("America", 2)]);
        cart.set("America", 0);
        assert!(cart.is_empty());
    }

    #[test]
    fn test_wire_names() {
        let totals = Totals {
            products_total: 2000,
            options_total: 500,
            grand_total: 2500,
        };
        assert_eq!(
            serde_json::to_value(totals).unwrap(),
            json!({ "products": 2000, "options": 500, "total": 2500 })
        );

        let result = ValidationResult::from_reason(RedemptionReason::ExceedsTotal);
        let value = serde_json::to_value(result).unwrap();
        assert_eq!(value["isValid"], false);
        assert_eq!(value["reason"], "EXCEEDS_TOTAL");
        assert!(value["message"].is_string());
    }
}
