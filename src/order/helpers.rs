//! Order helpers

use crate::pricing::Cart;
use rand::Rng;

/// Upper bound (exclusive) of generated order numbers
pub const ORDER_NUMBER_LIMIT: u32 = 1_000_000;

/// Opaque order identifier. Not guaranteed unique.
pub fn generate_order_number() -> u32 {
    rand::thread_rng().gen_range(0..ORDER_NUMBER_LIMIT)
}

/// Produces a human-readable one-line summary of a cart, sorted by name.
///
/// Example output: `"2x America, 1x England"`.
pub fn format_cart_summary(cart: &Cart) -> String {
    let mut lines: Vec<_> = cart.iter().collect();
    lines.sort_by(|a, b| a.0.cmp(b.0));
    lines
        .into_iter()
        .map(|(name, qty)| format!("{}x {}", qty, name))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_cart_summary() {
        let cart = Cart::from([("England", 1), ("America", 2)]);
        assert_eq!(format_cart_summary(&cart), "2x America, 1x England");
        assert_eq!(format_cart_summary(&Cart::new()), "");
    }

    #[test]
    fn test_order_number_range() {
        for _ in 0..100 {
            assert!(generate_order_number() < ORDER_NUMBER_LIMIT);
        }
    }
}
