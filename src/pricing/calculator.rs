//! Order Pricing & Points Redemption
//!
//! Stateless functions over a cart snapshot and a redemption request. The
//! caller owns the point balance and commits `remaining_points` itself.

use super::error::PaymentError;
use super::models::{
    Cart, ItemKind, PaymentOutcome, PriceBook, RedemptionReason, Totals, ValidationResult,
};

/// Sums `quantity × unit price` over both carts.
///
/// Names missing from the price book contribute 0. Arithmetic saturates at
/// `u64::MAX` instead of wrapping.
pub fn compute_totals(products: &Cart, options: &Cart, prices: &PriceBook) -> Totals {
    let products_total = subtotal(products, ItemKind::Products, prices);
    let options_total = subtotal(options, ItemKind::Options, prices);

    Totals {
        products_total,
        options_total,
        grand_total: products_total.saturating_add(options_total),
    }
}

fn subtotal(cart: &Cart, kind: ItemKind, prices: &PriceBook) -> u64 {
    cart.iter().fold(0u64, |acc, (name, qty)| {
        acc.saturating_add(qty.saturating_mul(prices.unit_price(kind, name)))
    })
}

/// Negative requests read as 0.
fn sanitize_requested(requested: i64) -> u64 {
    requested.max(0) as u64
}

fn redemption_reason(user_points: u64, grand_total: u64, requested: u64) -> RedemptionReason {
    // Balance sufficiency takes precedence over total-exceedance.
    if requested > user_points {
        RedemptionReason::InsufficientPoints
    } else if requested > grand_total {
        RedemptionReason::ExceedsTotal
    } else {
        RedemptionReason::None
    }
}

/// Advisory check used for live input feedback. Never fails.
pub fn validate_redemption(user_points: u64, grand_total: u64, requested: i64) -> ValidationResult {
    let requested = sanitize_requested(requested);
    ValidationResult::from_reason(redemption_reason(user_points, grand_total, requested))
}

/// Final, binding computation of the payment before an order is submitted.
///
/// Redemption is bypassed entirely when `use_points` is false or the
/// sanitized request is 0. Otherwise an invalid request is an error and the
/// order must not be submitted.
pub fn settle_payment(
    user_points: u64,
    grand_total: u64,
    use_points: bool,
    requested: i64,
) -> Result<PaymentOutcome, PaymentError> {
    let requested = sanitize_requested(requested);

    if !use_points || requested == 0 {
        return Ok(PaymentOutcome {
            success: true,
            final_price: grand_total,
            remaining_points: user_points,
            used_points: 0,
        });
    }

    match redemption_reason(user_points, grand_total, requested) {
        RedemptionReason::InsufficientPoints => Err(PaymentError::InsufficientPoints {
            requested,
            available: user_points,
        }),
        RedemptionReason::ExceedsTotal => Err(PaymentError::ExceedsTotal {
            requested,
            total: grand_total,
        }),
        RedemptionReason::None => Ok(PaymentOutcome {
            success: true,
            final_price: grand_total - requested,
            remaining_points: user_points - requested,
            used_points: requested,
        }),
    }
}
