//! REST API handlers for quoting, redemption checks and order submission

use super::{helpers::*, models::*};
use crate::auth::helpers::optional_claims;
use crate::error::AppError;
use crate::pricing::{compute_totals, settle_payment, validate_redemption, Totals, ValidationResult};
use crate::state::SharedState;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chrono::Utc;
use tracing::{info, warn};

/// Creates routes for order-related operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/quote", post(quote))
        .route("/points/validate", post(check_redemption))
        .route("/order", post(submit_order))
        .route("/order-history", get(order_history).delete(clear_order_history))
}

/// Endpoint: POST /quote
/// Totals for the current cart selection.
async fn quote(State(state): State<SharedState>, Json(payload): Json<QuoteInput>) -> Json<Totals> {
    Json(compute_totals(
        &payload.products,
        &payload.options,
        state.catalog.price_book(),
    ))
}

/// Endpoint: POST /points/validate
/// Advisory check driving the points field's error display.
async fn check_redemption(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<RedemptionCheckInput>,
) -> Result<Json<ValidationResult>, AppError> {
    let user_points = match optional_claims(&state.jwt, &headers)? {
        Some(claims) => {
            state
                .accounts
                .get(&claims.username)
                .ok_or(AppError::UserNotFound)?
                .points
        }
        None => payload.user_points.unwrap_or(state.default_points),
    };

    Ok(Json(validate_redemption(
        user_points,
        payload.grand_total,
        payload.requested_points,
    )))
}

/// Endpoint: POST /order
/// Settles the payment, commits the new balance and records the order.
async fn submit_order(
    State(state): State<SharedState>,
    headers: HeaderMap,
    Json(payload): Json<OrderInput>,
) -> Result<impl IntoResponse, AppError> {
    let claims = optional_claims(&state.jwt, &headers)?;

    let totals = compute_totals(
        &payload.products,
        &payload.options,
        state.catalog.price_book(),
    );
    if let Some(client_totals) = payload.totals.filter(|t| *t != totals) {
        warn!(
            "Client totals {:?} differ from computed {:?}, using computed",
            client_totals, totals
        );
    }

    let payment = match &claims {
        Some(claims) => state
            .accounts
            .update_points(&claims.username, |points| {
                settle_payment(
                    points,
                    totals.grand_total,
                    payload.use_points,
                    payload.used_points,
                )
                .map(|outcome| (outcome, outcome.remaining_points))
            })
            .ok_or(AppError::UserNotFound)??,
        None => {
            if payload.use_points && payload.used_points > 0 {
                return Err(AppError::Unauthorized(
                    "Login required to redeem points".to_string(),
                ));
            }
            settle_payment(state.default_points, totals.grand_total, false, 0)?
        }
    };

    let username = claims.map(|c| c.username);
    let order_number = generate_order_number();

    info!(
        "ORDER {}: products [{}], options [{}], total {}, paid {}, points used {} (user: {})",
        order_number,
        format_cart_summary(&payload.products),
        format_cart_summary(&payload.options),
        totals.grand_total,
        payment.final_price,
        payment.used_points,
        username.as_deref().unwrap_or("anonymous"),
    );

    state
        .orders
        .append(OrderRecord {
            order_number,
            price: payment.final_price,
            used_points: payment.used_points,
            username,
            created_at: Utc::now(),
        })
        .await;

    Ok((
        StatusCode::CREATED,
        Json(OrderResponse {
            order_number,
            totals,
            payment,
        }),
    ))
}

/// Endpoint: GET /order-history
async fn order_history(State(state): State<SharedState>) -> Json<Vec<OrderRecord>> {
    Json(state.orders.list().await)
}

/// Endpoint: DELETE /order-history
async fn clear_order_history(State(state): State<SharedState>) -> Json<MessageResponse> {
    let dropped = state.orders.clear().await;
    info!("Cleared {} order(s) from history", dropped);

    Json(MessageResponse {
        message: "Order history cleared".to_string(),
    })
}
