//! REST API handlers for registration, login and the session balance

use super::{helpers::require_claims, models::*};
use crate::error::AppError;
use crate::state::SharedState;
use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use tracing::info;

/// Creates routes for account operations
pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(me))
        .route("/me/points/reset", post(reset_points))
}

/// Endpoint: POST /register
async fn register(
    State(state): State<SharedState>,
    Json(payload): Json<Credentials>,
) -> Result<impl IntoResponse, AppError> {
    let user = state
        .accounts
        .register(&payload.username, &payload.password)?;
    info!("Registered account {:?}", user.username);

    Ok((StatusCode::CREATED, Json(user)))
}

/// Endpoint: POST /login
/// Returns a bearer token and the account's current point balance.
async fn login(
    State(state): State<SharedState>,
    Json(payload): Json<Credentials>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = state
        .accounts
        .authenticate(&payload.username, &payload.password)?;
    let token = state.jwt.issue(&user.id, &user.username)?;
    info!("Login: {}", user.username);

    Ok(Json(LoginResponse { token, user }))
}

/// Endpoint: GET /me
async fn me(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> Result<Json<UserView>, AppError> {
    let claims = require_claims(&state.jwt, &headers)?;
    state
        .accounts
        .get(&claims.username)
        .map(Json)
        .ok_or(AppError::UserNotFound)
}

/// Endpoint: POST /me/points/reset
/// Restores the session default balance.
async fn reset_points(
    State(state): State<SharedState>,
    headers: HeaderMap,
) -> Result<Json<UserView>, AppError> {
    let claims = require_claims(&state.jwt, &headers)?;
    let user = state
        .accounts
        .reset_points(&claims.username)
        .ok_or(AppError::UserNotFound)?;
    info!("Reset points for {} to {}", user.username, user.points);

    Ok(Json(user))
}
