//! Bearer token extraction

use super::jwt::{Claims, JwtService};
use crate::error::AppError;
use axum::http::{header::AUTHORIZATION, HeaderMap};

/// Returns the raw token of an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

/// Anonymous requests yield `None`; a present but invalid token is an error.
pub fn optional_claims(jwt: &JwtService, headers: &HeaderMap) -> Result<Option<Claims>, AppError> {
    match bearer_token(headers) {
        Some(token) => Ok(Some(jwt.verify(token)?)),
        None => Ok(None),
    }
}

pub fn require_claims(jwt: &JwtService, headers: &HeaderMap) -> Result<Claims, AppError> {
    optional_claims(jwt, headers)?
        .ok_or_else(|| AppError::Unauthorized("Missing bearer token".to_string()))
}
