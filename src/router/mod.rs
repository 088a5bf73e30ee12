//! Routing module for the travel order service

use crate::state::SharedState;
use axum::{
    body::Body,
    extract::Request,
    http::{header, HeaderValue, Method},
    middleware::Next,
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};
use tracing::{info, warn};

/// Creates and configures the application router with all routes and middleware
pub fn create_app_router(state: SharedState) -> Router {
    // Middleware: Log requests
    let log_layer = axum::middleware::from_fn(|req: Request<Body>, next: Next| async move {
        let method = req.method().clone();
        let uri = req.uri().clone();
        info!("REQ: {} {}", method, uri);
        let res = next.run(req).await;
        if !res.status().is_success() {
            warn!("RES: {} {} -> {}", method, uri, res.status());
        }
        res
    });

    let cors_layer = cors_layer(state.cors_origin.as_deref());
    let images = ServeDir::new(state.assets_dir.join("images"));

    Router::new()
        .merge(crate::catalog::routes())
        .merge(crate::order::routes())
        .merge(crate::auth::routes())
        .nest_service("/images", images)
        .layer(log_layer)
        .layer(cors_layer)
        .with_state(state)
}

/// Permissive when no origin is configured; otherwise a single origin with
/// credentials allowed.
fn cors_layer(origin: Option<&str>) -> CorsLayer {
    let exact = origin.and_then(|o| match HeaderValue::from_str(o) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!("Ignoring invalid CORS_ORIGIN {:?}: {}", o, e);
            None
        }
    });

    match exact {
        Some(origin) => CorsLayer::new()
            .allow_origin(origin)
            .allow_methods([Method::GET, Method::POST, Method::DELETE, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
            .allow_credentials(true),
        None => CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any),
    }
}
