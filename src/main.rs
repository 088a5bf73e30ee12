use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;
use travel_order_rust::config::Config;
use travel_order_rust::router::create_app_router;
use travel_order_rust::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "travel_order_rust=info".into()),
        )
        .init();

    let config = Config::from_env();

    // Initialize application state
    let state = Arc::new(AppState::from_config(&config)?);

    // Build application router with all routes and middleware
    let app = create_app_router(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Server running on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
