use axum::{Router, routing::get, routing::post};
use log::info;

use crate::aggregator::AppState;
use crate::config::AppConfig;
use crate::handlers;

/// Assemble the HTTP surface over the given provider state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/get_stock_data", post(handlers::get_stock_data))
        .route("/api/stock/:symbol", get(handlers::stock_quote))
        .route("/api/news", get(handlers::general_news))
        .route("/api/news/:symbol", get(handlers::symbol_news))
        .fallback(handlers::not_found)
        .with_state(state)
}

/// Wire up providers from config and serve until the process is stopped.
pub async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::from_config(&config)
        .map_err(|e| format!("Failed to build HTTP client: {e}"))?;
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .map_err(|e| format!("Failed to bind to port: {e}"))?;

    info!("👂 Server listening on port {} - ready to serve quotes and news!", config.port);

    axum::serve(listener, app)
        .await
        .map_err(|e| format!("Server failed: {e}").into())
}
