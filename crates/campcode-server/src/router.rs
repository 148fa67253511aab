//! Router assembly and the serve loop.

use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::api::{self, AppState};
use crate::error::ServerError;

/// Builds the application router with request tracing.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/generate", post(api::generate_code))
        .fallback(api::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Binds `addr` and serves requests until the process exits.
pub async fn serve(addr: &str, state: AppState) -> Result<(), ServerError> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %addr, "server listening");
    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
