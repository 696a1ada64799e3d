//! Route table and global layers.

use axum::{routing::get, Router};
use tower_http::cors::CorsLayer;

use super::{handlers, middleware};
use crate::config::toml_config::ServerConfig;
use crate::utils::error::Result;

pub fn build_routes() -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route("/test", get(handlers::status))
        .route("/image/hub", get(handlers::image_hub))
        .route("/image/mini", get(handlers::image_mini))
        .fallback(handlers::not_found)
}

pub fn build_router(cors: CorsLayer) -> Router {
    build_routes()
        .layer(axum::middleware::from_fn(middleware::log_requests))
        .layer(cors)
}

/// Full application for a given configuration.
pub fn build_app(config: &ServerConfig) -> Result<Router> {
    if config.cors.is_restricted() {
        tracing::info!("🔒 CORS restricted to: {}", config.cors.allowed_origins.join(", "));
    } else {
        tracing::info!("🌐 CORS allows all origins");
    }
    Ok(build_router(config.cors.to_layer()?))
}
