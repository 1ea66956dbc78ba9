//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /v1/shorten`              - Create a short link
//! - `GET  /v1/{short_code}`         - Redirect with visit recording
//! - `GET  /v1/{short_code}/stats`   - Visit-count snapshot
//! - `GET  /`                        - Service banner
//! - `GET  /health`                  - Health check (DB ping)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use axum::Router;
use axum::routing::{get, post};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

use crate::api::handlers::{health_handler, redirect_handler, root_handler, shorten_handler, stats_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let v1 = Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/{short_code}", get(redirect_handler))
        .route("/{short_code}/stats", get(stats_handler));

    let router = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .nest("/v1", v1)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
