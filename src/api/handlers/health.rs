//! Operational endpoints: service banner and health check.

use axum::{Json, extract::State};

use crate::api::dto::health::{HealthResponse, ServiceInfo};
use crate::error::AppError;
use crate::state::AppState;

/// Service banner.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler() -> Json<ServiceInfo> {
    Json(ServiceInfo {
        message: "shortlink URL shortener",
        version: env!("CARGO_PKG_VERSION"),
        status: "healthy",
    })
}

/// Health check with a database round trip.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Errors
///
/// Returns 500 Internal Server Error if the database is unreachable.
pub async fn health_handler(State(state): State<AppState>) -> Result<Json<HealthResponse>, AppError> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(state.db.as_ref())
        .await?;

    Ok(Json(HealthResponse { status: "healthy" }))
}
