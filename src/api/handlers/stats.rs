//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Retrieves the stats snapshot for a short link.
///
/// # Endpoint
///
/// `GET /v1/{short_code}/stats`
///
/// # Response
///
/// ```json
/// {
///   "short_code": "aB3xY9",
///   "original_url": "https://example.com/some/path",
///   "total_visits": 42,
///   "created_at": "2026-01-01T00:00:00Z"
/// }
/// ```
///
/// `total_visits` comes from a single aggregate query; reading stats has
/// no side effects.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(short_code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let stats = state.shortener.stats(&short_code).await?;

    Ok(Json(stats.into()))
}
