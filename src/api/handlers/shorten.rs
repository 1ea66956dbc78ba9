//! Handler for link shortening endpoint.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /v1/shorten`
///
/// # Request Body
///
/// ```json
/// { "long_url": "https://example.com/some/path" }
/// ```
///
/// # Response
///
/// `201 Created`:
///
/// ```json
/// {
///   "short_code": "aB3xY9",
///   "short_url": "http://localhost:3000/v1/aB3xY9",
///   "original_url": "https://example.com/some/path",
///   "created_at": "2026-01-01T00:00:00Z"
/// }
/// ```
///
/// Repeated requests for the same URL return the existing link with the
/// same code and creation timestamp; at most one row is created per call.
///
/// # Errors
///
/// Returns 400 Bad Request if the body fails validation.
/// Returns 500 Internal Server Error on storage failures.
pub async fn shorten_handler(
    State(state): State<AppState>,
    Json(payload): Json<ShortenRequest>,
) -> Result<(StatusCode, Json<ShortenResponse>), AppError> {
    payload.validate()?;

    let link = state.shortener.shorten(payload.long_url).await?;

    let short_url = state.short_url(&link.short_code);

    Ok((
        StatusCode::CREATED,
        Json(ShortenResponse {
            short_code: link.short_code,
            short_url,
            original_url: link.original_url,
            created_at: link.created_at,
        }),
    ))
}
