//! Handler for short URL redirect.

use axum::{
    extract::{ConnectInfo, Path, State},
    http::HeaderMap,
    response::Redirect,
};
use std::net::SocketAddr;

use crate::domain::visit_event::VisitEvent;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::resolve_client_ip;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /v1/{short_code}`
///
/// # Request Flow
///
/// 1. Resolve the link by short code (404 if unknown)
/// 2. Resolve the client IP through the forwarding-header precedence
/// 3. Enqueue a visit event for the background worker
/// 4. Return 307 Temporary Redirect
///
/// # Visit Tracking
///
/// Visit events go through a bounded channel and are fire-and-forget: a
/// full queue or a dead worker drops the event with a warning, and the
/// redirect is served regardless.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(short_code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
) -> Result<Redirect, AppError> {
    let link = state.shortener.lookup(&short_code).await?;

    let visitor_ip = resolve_client_ip(&headers, Some(addr));

    if let Err(e) = state
        .visit_tx
        .try_send(VisitEvent::new(link.id, visitor_ip))
    {
        tracing::warn!(error = %e, short_code, "failed to enqueue visit event");
    }

    Ok(Redirect::temporary(&link.original_url))
}
