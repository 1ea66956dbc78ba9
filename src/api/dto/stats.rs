//! DTO for the stats endpoint.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::LinkStats;

/// Response body for `GET /v1/{short_code}/stats`.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub short_code: String,
    pub original_url: String,
    pub total_visits: i64,
    pub created_at: DateTime<Utc>,
}

impl From<LinkStats> for StatsResponse {
    fn from(stats: LinkStats) -> Self {
        Self {
            short_code: stats.short_code,
            original_url: stats.original_url,
            total_visits: stats.total_visits,
            created_at: stats.created_at,
        }
    }
}
