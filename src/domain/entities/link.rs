//! Link entity representing a shortened URL mapping.

use chrono::{DateTime, Utc};

/// A shortened URL link.
///
/// Represents the mapping between a short code and the original URL. Links
/// are immutable once persisted: the `original_url` → `short_code` mapping
/// and `created_at` never change.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Link {
    pub id: i64,
    pub short_code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

impl Link {
    /// Creates a new Link instance.
    pub fn new(id: i64, short_code: String, original_url: String, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            short_code,
            original_url,
            created_at,
        }
    }
}

/// Input data for creating a new link.
///
/// `id` and `created_at` are assigned by the database at insert time.
#[derive(Debug, Clone)]
pub struct NewLink {
    pub short_code: String,
    pub original_url: String,
}
