//! Link shortening, lookup, and stats aggregation.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{LinkRepository, VisitRepository};
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Extra length for the final unchecked generation after the retry budget
/// is exhausted.
const FALLBACK_EXTRA_LENGTH: usize = 4;

/// Knobs for short-code allocation.
///
/// Loaded from the environment via [`crate::config::Config::code_settings`].
#[derive(Debug, Clone)]
pub struct CodeSettings {
    /// Initial code length.
    pub length: usize,
    /// Collision retry budget.
    pub max_attempts: usize,
    /// Length added at attempt index `max_attempts / 2`.
    pub length_increment: usize,
}

impl Default for CodeSettings {
    fn default() -> Self {
        Self {
            length: 6,
            max_attempts: 10,
            length_increment: 2,
        }
    }
}

/// Read-only stats snapshot for a link.
///
/// Combines link metadata with the visit-count aggregate.
#[derive(Debug, Clone)]
pub struct LinkStats {
    pub short_code: String,
    pub original_url: String,
    pub total_visits: i64,
    pub created_at: DateTime<Utc>,
}

/// Service for creating, resolving, and summarizing short links.
///
/// Stateless apart from its repository handles and allocation settings; all
/// consistency guarantees come from the store. No in-process locks guard
/// allocation or deduplication.
pub struct ShortenerService<L: LinkRepository, V: VisitRepository> {
    links: Arc<L>,
    visits: Arc<V>,
    codes: CodeSettings,
}

impl<L: LinkRepository, V: VisitRepository> ShortenerService<L, V> {
    /// Creates a new shortener service.
    pub fn new(links: Arc<L>, visits: Arc<V>, codes: CodeSettings) -> Self {
        Self {
            links,
            visits,
            codes,
        }
    }

    /// Shortens a URL, reusing the existing link when the exact URL was
    /// already shortened.
    ///
    /// The URL is taken as supplied; syntactic validation belongs to the
    /// transport layer. Deduplication is first-writer-wins on the exact
    /// `original_url` string.
    ///
    /// # Concurrency
    ///
    /// Two concurrent calls for the same new URL may both miss the dedup
    /// lookup and insert two links with different codes. That race is part
    /// of the contract: the unique index on `short_code` prevents code
    /// collisions, but duplicate links for one URL are accepted and not
    /// cleaned up retroactively.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage failures.
    pub async fn shorten(&self, original_url: String) -> Result<Link, AppError> {
        if let Some(existing) = self.links.find_by_original_url(&original_url).await? {
            return Ok(existing);
        }

        let short_code = self.allocate_code().await?;

        self.links
            .create(NewLink {
                short_code,
                original_url,
            })
            .await
    }

    /// Resolves a short code to its link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    /// Returns [`AppError::Internal`] on storage failures.
    pub async fn lookup(&self, short_code: &str) -> Result<Link, AppError> {
        self.links
            .find_by_code(short_code)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Short link not found", json!({ "short_code": short_code }))
            })
    }

    /// Builds the stats snapshot for a short code.
    ///
    /// Resolves the link, then computes `total_visits` as a single
    /// aggregate query. No visit rows are fetched; no side effects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    /// Returns [`AppError::Internal`] on storage failures.
    pub async fn stats(&self, short_code: &str) -> Result<LinkStats, AppError> {
        let link = self.lookup(short_code).await?;
        let total_visits = self.visits.count_by_link_id(link.id).await?;

        Ok(LinkStats {
            short_code: link.short_code,
            original_url: link.original_url,
            total_visits,
            created_at: link.created_at,
        })
    }

    /// Allocates a short code that is free at the instant of the check.
    ///
    /// Generates candidates and probes the store, up to
    /// `max_attempts` times. Midway through the budget the candidate length
    /// grows by `length_increment` to thin out collisions as the keyspace
    /// fills. If every attempt collides, one final code is generated at
    /// the escalated length plus four characters and returned
    /// without a check: the residual collision risk at that length is
    /// accepted instead of looping forever, and the unique index still
    /// rejects the insert in the worst case.
    ///
    /// A small window remains between the check and the insert; the store's
    /// unique index, not this probe, is the actual uniqueness guarantee.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage failures during probing.
    pub async fn allocate_code(&self) -> Result<String, AppError> {
        let mut length = self.codes.length;

        for attempt in 0..self.codes.max_attempts {
            if attempt == self.codes.max_attempts / 2 {
                length += self.codes.length_increment;
            }

            let candidate = generate_code(length);

            if self.links.find_by_code(&candidate).await?.is_none() {
                return Ok(candidate);
            }

            tracing::warn!(attempt, length, "short code collision, retrying");
        }

        Ok(generate_code(length + FALLBACK_EXTRA_LENGTH))
    }
}
