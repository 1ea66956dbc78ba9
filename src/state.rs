//! Shared application state injected into handlers.

use std::sync::Arc;

use sqlx::PgPool;
use tokio::sync::mpsc;

use crate::application::services::{CodeSettings, ShortenerService};
use crate::domain::visit_event::VisitEvent;
use crate::infrastructure::persistence::{PgLinkRepository, PgVisitRepository};

/// Concrete service type wired to the PostgreSQL repositories.
pub type Shortener = ShortenerService<PgLinkRepository, PgVisitRepository>;

#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub shortener: Arc<Shortener>,
    /// Caller-visible prefix for building `short_url` values.
    pub base_url: String,
    pub visit_tx: mpsc::Sender<VisitEvent>,
}

impl AppState {
    /// Builds the state with repositories and services wired to the pool.
    pub fn new(
        db: Arc<PgPool>,
        base_url: String,
        visit_tx: mpsc::Sender<VisitEvent>,
        code_settings: CodeSettings,
    ) -> Self {
        let links = Arc::new(PgLinkRepository::new(db.clone()));
        let visits = Arc::new(PgVisitRepository::new(db.clone()));
        let shortener = Arc::new(ShortenerService::new(links, visits, code_settings));

        Self {
            db,
            shortener,
            base_url,
            visit_tx,
        }
    }

    /// Constructs the full short URL for a code.
    pub fn short_url(&self, short_code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), short_code)
    }
}
