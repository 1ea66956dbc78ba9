//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, visit worker spawning, and the
//! Axum server lifecycle.

use crate::config::Config;
use crate::domain::visit_worker::run_visit_worker;
use crate::infrastructure::persistence::PgVisitRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::postgres::PgPoolOptions;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - PostgreSQL connection pool (bounded, fail-fast acquire)
/// - Migrations
/// - Background visit worker
/// - Axum HTTP server with peer-address propagation
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_acquire_timeout))
        .connect(&config.database_url)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;

    let pool = Arc::new(pool);

    let (visit_tx, visit_rx) = mpsc::channel(config.visit_queue_capacity);

    let visit_repository = Arc::new(PgVisitRepository::new(pool.clone()));
    tokio::spawn(run_visit_worker(visit_rx, visit_repository));
    tracing::info!("Visit worker started");

    let state = AppState::new(
        pool,
        config.base_url.clone(),
        visit_tx,
        config.code_settings(),
    );

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .await?;

    Ok(())
}
