#![allow(dead_code)]

use shortlink::application::services::CodeSettings;
use shortlink::domain::visit_event::VisitEvent;
use shortlink::state::AppState;
use sqlx::PgPool;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::mpsc;

pub fn create_test_state(pool: PgPool) -> (AppState, mpsc::Receiver<VisitEvent>) {
    create_test_state_with_queue(pool, 100)
}

pub fn create_test_state_with_queue(
    pool: PgPool,
    queue_capacity: usize,
) -> (AppState, mpsc::Receiver<VisitEvent>) {
    let (tx, rx) = mpsc::channel(queue_capacity);

    let state = AppState::new(
        Arc::new(pool),
        "http://localhost:3000".to_string(),
        tx,
        CodeSettings::default(),
    );

    (state, rx)
}

pub async fn create_test_link(pool: &PgPool, short_code: &str, original_url: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "INSERT INTO links (short_code, original_url) VALUES ($1, $2) RETURNING id",
    )
    .bind(short_code)
    .bind(original_url)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn create_test_visit(pool: &PgPool, link_id: i64, visitor_ip: &str) {
    sqlx::query("INSERT INTO link_visits (link_id, visitor_ip) VALUES ($1, $2)")
        .bind(link_id)
        .bind(visitor_ip)
        .execute(pool)
        .await
        .unwrap();
}

pub async fn count_links(pool: &PgPool, original_url: &str) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM links WHERE original_url = $1")
        .bind(original_url)
        .fetch_one(pool)
        .await
        .unwrap()
}

/// Injects a fixed peer address so handlers using `ConnectInfo` can run
/// under the mock transport.
#[derive(Clone)]
pub struct MockConnectInfoLayer;

impl<S> tower::Layer<S> for MockConnectInfoLayer {
    type Service = MockConnectInfoService<S>;

    fn layer(&self, inner: S) -> Self::Service {
        MockConnectInfoService { inner }
    }
}

#[derive(Clone)]
pub struct MockConnectInfoService<S> {
    inner: S,
}

impl<S, B> tower::Service<axum::http::Request<B>> for MockConnectInfoService<S>
where
    S: tower::Service<axum::http::Request<B>> + Clone + Send + 'static,
    S::Future: Send + 'static,
    B: Send + 'static,
{
    type Response = S::Response;
    type Error = S::Error;
    type Future = S::Future;

    fn poll_ready(
        &mut self,
        cx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut req: axum::http::Request<B>) -> Self::Future {
        let addr: SocketAddr = "127.0.0.1:12345".parse().unwrap();
        req.extensions_mut()
            .insert(axum::extract::ConnectInfo(addr));
        self.inner.call(req)
    }
}
