//! Background worker draining the visit-event channel.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::domain::entities::NewVisit;
use crate::domain::repositories::VisitRepository;
use crate::domain::visit_event::VisitEvent;

/// Runs the visit recording loop until the channel is closed.
///
/// Visit recording is best effort: every failure is logged at `warn` and
/// swallowed so the redirect path is never delayed or failed. There is no
/// retry; a lost visit is an accepted loss.
pub async fn run_visit_worker<V: VisitRepository>(
    mut rx: mpsc::Receiver<VisitEvent>,
    visits: Arc<V>,
) {
    while let Some(event) = rx.recv().await {
        let link_id = event.link_id;

        let new_visit = NewVisit {
            link_id: event.link_id,
            visitor_ip: event.visitor_ip,
        };

        if let Err(e) = visits.record(new_visit).await {
            tracing::warn!(error = %e, link_id, "failed to record visit");
        }
    }
}
