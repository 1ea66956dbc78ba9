//! Visit event model for asynchronous visit recording.

/// An in-memory visit event passed from the redirect handler to the
/// background worker via a bounded channel.
///
/// Decouples the HTTP response from the database write: the redirect is
/// served immediately and the insert happens out of band. The payload is
/// exactly what [`crate::domain::entities::NewVisit`] needs; `visited_at`
/// is assigned by the database when the row lands.
#[derive(Debug, Clone)]
pub struct VisitEvent {
    pub link_id: i64,
    /// Client IP in textual form, already resolved through the forwarding
    /// header precedence by the handler. `"unknown"` when nothing was
    /// available.
    pub visitor_ip: String,
}

impl VisitEvent {
    /// Creates a new visit event.
    pub fn new(link_id: i64, visitor_ip: String) -> Self {
        Self {
            link_id,
            visitor_ip,
        }
    }
}
