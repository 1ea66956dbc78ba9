//! Visit entity representing a single redirect event.

use chrono::{DateTime, Utc};

/// A visit recorded when a shortened link is accessed.
///
/// Each visit belongs to exactly one [`super::Link`]; deleting a link
/// cascades to its visits. Visits are never mutated or deleted individually.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Visit {
    pub id: i64,
    pub link_id: i64,
    pub visitor_ip: String,
    pub visited_at: DateTime<Utc>,
}

/// Input data for recording a new visit.
///
/// The `link_id` must reference an existing link. `visited_at` is set by the
/// database at insert time.
#[derive(Debug, Clone)]
pub struct NewVisit {
    pub link_id: i64,
    pub visitor_ip: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_visit_fields() {
        let now = Utc::now();
        let visit = Visit {
            id: 1,
            link_id: 42,
            visitor_ip: "192.168.1.1".to_string(),
            visited_at: now,
        };

        assert_eq!(visit.id, 1);
        assert_eq!(visit.link_id, 42);
        assert_eq!(visit.visitor_ip, "192.168.1.1");
        assert_eq!(visit.visited_at, now);
    }

    #[test]
    fn test_new_visit_supports_ipv6_text() {
        let new_visit = NewVisit {
            link_id: 99,
            visitor_ip: "2001:db8::8a2e:370:7334".to_string(),
        };

        assert_eq!(new_visit.link_id, 99);
        assert!(new_visit.visitor_ip.len() <= 45);
    }
}
