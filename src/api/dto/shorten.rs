//! DTOs for the shorten endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for `POST /v1/shorten`.
///
/// Transport-level validation only: the URL is stored exactly as supplied,
/// with no normalization.
#[derive(Debug, Deserialize, Validate)]
pub struct ShortenRequest {
    #[validate(
        length(min = 1, max = 2048, message = "long_url must be 1-2048 characters"),
        url(message = "long_url must be a valid URL")
    )]
    pub long_url: String,
}

/// Response body for `POST /v1/shorten`.
#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_code: String,
    pub short_url: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request_passes() {
        let request = ShortenRequest {
            long_url: "https://example.com/some/path?q=1".to_string(),
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_url_rejected() {
        let request = ShortenRequest {
            long_url: String::new(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_non_url_rejected() {
        let request = ShortenRequest {
            long_url: "not a url".to_string(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_overlong_url_rejected() {
        let request = ShortenRequest {
            long_url: format!("https://example.com/{}", "a".repeat(2100)),
        };
        assert!(request.validate().is_err());
    }
}
