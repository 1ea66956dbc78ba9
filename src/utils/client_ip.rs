//! Client IP resolution from forwarding headers.

use axum::http::HeaderMap;
use std::net::SocketAddr;

/// Sentinel recorded when no client address can be determined.
pub const UNKNOWN_IP: &str = "unknown";

/// Headers that carry a single client IP, in precedence order:
/// Cloudflare, then Akamai/Cloudflare enterprise, then nginx-style proxies.
const SINGLE_IP_HEADERS: [&str; 3] = ["cf-connecting-ip", "true-client-ip", "x-real-ip"];

/// Resolves the client IP for visit recording.
///
/// Precedence (first present wins):
///
/// 1. `CF-Connecting-IP`
/// 2. `True-Client-IP`
/// 3. `X-Real-IP`
/// 4. `X-Forwarded-For` - leftmost entry, since the chain reads
///    `client, proxy1, proxy2`
/// 5. The transport-level peer address
/// 6. [`UNKNOWN_IP`]
pub fn resolve_client_ip(headers: &HeaderMap, peer: Option<SocketAddr>) -> String {
    for name in SINGLE_IP_HEADERS {
        if let Some(value) = header_str(headers, name) {
            return value.to_string();
        }
    }

    if let Some(forwarded) = header_str(headers, "x-forwarded-for") {
        if let Some(first) = forwarded.split(',').map(str::trim).find(|s| !s.is_empty()) {
            return first.to_string();
        }
    }

    match peer {
        Some(addr) => addr.ip().to_string(),
        None => UNKNOWN_IP.to_string(),
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|s| !s.is_empty())
}
