// ABOUTME: CORS middleware configuration for HTTP API endpoints
// ABOUTME: Provides Cross-Origin Resource Sharing setup for web client access
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::environment::ServerConfig;
use http::{header::HeaderName, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

/// Configure CORS settings for the API
///
/// `CORS_ALLOWED_ORIGINS` is either `*` (any origin) or a comma-separated
/// origin list. An empty or unparseable list falls back to any origin.
///
/// ```bash
/// export CORS_ALLOWED_ORIGINS="https://app.example.com,https://admin.example.com"
/// ```
#[must_use]
pub fn setup_cors(config: &ServerConfig) -> CorsLayer {
    let allow_origin = parse_allowed_origins(&config.cors_allowed_origins)
        .map_or_else(AllowOrigin::any, AllowOrigin::list);

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_headers([
            HeaderName::from_static("content-type"),
            HeaderName::from_static("authorization"),
            HeaderName::from_static("x-requested-with"),
            HeaderName::from_static("accept"),
            HeaderName::from_static("origin"),
        ])
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
}

fn parse_allowed_origins(raw: &str) -> Option<Vec<HeaderValue>> {
    if raw.trim().is_empty() || raw.trim() == "*" {
        return None;
    }

    let origins: Vec<HeaderValue> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    if origins.is_empty() {
        None
    } else {
        Some(origins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wildcard_means_any() {
        assert!(parse_allowed_origins("*").is_none());
        assert!(parse_allowed_origins("").is_none());
    }

    #[test]
    fn test_origin_list() {
        let origins = parse_allowed_origins("https://a.example, ,https://b.example").unwrap();
        assert_eq!(origins.len(), 2);
    }
}
