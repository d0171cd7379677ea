//! API utilities for talking to the Order Service
//!
//! Provides helper functions for constructing API URLs.

use super::config::config;
use contracts::shared::ApiError;
use gloo_net::http::Response;

/// Get the base URL for API requests
///
/// Uses `api.base_url` from configuration when set, otherwise builds it from
/// the current window location with the configured port and prefix.
///
/// # Returns
/// - API base URL like "http://localhost:3000/api"
/// - Empty string if window is not available and no base URL is configured
pub fn api_base() -> String {
    let api = &config().api;
    if api.base_url.is_some() {
        return api.resolve_base("", "");
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    api.resolve_base(&protocol, &hostname)
}

/// Build a full API URL from a path relative to the API base
///
/// # Example
/// ```ignore
/// let url = api_url(&format!("/orders/{}", encode_segment(id)));
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Percent-encode an id before it is placed into a URL path.
pub fn encode_segment(segment: &str) -> String {
    urlencoding::encode(segment).into_owned()
}

/// HTTP status and raw body of a response, for the envelope decoders.
pub async fn read_body(response: Response) -> Result<(u16, String), ApiError> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(format!("Failed to read response: {}", e)))?;
    Ok((status, text))
}
