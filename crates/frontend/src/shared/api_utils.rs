//! API utilities for frontend-backend communication
//!
//! URL construction and request headers shared by every gateway.

/// Port the catalog API listens on, next to the admin UI host
const API_PORT: u16 = 3000;

/// localStorage key of the bearer token written at login
const ACCESS_TOKEN_KEY: &str = "auth_access_token";

/// Get the base URL for API requests
///
/// Derived from the current window location, always on `API_PORT`.
/// Empty string if window is not available.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    base_url(&protocol, &hostname)
}

fn base_url(protocol: &str, hostname: &str) -> String {
    format!("{}//{}:{}", protocol, hostname, API_PORT)
}

/// Build a full API URL from a path
///
/// ```rust,ignore
/// let url = api_url("/api/products/15");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// `Authorization` header value, when a token is stored
pub fn auth_header() -> Option<String> {
    let storage = web_sys::window()?.local_storage().ok()??;
    let token = storage.get_item(ACCESS_TOKEN_KEY).ok()??;
    bearer(&token)
}

fn bearer(token: &str) -> Option<String> {
    let token = token.trim();
    if token.is_empty() {
        None
    } else {
        Some(format!("Bearer {}", token))
    }
}
