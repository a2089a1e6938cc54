//! API utilities for frontend-backend communication
//!
//! Provides helper functions for constructing API URLs.

/// Port the backend listens on when no explicit API base is configured
pub const DEFAULT_API_PORT: u16 = 3333;

/// Get the base URL for API requests from the current window location
///
/// Uses the page's protocol and hostname with [`DEFAULT_API_PORT`].
///
/// # Returns
/// - API base URL like "http://localhost:3333"
/// - Empty string if window is not available
pub fn api_base_from_location() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

/// Join an API base and a relative path with exactly one slash between them
///
/// # Example
/// ```rust
/// use frontend::shared::api_utils::join_url;
/// assert_eq!(join_url("http://localhost:3333/", "/orphanages"), "http://localhost:3333/orphanages");
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
