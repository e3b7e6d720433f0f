//! API URL construction.

/// Base URL of the backend, derived from the current window location with
/// the backend's port.
///
/// # Returns
/// - "http://localhost:8000" style base, or an empty string outside a
///   browser context.
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
    format!("{}//{}:8000", protocol, hostname)
}

/// Full API URL for a resource path.
///
/// # Example
/// ```rust,no_run
/// # use frontend::shared::api_utils::api_url;
/// let url = api_url("/bookings/123/");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}/api{}", api_base(), path)
}
