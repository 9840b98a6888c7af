//! Backend endpoint addressing.
//!
//! The REST server always listens on port 3000 of the host serving the
//! console, so URLs are derived from the current window location.

fn base_from_location() -> Option<String> {
    let location = web_sys::window()?.location();
    let protocol = location.protocol().ok()?;
    let hostname = location.hostname().ok()?;
    Some(format!("{}//{}:3000", protocol, hostname))
}

/// Base URL of the backend, e.g. "http://localhost:3000". Empty outside a
/// browser context.
pub fn api_base() -> String {
    base_from_location().unwrap_or_default()
}

/// Full URL for an API path (paths start with "/api/").
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}
