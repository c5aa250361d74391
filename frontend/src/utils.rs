use chrono::{DateTime, Utc};
use web_sys::window;

/// Get the base HTTP URL of the hosting origin (e.g., "http://localhost:3000" or "https://myapp.com")
pub fn get_base_url() -> String {
    let window = window().expect("no global window");
    let location = window.location();

    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let host = location
        .host()
        .unwrap_or_else(|_| "localhost:3000".to_string());

    format!("{}//{}", protocol, host)
}

/// Build a full API URL from a path (e.g., "/api/auth/session" -> "http://localhost:3000/api/auth/session")
pub fn api_url(path: &str) -> String {
    format!("{}{}", get_base_url(), path)
}

/// Human-readable account-creation date (e.g., "June 1, 2024")
pub fn format_created_at(created_at: &DateTime<Utc>) -> String {
    created_at.format("%B %-d, %Y").to_string()
}
