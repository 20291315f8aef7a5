//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle has no process environment, so the remote API base URL
//! is baked in at compile time from `NOTES_API_URL`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Remote API base used when `NOTES_API_URL` is unset at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:5000/api";

/// Resolved base URL for the remote notes service, without a trailing slash.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("NOTES_API_URL"))
}

/// Trim whitespace and trailing slashes; blank or missing input falls back to
/// [`DEFAULT_API_URL`].
pub fn normalize_base_url(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).unwrap_or_default().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_URL.to_owned()
    } else {
        trimmed.to_owned()
    }
}
