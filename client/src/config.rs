//! Backend location for REST calls.
//!
//! The base URL is baked in at compile time from `BLOGWEB_BACKEND_URL`. An
//! unset or empty value means same-origin requests (`/api/v1/...`).

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Compile-time backend base URL, empty when not configured.
pub const BACKEND_URL: &str = match option_env!("BLOGWEB_BACKEND_URL") {
    Some(url) => url,
    None => "",
};

/// Join a base URL and an absolute API path without doubling the slash.
pub fn endpoint(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{base}/{path}")
}
