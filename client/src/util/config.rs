//! Build-time client configuration.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Service location used when `SERVICEFALL_API_URL` is unset at build time.
pub const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Base URL of the case service, without a trailing slash.
pub fn api_base_url() -> String {
    normalize_base_url(option_env!("SERVICEFALL_API_URL"))
}

fn normalize_base_url(raw: Option<&str>) -> String {
    let trimmed = raw.map(str::trim).filter(|s| !s.is_empty()).unwrap_or(DEFAULT_API_URL);
    trimmed.trim_end_matches('/').to_owned()
}
