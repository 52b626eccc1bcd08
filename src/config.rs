//! Application Configuration
//!
//! Everything here is fixed at build time.

/// Backend used when `KESHER_API_URL` is not set at compile time
pub const DEFAULT_API_URL: &str = "https://keshermanager.onrender.com";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// REST backend root, without trailing slash
    pub api_base_url: String,
    /// Snackbar auto-hide delay
    pub notification_timeout_ms: u32,
    /// Lines kept by the rolling logger
    pub log_capacity: usize,
}

impl AppConfig {
    pub fn load() -> Self {
        Self::with_base_url(option_env!("KESHER_API_URL").unwrap_or(DEFAULT_API_URL))
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            api_base_url: base_url.trim().trim_end_matches('/').to_string(),
            notification_timeout_ms: 6000,
            log_capacity: rolling_logger::DEFAULT_CAPACITY,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::load()
    }
}
