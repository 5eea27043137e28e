use std::time::Duration;

use crate::categories::CategoryCatalog;

/// Immutable runtime configuration for one report run.
#[derive(Clone)]
pub struct AppConfig {
    pub endpoint: String,
    pub tenant_id: String,
    pub enterprise: String,
    pub booking_base_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub max_concurrent_requests: usize,
    pub window_days: u32,
    pub log_level: String,
    pub debug: bool,
    pub categories: CategoryCatalog,
    pub default_cities: Vec<String>,
    pub default_categories: Vec<String>,
}

impl AppConfig {
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("endpoint", &self.endpoint)
            .field("tenant_id", &"[redacted]")
            .field("enterprise", &self.enterprise)
            .field("booking_base_url", &self.booking_base_url)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("max_concurrent_requests", &self.max_concurrent_requests)
            .field("window_days", &self.window_days)
            .field("log_level", &self.log_level)
            .field("debug", &self.debug)
            .field("categories", &self.categories)
            .field("default_cities", &self.default_cities)
            .field("default_categories", &self.default_categories)
            .finish()
    }
}
