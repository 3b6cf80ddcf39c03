//! Frontend configuration module
//!
//! Settings are baked in at compile time from `USERADMIN_*` environment
//! variables, since the bundle has no runtime environment to read.

use std::time::Duration;

const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_REDIRECT_DELAY_MS: u64 = 2_000;
const DEFAULT_LOG_FILTER: &str = "info";

/// Frontend configuration for the remote service and UX timings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontendConfig {
    /// Root URL of the user management service
    pub api_base_url: String,
    /// How long a success message stays visible before returning to the list
    pub redirect_delay: Duration,
    /// `tracing` filter directive for console logging
    pub log_filter: String,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self::from_values(
            option_env!("USERADMIN_API_BASE_URL"),
            option_env!("USERADMIN_REDIRECT_DELAY_MS"),
            option_env!("USERADMIN_LOG"),
        )
    }
}

impl FrontendConfig {
    /// Create a new frontend configuration instance
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a configuration from raw values, falling back to defaults for
    /// anything missing, blank or malformed.
    pub fn from_values(
        api_base_url: Option<&str>,
        redirect_delay_ms: Option<&str>,
        log_filter: Option<&str>,
    ) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .to_string();
        let redirect_delay = redirect_delay_ms
            .and_then(|value| value.trim().parse::<u64>().ok())
            .map_or(
                Duration::from_millis(DEFAULT_REDIRECT_DELAY_MS),
                Duration::from_millis,
            );
        let log_filter = log_filter
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(DEFAULT_LOG_FILTER)
            .to_string();

        Self {
            api_base_url,
            redirect_delay,
            log_filter,
        }
    }
}
