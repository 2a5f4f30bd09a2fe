//! Build-time console configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser bundle has no process environment, so settings are baked in at
//! compile time through `option_env!` and provided to the component tree as a
//! `ConsoleConfig` context. Invalid values fall back to defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Default REST base path; the host proxies it to the slow-query service.
pub const DEFAULT_API_BASE: &str = "/api";
/// Default per-request timeout.
pub const DEFAULT_TIMEOUT_MS: u32 = 10_000;
/// Default number of hours subtracted from service timestamps for display.
pub const DEFAULT_DISPLAY_OFFSET_HOURS: i64 = 8;

/// Settings shared by the HTTP wrapper and the views.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsoleConfig {
    /// Base path or absolute URL prefixed to every endpoint.
    pub api_base: String,
    /// Requests still in flight after this many milliseconds fail with a timeout.
    pub timeout_ms: u32,
    /// Hours subtracted from service timestamps before formatting.
    pub display_offset_hours: i64,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            display_offset_hours: DEFAULT_DISPLAY_OFFSET_HOURS,
        }
    }
}

impl ConsoleConfig {
    /// Configuration baked in from `SLOWLOG_*` variables at build time.
    pub fn from_build_env() -> Self {
        Self::from_values(
            option_env!("SLOWLOG_API_BASE"),
            option_env!("SLOWLOG_REQUEST_TIMEOUT_MS"),
            option_env!("SLOWLOG_DISPLAY_OFFSET_HOURS"),
        )
    }

    /// Build a configuration from raw optional strings.
    pub fn from_values(api_base: Option<&str>, timeout_ms: Option<&str>, offset_hours: Option<&str>) -> Self {
        let defaults = Self::default();
        let api_base = api_base
            .map(|raw| raw.trim().trim_end_matches('/'))
            .filter(|raw| !raw.is_empty())
            .map_or(defaults.api_base, str::to_owned);
        let timeout_ms = timeout_ms
            .and_then(|raw| raw.trim().parse::<u32>().ok())
            .filter(|ms| *ms > 0)
            .unwrap_or(defaults.timeout_ms);
        let display_offset_hours = offset_hours
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|hours| hours.abs() <= 24)
            .unwrap_or(defaults.display_offset_hours);
        Self { api_base, timeout_ms, display_offset_hours }
    }
}
