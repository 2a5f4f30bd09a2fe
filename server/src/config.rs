//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_UPSTREAM: &str = "http://localhost:5172";
pub const DEFAULT_PROXY_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Slow-query REST service that `/api/*` is forwarded to, without trailing slash.
    pub upstream: String,
    pub proxy_timeout_secs: u64,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            upstream: DEFAULT_UPSTREAM.to_owned(),
            proxy_timeout_secs: DEFAULT_PROXY_TIMEOUT_SECS,
        }
    }
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `SLOWLOG_API_UPSTREAM`: default `http://localhost:5172`
    /// - `SLOWLOG_PROXY_TIMEOUT_SECS`: default 30
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for a malformed `PORT` or an upstream
    /// that is not an `http(s)` URL. A malformed timeout falls back to the default.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_values(
            std::env::var("PORT").ok().as_deref(),
            std::env::var("SLOWLOG_API_UPSTREAM").ok().as_deref(),
            std::env::var("SLOWLOG_PROXY_TIMEOUT_SECS").ok().as_deref(),
        )
    }

    /// # Errors
    ///
    /// See [`HostConfig::from_env`].
    pub fn from_values(port: Option<&str>, upstream: Option<&str>, timeout_secs: Option<&str>) -> Result<Self, ConfigError> {
        let port = match port.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::Invalid {
                var: "PORT",
                value: raw.to_owned(),
            })?,
            None => DEFAULT_PORT,
        };

        let upstream = match upstream.map(str::trim).filter(|v| !v.is_empty()) {
            Some(raw) if raw.starts_with("http://") || raw.starts_with("https://") => raw.trim_end_matches('/').to_owned(),
            Some(raw) => {
                return Err(ConfigError::Invalid {
                    var: "SLOWLOG_API_UPSTREAM",
                    value: raw.to_owned(),
                });
            }
            None => DEFAULT_UPSTREAM.to_owned(),
        };

        let proxy_timeout_secs = timeout_secs
            .and_then(|v| v.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_PROXY_TIMEOUT_SECS);

        Ok(Self {
            port,
            upstream,
            proxy_timeout_secs,
        })
    }
}
