//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the pooled HTTP client used to reach the slow-query service and the
//! upstream base URL. Cloning is cheap; `reqwest::Client` is reference counted.

use std::time::Duration;

use crate::config::HostConfig;

/// Seconds allowed for establishing the upstream TCP/TLS connection.
const CONNECT_TIMEOUT_SECS: u64 = 10;

#[derive(Clone, Debug)]
pub struct AppState {
    pub http: reqwest::Client,
    pub upstream: String,
}

impl AppState {
    /// # Errors
    ///
    /// Returns the builder error if the TLS backend cannot be initialised.
    pub fn new(config: &HostConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.proxy_timeout_secs))
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            http,
            upstream: config.upstream.clone(),
        })
    }
}
