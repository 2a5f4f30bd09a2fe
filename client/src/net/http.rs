//! HTTP wrapper around the slow-query REST service.
//!
//! Client-side (hydrate): real requests via `gloo-net`, raced against a
//! `gloo-timers` timeout.
//! Server-side (SSR): every call returns [`ApiError::Unavailable`] since the
//! session lives in browser storage.
//!
//! ERROR HANDLING
//! ==============
//! A 401 clears the stored session and sends the browser to `/login` once per
//! response, then surfaces [`ApiError::Unauthorized`]. Everything else is
//! handed back to the calling view untouched.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::types::Envelope;
use crate::config::ConsoleConfig;
use crate::state::session::SessionStore;
use crate::util::storage::KeyValueStore;

/// Route the browser is sent to when the service rejects the session.
pub const LOGIN_ROUTE: &str = "/login";

/// What to do when a response comes back 401.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UnauthorizedPolicy {
    /// Clear the session and navigate to the login route.
    Redirect,
    /// Report [`ApiError::Unauthorized`] and leave state alone (login and
    /// startup revalidation handle it themselves).
    Silent,
}

#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
}

/// Authenticated JSON client bound to one API base.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base: String,
    timeout_ms: u32,
    session: SessionStore,
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new(&ConsoleConfig::default())
    }
}

impl ApiClient {
    pub fn new(config: &ConsoleConfig) -> Self {
        Self {
            base: config.api_base.clone(),
            timeout_ms: config.timeout_ms,
            session: SessionStore::browser(),
        }
    }

    /// Client configured from the `ConsoleConfig` context, or defaults.
    pub fn from_context() -> Self {
        leptos::prelude::use_context::<ConsoleConfig>()
            .map(|config| Self::new(&config))
            .unwrap_or_default()
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Absolute request URL for `path` with URL-encoded query parameters.
    pub fn url(&self, path: &str, params: &[(&str, String)]) -> String {
        build_url(&self.base, path, params)
    }

    /// `GET` returning the envelope payload.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] variant; see the module docs for 401 handling.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
        policy: UnauthorizedPolicy,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.url(path, params);
            let envelope: Envelope<T> = self.send_json(Method::Get, &url, None, policy).await?;
            envelope.into_data()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, params, policy);
            Err(ApiError::Unavailable)
        }
    }

    /// `POST` a JSON body and return the envelope payload.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] variant; see the module docs for 401 handling.
    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        policy: UnauthorizedPolicy,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.url(path, &[]);
            let raw = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
            let envelope: Envelope<T> = self.send_json(Method::Post, &url, Some(raw), policy).await?;
            envelope.into_data()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body, policy);
            Err(ApiError::Unavailable)
        }
    }

    /// `POST` where only the envelope's `success` flag matters.
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] variant; see the module docs for 401 handling.
    pub async fn post_unit<B: Serialize>(&self, path: &str, body: &B, policy: UnauthorizedPolicy) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.url(path, &[]);
            let raw = serde_json::to_string(body).map_err(|e| ApiError::Decode(e.to_string()))?;
            let envelope: Envelope<serde_json::Value> = self.send_json(Method::Post, &url, Some(raw), policy).await?;
            envelope.into_unit()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, body, policy);
            Err(ApiError::Unavailable)
        }
    }

    /// `GET` a binary body (exports).
    ///
    /// # Errors
    ///
    /// Any [`ApiError`] variant; see the module docs for 401 handling.
    pub async fn get_bytes(&self, path: &str, params: &[(&str, String)]) -> Result<Vec<u8>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.url(path, params);
            let response = self.send(Method::Get, &url, None, UnauthorizedPolicy::Redirect).await?;
            if !response.ok() {
                let status = response.status();
                let text = response.text().await.unwrap_or_default();
                return Err(status_error(status, &text));
            }
            response.binary().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (path, params);
            Err(ApiError::Unavailable)
        }
    }

    #[cfg(feature = "hydrate")]
    async fn send_json<T: DeserializeOwned>(
        &self,
        method: Method,
        url: &str,
        body: Option<String>,
        policy: UnauthorizedPolicy,
    ) -> Result<Envelope<T>, ApiError> {
        let response = self.send(method, url, body, policy).await?;
        let status = response.status();
        let text = response.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        if !response.ok() {
            log::warn!("{method:?} {url} -> {status}");
            return Err(status_error(status, &text));
        }
        decode_envelope(&text)
    }

    #[cfg(feature = "hydrate")]
    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<String>,
        policy: UnauthorizedPolicy,
    ) -> Result<gloo_net::http::Response, ApiError> {
        use futures::future::{Either, select};
        use gloo_net::http::Request;

        log::debug!("{method:?} {url}");
        let mut builder = match method {
            Method::Get => Request::get(url),
            Method::Post => Request::post(url),
        }
        .header("Accept", "application/json");
        if let Some(bearer) = self.session.bearer() {
            builder = builder.header("Authorization", &bearer);
        }
        let request = match body {
            Some(raw) => builder.header("Content-Type", "application/json").body(raw),
            None => builder.build(),
        }
        .map_err(|e| ApiError::Network(e.to_string()))?;

        let in_flight = Box::pin(request.send());
        let deadline = Box::pin(gloo_timers::future::TimeoutFuture::new(self.timeout_ms));
        let response = match select(in_flight, deadline).await {
            Either::Left((result, _)) => result.map_err(|e| {
                log::warn!("{method:?} {url} failed: {e}");
                ApiError::Network(e.to_string())
            })?,
            Either::Right(((), _)) => {
                log::warn!("{method:?} {url} timed out after {} ms", self.timeout_ms);
                return Err(ApiError::Timeout(self.timeout_ms));
            }
        };

        if response.status() == 401 {
            if policy == UnauthorizedPolicy::Redirect {
                handle_unauthorized(&self.session, redirect_to_login);
            }
            return Err(ApiError::Unauthorized);
        }
        Ok(response)
    }
}

/// Join base, path, and URL-encoded query parameters.
pub fn build_url(base: &str, path: &str, params: &[(&str, String)]) -> String {
    let mut url = format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'));
    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");
    if !query.is_empty() {
        url.push('?');
        url.push_str(&query);
    }
    url
}

/// Clear the session and navigate to the login route.
pub fn handle_unauthorized<S, F>(session: &SessionStore<S>, navigate: F)
where
    S: KeyValueStore,
    F: FnOnce(&str),
{
    session.clear();
    navigate(LOGIN_ROUTE);
}

#[cfg(feature = "hydrate")]
fn redirect_to_login(route: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.location().set_href(route);
    }
}

/// Decode a 2xx body as an envelope.
#[cfg(any(test, feature = "hydrate"))]
fn decode_envelope<T: DeserializeOwned>(text: &str) -> Result<super::types::Envelope<T>, ApiError> {
    serde_json::from_str(text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Map a non-2xx response to an error, keeping the envelope message if any.
#[cfg(any(test, feature = "hydrate"))]
fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<super::types::Envelope<serde_json::Value>>(body)
        .ok()
        .and_then(|envelope| envelope.message)
        .filter(|message| !message.trim().is_empty());
    ApiError::Status { status, message }
}
