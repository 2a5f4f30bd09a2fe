//! Auth transitions shared by the app shell, the login page, and the navbar.
//!
//! SYSTEM CONTEXT
//! ==============
//! `AuthState` is plain data; this module performs the side effects around it
//! (REST calls, session persistence, redirects). The pure `apply_*` helpers
//! carry the state logic so it can be exercised against an in-memory store.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::net::api;
use crate::net::error::ApiError;
use crate::net::http::ApiClient;
use crate::net::types::{LoginData, User};
use crate::state::auth::AuthState;
use crate::state::session::{SessionStore, TOKEN_KEY, USER_KEY};
use crate::util::storage::KeyValueStore;

/// Message shown when login fails without a service-provided reason.
pub const LOGIN_FAILED: &str = "Login failed, please try again later.";
/// Message shown when the service cannot be reached at all.
pub const SERVICE_UNREACHABLE: &str = "Network error: check that the slow-query service is running.";

/// Whether a guarded view should send the visitor to `/login`.
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    !state.loading && !state.has_token
}

/// Redirect to `/login` whenever auth has loaded and no session is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(
                "/login",
                NavigateOptions {
                    replace: true,
                    ..NavigateOptions::default()
                },
            );
        }
    });
}

/// Trim the username and require both fields.
///
/// # Errors
///
/// Returns a user-facing message when either field is blank.
pub fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// User-facing text for a failed login.
pub fn login_error_message(err: &ApiError) -> String {
    match err {
        err if err.is_transport() => SERVICE_UNREACHABLE.to_owned(),
        ApiError::Rejected(message) => message.clone(),
        ApiError::Status {
            message: Some(message), ..
        } if !message.trim().is_empty() => message.clone(),
        _ => LOGIN_FAILED.to_owned(),
    }
}

/// Session read at startup: token presence plus the cached user.
pub fn read_session<S: KeyValueStore>(session: &SessionStore<S>) -> (bool, Option<User>) {
    (session.has_token(), session.user())
}

/// Persist a successful login and mark the state signed in.
pub fn apply_login<S: KeyValueStore>(state: &mut AuthState, session: &SessionStore<S>, data: LoginData) {
    session.save(&data.token, &data.user);
    state.sign_in(data.user);
}

/// Always clears local state, whatever the remote logout returned.
pub fn apply_logout<S: KeyValueStore>(state: &mut AuthState, session: &SessionStore<S>) {
    session.clear();
    state.sign_out();
}

/// Fold the result of `/user/info` into the state; failures drop the token silently.
pub fn apply_revalidation<S: KeyValueStore>(state: &mut AuthState, session: &SessionStore<S>, result: Result<User, ApiError>) {
    match result {
        Ok(user) => {
            session.save_user(&user);
            state.user = Some(user);
            state.has_token = true;
        }
        Err(_) => {
            session.clear();
            state.user = None;
            state.has_token = false;
        }
    }
    state.loading = false;
}

/// Exchange credentials for a session and publish it to `auth`.
///
/// # Errors
///
/// Returns the user-facing failure message.
pub async fn login(auth: RwSignal<AuthState>, client: &ApiClient, username: &str, password: &str) -> Result<(), String> {
    match api::login(client, username, password).await {
        Ok(data) => {
            auth.update(|state| apply_login(state, client.session(), data));
            Ok(())
        }
        Err(err) => {
            leptos::logging::warn!("login failed: {err}");
            Err(login_error_message(&err))
        }
    }
}

/// Best-effort remote logout followed by an unconditional local clear.
pub async fn logout(auth: RwSignal<AuthState>, client: &ApiClient) {
    if let Err(err) = api::logout(client).await {
        leptos::logging::warn!("remote logout failed: {err}");
    }
    auth.update(|state| apply_logout(state, client.session()));
}

/// Load the stored session into `auth`, revalidating a token if one exists.
pub async fn initialize(auth: RwSignal<AuthState>, client: &ApiClient) {
    let (has_token, user) = read_session(client.session());
    if !has_token {
        auth.update(|state| {
            state.restore(false, None);
            state.loading = false;
        });
        return;
    }
    auth.update(|state| state.restore(true, user));
    let result = api::fetch_user_info(client).await;
    if let Err(err) = &result {
        leptos::logging::warn!("stored session rejected: {err}");
    }
    auth.update(|state| apply_revalidation(state, client.session(), result));
}

/// Whether a storage event on `key` concerns the session.
pub fn is_session_key(key: Option<&str>) -> bool {
    // `None` means the whole store was cleared.
    key.is_none_or(|key| key == TOKEN_KEY || key == USER_KEY)
}

/// Re-read the session after another tab changed it.
pub fn sync_from_store<S: KeyValueStore>(state: &mut AuthState, session: &SessionStore<S>) {
    let (has_token, user) = read_session(session);
    state.restore(has_token, user);
}
