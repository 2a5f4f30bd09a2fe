//! Persisted auth session (`token` + cached `user`).
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the HTTP wrapper for the bearer credential, by the auth holder on
//! startup, and by the route guard. Cleared on logout and on any 401.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;
use crate::util::storage::{KeyValueStore, LocalStorage, load_json, save_json};

/// Storage key holding the bearer token.
pub const TOKEN_KEY: &str = "token";
/// Storage key holding the JSON-encoded user object.
pub const USER_KEY: &str = "user";

/// Typed view over the session keys of a [`KeyValueStore`].
#[derive(Clone, Debug, Default)]
pub struct SessionStore<S = LocalStorage> {
    store: S,
}

impl SessionStore<LocalStorage> {
    /// Session backed by `window.localStorage`.
    pub fn browser() -> Self {
        Self { store: LocalStorage }
    }
}

impl<S: KeyValueStore> SessionStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Current bearer token; blank values count as absent.
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|token| !token.trim().is_empty())
    }

    pub fn has_token(&self) -> bool {
        self.token().is_some()
    }

    /// Cached user, if one was stored and still parses.
    pub fn user(&self) -> Option<User> {
        load_json(&self.store, USER_KEY)
    }

    /// Persist a freshly issued token together with its user.
    pub fn save(&self, token: &str, user: &User) {
        self.store.set(TOKEN_KEY, token);
        save_json(&self.store, USER_KEY, user);
    }

    /// Refresh the cached user without touching the token.
    pub fn save_user(&self, user: &User) {
        save_json(&self.store, USER_KEY, user);
    }

    /// Drop both session keys.
    pub fn clear(&self) {
        self.store.remove(TOKEN_KEY);
        self.store.remove(USER_KEY);
    }

    /// `Authorization` header value for the current token.
    pub fn bearer(&self) -> Option<String> {
        self.token().map(|token| format!("Bearer {token}"))
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
