//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided as an `RwSignal<AuthState>` context. Route guards, the navigation
//! bar, and permission-gated controls all read it; `util::auth` drives its
//! login/logout/revalidation transitions.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Role code that implies every permission.
pub const ADMIN_ROLE: &str = "ADMIN";
/// Permission to browse slow queries.
pub const SLOW_QUERY_VIEW: &str = "SLOW_QUERY_VIEW";
/// Permission to edit review status and comments.
pub const OPTIMIZATION_EDIT: &str = "OPTIMIZATION_EDIT";

/// Authentication state tracking the current session.
#[derive(Clone, Debug, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    /// Whether a bearer token is stored; guards key off this, not `user`.
    pub has_token: bool,
    /// True until the stored session has been read (and revalidated).
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self {
            user: None,
            has_token: false,
            loading: true,
        }
    }
}

impl AuthState {
    /// True if the user holds `permission` directly or holds the admin role.
    pub fn has_permission(&self, permission: &str) -> bool {
        let Some(user) = &self.user else {
            return false;
        };
        user.permissions.iter().any(|p| p == permission) || user.roles.iter().any(|r| r == ADMIN_ROLE)
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.user
            .as_ref()
            .is_some_and(|user| user.roles.iter().any(|r| r == role))
    }

    pub fn can_edit_reviews(&self) -> bool {
        self.has_permission(OPTIMIZATION_EDIT)
    }

    /// Record a completed login.
    pub fn sign_in(&mut self, user: User) {
        self.user = Some(user);
        self.has_token = true;
        self.loading = false;
    }

    /// Drop the session locally.
    pub fn sign_out(&mut self) {
        self.user = None;
        self.has_token = false;
        self.loading = false;
    }

    /// Apply the stored session read at startup (or from another tab).
    pub fn restore(&mut self, has_token: bool, user: Option<User>) {
        self.has_token = has_token;
        self.user = if has_token { user } else { None };
    }

    /// Label for the navigation bar: `name (role)`.
    pub fn display_name(&self) -> Option<String> {
        let user = self.user.as_ref()?;
        let role = user
            .role_name
            .clone()
            .or_else(|| user.roles.first().cloned());
        Some(match role {
            Some(role) => format!("{} ({role})", user.username),
            None => user.username.clone(),
        })
    }
}
