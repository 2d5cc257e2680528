//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by route guards and user-aware components to coordinate login redirects
//! and identity-dependent rendering. Only `state::session::SessionStore`
//! writes it; everything else reads it through the `RwSignal` in context.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::{User, Viewer};

/// Authentication state tracking the current user and loading status.
///
/// `loading` is true only until the startup session probe resolves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub is_authenticated: bool,
    pub user: Option<User>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { is_authenticated: false, user: None, loading: true }
    }
}

impl AuthState {
    pub fn viewer(&self) -> Viewer {
        Viewer::from_session(self.is_authenticated, self.user.as_ref().map(|u| u.role))
    }

    pub fn is_verified(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.is_account_verified)
    }

    /// Drop every trace of the signed-in user.
    pub(crate) fn clear(&mut self) {
        self.is_authenticated = false;
        self.user = None;
    }
}
