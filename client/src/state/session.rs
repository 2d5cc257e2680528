//! Session store: the single authority for "who is logged in".
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` constructs one `SessionStore` at startup and provides it as context.
//! Pages call its operations; each one talks to the backend, then applies the
//! outcome to the shared `AuthState` signal in a single update so readers
//! never observe a half-applied transition.
//!
//! ERROR HANDLING
//! ==============
//! Operations return an `AuthOutcome` rather than an error: server rejections
//! carry the backend message verbatim, transport failures a retry prompt.
//! Prior state is kept on failure except where an operation resets it
//! explicitly (`check_session`, `logout`). Profile refreshes are best effort
//! and only logged.
//!
//! ORDERING
//! ========
//! Every sign-in or sign-out bumps a generation counter. The startup probe
//! records the generation before its request and discards its answer if a
//! newer transition landed meanwhile; it still clears `loading`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use leptos::prelude::*;

use super::auth::AuthState;
use super::notify::{NotificationState, ToastKind};
use crate::net::api::{self, ApiError};
use crate::net::backend::{Backend, HttpBackend};

/// The store type used by the running application.
pub type Session = SessionStore<HttpBackend>;

/// Tagged result of a session operation, surfaced to pages.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthOutcome {
    pub success: bool,
    pub message: Option<String>,
}

impl AuthOutcome {
    pub fn ok() -> Self {
        Self { success: true, message: None }
    }

    pub fn failed(error: &ApiError) -> Self {
        Self { success: false, message: Some(error.user_message()) }
    }
}

/// Injected session service: backend handle plus the signals it owns.
#[derive(Clone)]
pub struct SessionStore<B: Backend> {
    backend: B,
    auth: RwSignal<AuthState>,
    notices: RwSignal<NotificationState>,
    generation: Arc<AtomicU64>,
}

impl<B: Backend> SessionStore<B> {
    /// Fresh store in the loading state.
    pub fn new(backend: B) -> Self {
        Self::with_signals(backend, RwSignal::new(AuthState::default()), RwSignal::new(NotificationState::default()))
    }

    /// Store writing into signals created by the caller.
    pub fn with_signals(backend: B, auth: RwSignal<AuthState>, notices: RwSignal<NotificationState>) -> Self {
        Self { backend, auth, notices, generation: Arc::new(AtomicU64::new(0)) }
    }

    pub fn auth(&self) -> RwSignal<AuthState> {
        self.auth
    }

    pub fn notices(&self) -> RwSignal<NotificationState> {
        self.notices
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Untracked snapshot of the current session.
    pub fn snapshot(&self) -> AuthState {
        self.auth.get_untracked()
    }

    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let message = message.into();
        self.notices.update(|n| {
            n.push(kind, message);
        });
    }

    /// Startup probe. The only transition that clears `loading`.
    pub async fn check_session(&self) -> AuthOutcome {
        let started = self.generation.load(Ordering::SeqCst);
        let probe = api::is_authenticated(&self.backend).await;
        let stale = self.generation.load(Ordering::SeqCst) != started;
        let outcome = match probe {
            Ok(()) => {
                if !stale {
                    self.auth.update(|s| s.is_authenticated = true);
                    self.fetch_user_data().await;
                }
                AuthOutcome::ok()
            }
            Err(e) => {
                if e.is_network() {
                    leptos::logging::warn!("session probe failed: {e}");
                }
                if !stale {
                    self.auth.update(AuthState::clear);
                }
                AuthOutcome::failed(&e)
            }
        };
        if stale {
            leptos::logging::log!("session probe superseded by a newer sign-in or sign-out");
        }
        self.auth.update(|s| s.loading = false);
        outcome
    }

    /// Refresh `user` from the profile endpoint.
    ///
    /// Failures are logged only; `is_authenticated` is never touched here.
    pub async fn fetch_user_data(&self) {
        match api::fetch_user_data(&self.backend).await {
            Ok(user) => self.auth.update(|s| s.user = Some(user)),
            Err(e) => leptos::logging::warn!("failed to fetch user data: {e}"),
        }
    }

    pub async fn login(&self, email: &str, password: &str) -> AuthOutcome {
        match api::login(&self.backend, email, password).await {
            Ok(()) => {
                self.bump_generation();
                self.auth.update(|s| s.is_authenticated = true);
                self.fetch_user_data().await;
                self.notify(ToastKind::Success, "Login successful!");
                AuthOutcome::ok()
            }
            Err(e) => self.rejected(&e, "Login failed. Please try again."),
        }
    }

    /// Create an account and adopt the returned user without a refetch.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> AuthOutcome {
        match api::register(&self.backend, name, email, password).await {
            Ok(user) => {
                self.bump_generation();
                self.auth.update(|s| {
                    s.is_authenticated = true;
                    s.user = user;
                });
                self.notify(ToastKind::Success, "Registration successful!");
                AuthOutcome::ok()
            }
            Err(e) => self.rejected(&e, "Registration failed. Please try again."),
        }
    }

    /// Best-effort server logout; local state is reset regardless.
    pub async fn logout(&self) -> AuthOutcome {
        if let Err(e) = api::logout(&self.backend).await {
            leptos::logging::warn!("logout request failed: {e}");
        }
        self.bump_generation();
        self.auth.update(AuthState::clear);
        self.notify(ToastKind::Success, "Logged out successfully");
        AuthOutcome::ok()
    }

    pub async fn send_verification_otp(&self) -> AuthOutcome {
        match api::send_verify_otp(&self.backend).await {
            Ok(()) => {
                self.notify(ToastKind::Success, "Verification OTP sent to your email");
                AuthOutcome::ok()
            }
            Err(e) => self.rejected(&e, "Failed to send OTP"),
        }
    }

    /// Verify the account; only a success refreshes the profile.
    pub async fn verify_email(&self, otp: &str) -> AuthOutcome {
        match api::verify_account(&self.backend, otp).await {
            Ok(()) => {
                self.fetch_user_data().await;
                self.notify(ToastKind::Success, "Email verified successfully!");
                AuthOutcome::ok()
            }
            Err(e) => self.rejected(&e, "Verification failed"),
        }
    }

    pub async fn send_reset_otp(&self, email: &str) -> AuthOutcome {
        match api::send_reset_otp(&self.backend, email).await {
            Ok(()) => {
                self.notify(ToastKind::Success, "Password reset OTP sent to your email");
                AuthOutcome::ok()
            }
            Err(e) => self.rejected(&e, "Failed to send reset OTP"),
        }
    }

    pub async fn reset_password(&self, email: &str, otp: &str, new_password: &str) -> AuthOutcome {
        match api::reset_password(&self.backend, email, otp, new_password).await {
            Ok(()) => {
                self.notify(ToastKind::Success, "Password reset successfully!");
                AuthOutcome::ok()
            }
            Err(e) => self.rejected(&e, "Password reset failed"),
        }
    }

    fn bump_generation(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    /// Toast and outcome for a failed operation. State stays untouched.
    fn rejected(&self, error: &ApiError, network_toast: &str) -> AuthOutcome {
        match error {
            ApiError::Rejected(message) => self.notify(ToastKind::Error, message.as_str()),
            ApiError::Network(detail) => {
                leptos::logging::warn!("auth request failed: {detail}");
                self.notify(ToastKind::Error, network_toast);
            }
        }
        AuthOutcome::failed(error)
    }
}
