//! Route gate policy shared by every protected route.
//!
//! SYSTEM CONTEXT
//! ==============
//! `components::auth_gate::AuthGate` wraps protected views and feeds the
//! session into `gate_decision` on every change, so a logout or role change
//! re-runs the gate instead of relying on a check at mount.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use super::nav::{ADMIN_HOME_PATH, LOGIN_PATH};
use crate::state::auth::AuthState;

/// What a protected route should do for the current session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GateDecision {
    /// Session probe still running; show a neutral indicator.
    Loading,
    /// Leave for the given path. The attempted destination is not kept.
    Redirect(&'static str),
    Render,
}

pub fn gate_decision(state: &AuthState, admin_only: bool) -> GateDecision {
    if state.loading {
        return GateDecision::Loading;
    }
    if !state.is_authenticated {
        return GateDecision::Redirect(LOGIN_PATH);
    }
    if admin_only && !state.viewer().is_staff() {
        return GateDecision::Redirect(ADMIN_HOME_PATH);
    }
    GateDecision::Render
}

/// Redirect target for `decision`, unless the viewer is already there.
///
/// A citizen bounced off an admin view lands on the admin home, which is
/// itself admin-only; navigating again would loop.
pub fn redirect_target(decision: GateDecision, current_path: &str) -> Option<&'static str> {
    match decision {
        GateDecision::Redirect(target) if target != current_path => Some(target),
        _ => None,
    }
}

/// Navigate whenever the gate decides the current route must be left.
pub fn install_gate_redirect<F>(decision: Memo<GateDecision>, current_path: Memo<String>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let path = current_path.get();
        if let Some(target) = redirect_target(decision.get(), &path) {
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
