//! Route wrapper that enforces the session gate.

use leptos::prelude::*;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::auth::AuthState;
use crate::util::auth::{GateDecision, gate_decision, install_gate_redirect};

/// Render `children` only when the session allows it.
///
/// Re-evaluated on every session change, so logging out elsewhere in the app
/// immediately sends the viewer to `/login`.
#[component]
pub fn AuthGate(#[prop(optional)] admin_only: bool, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let location = use_location();

    let decision = Memo::new(move |_| gate_decision(&auth.get(), admin_only));
    let current_path = Memo::new(move |_| location.pathname.get());
    install_gate_redirect(decision, current_path, use_navigate());

    move || match decision.get() {
        GateDecision::Render => children().into_any(),
        GateDecision::Loading => view! {
            <div class="gate gate--loading">
                <span class="spinner" aria-hidden="true"></span>
                <p>"Loading..."</p>
            </div>
        }
        .into_any(),
        GateDecision::Redirect(target) if target == current_path.get() => view! {
            <div class="gate gate--restricted">
                <h2>"Access restricted"</h2>
                <p>"This area is only available to moderators and administrators."</p>
            </div>
        }
        .into_any(),
        GateDecision::Redirect(_) => view! {
            <div class="gate">
                <p>"Redirecting..."</p>
            </div>
        }
        .into_any(),
    }
}
