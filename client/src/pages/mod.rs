//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (form signals, request tokens,
//! navigation after success) and delegates rendering details to
//! `components`. Every backend call goes through the `Session` in context,
//! either via its session operations or via `Session::backend()` for plain
//! REST calls.

pub mod about;
pub mod admin;
pub mod history;
pub mod login;
pub mod past_history;
pub mod profile;
pub mod register;
pub mod reset_password;
pub mod submit_complaint;
pub mod upload_proof;
pub mod verification;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::auth::AuthState;
use crate::util::nav::resolve_nav;

/// Inline error banner shown while `message` holds text.
#[component]
pub fn FormMessage(message: RwSignal<Option<String>>) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <p class="form-message form-message--error" role="alert">
                {move || message.get().unwrap_or_default()}
            </p>
        </Show>
    }
}

/// Landing for `/` and unknown paths: the viewer's home once the session
/// probe has resolved.
#[component]
pub fn HomeRedirect() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    move || {
        let state = auth.get();
        if state.loading {
            view! { <div class="gate gate--loading"><p>"Loading..."</p></div> }.into_any()
        } else {
            let home = resolve_nav(state.is_authenticated, state.user.as_ref().map(|u| u.role)).home_path;
            view! { <Redirect path=home/> }.into_any()
        }
    }
}
