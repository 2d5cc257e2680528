//! Email + password sign-in.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::FormMessage;
use crate::state::session::Session;
use crate::util::nav::{REGISTER_PATH, RESET_PASSWORD_PATH, resolve_nav};
use crate::util::validate::validate_login;

/// Login page. Signed-in viewers are sent to their role home.
#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let auth = session.auth();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    Effect::new(move || {
        let state = auth.get();
        if busy.get() || state.loading || !state.is_authenticated {
            return;
        }
        let home = resolve_nav(true, state.user.as_ref().map(|u| u.role)).home_path;
        navigate(home, NavigateOptions::default());
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        if let Err(e) = validate_login(&email_value, &password_value) {
            error.set(Some(e.to_string()));
            return;
        }
        error.set(None);
        busy.set(true);
        let session = session.clone();
        leptos::task::spawn_local(async move {
            let outcome = session.login(&email_value, &password_value).await;
            if !outcome.success {
                error.set(outcome.message);
            }
            busy.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Clean India"</h1>
                <p class="auth-card__subtitle">"Sign in to report and track complaints"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="you@example.com"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <FormMessage message=error/>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Login" }}
                    </button>
                </form>
                <div class="auth-card__links">
                    <A href=RESET_PASSWORD_PATH>"Forgot password?"</A>
                    <span>"New here? " <A href=REGISTER_PATH>"Create an account"</A></span>
                </div>
            </div>
        </div>
    }
}
