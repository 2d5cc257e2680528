//! Account registration.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::FormMessage;
use crate::state::session::Session;
use crate::util::nav::{LOGIN_PATH, VERIFICATION_PATH};
use crate::util::validate::validate_registration;

/// Registration page. A new account is sent on to email verification.
#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let name_value = name.get_untracked().trim().to_owned();
        let email_value = email.get_untracked().trim().to_owned();
        let password_value = password.get_untracked();
        if let Err(e) = validate_registration(&name_value, &email_value, &password_value, &confirm.get_untracked()) {
            error.set(Some(e.to_string()));
            return;
        }
        error.set(None);
        busy.set(true);
        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = session.register(&name_value, &email_value, &password_value).await;
            busy.set(false);
            if outcome.success {
                navigate(VERIFICATION_PATH, NavigateOptions::default());
            } else {
                error.set(outcome.message);
            }
        });
    };

    let field = move |label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <input
                class="auth-input"
                type=kind
                placeholder=label
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Create Account"</h1>
                <form class="auth-form" on:submit=on_submit>
                    {field("Full Name", "text", name)}
                    {field("Email", "email", email)}
                    {field("Password", "password", password)}
                    {field("Confirm Password", "password", confirm)}
                    <FormMessage message=error/>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Register" }}
                    </button>
                </form>
                <div class="auth-card__links">
                    <span>"Already registered? " <A href=LOGIN_PATH>"Login"</A></span>
                </div>
            </div>
        </div>
    }
}
