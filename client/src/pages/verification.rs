//! Email verification with a six-digit OTP.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::FormMessage;
use crate::state::session::Session;
use crate::util::nav::resolve_nav;
use crate::util::validate::{OTP_LEN, sanitize_otp_input, validate_otp};

/// Verification page. Already verified accounts are sent home.
#[component]
pub fn VerificationPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let auth = session.auth();
    let navigate = use_navigate();

    let otp = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let sending = RwSignal::new(false);
    let verifying = RwSignal::new(false);
    let sent = RwSignal::new(false);

    Effect::new(move || {
        let state = auth.get();
        if state.is_verified() {
            let home = resolve_nav(state.is_authenticated, state.user.as_ref().map(|u| u.role)).home_path;
            navigate(home, NavigateOptions::default());
        }
    });

    let send_session = session.clone();
    let on_send = move |_| {
        if sending.get_untracked() {
            return;
        }
        sending.set(true);
        error.set(None);
        let session = send_session.clone();
        leptos::task::spawn_local(async move {
            let outcome = session.send_verification_otp().await;
            sending.set(false);
            if outcome.success {
                sent.set(true);
            } else {
                error.set(outcome.message);
            }
        });
    };

    let on_verify = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if verifying.get_untracked() {
            return;
        }
        let code = otp.get_untracked();
        if let Err(e) = validate_otp(&code) {
            error.set(Some(e.to_string()));
            return;
        }
        error.set(None);
        verifying.set(true);
        let session = session.clone();
        leptos::task::spawn_local(async move {
            let outcome = session.verify_email(&code).await;
            verifying.set(false);
            if !outcome.success {
                error.set(outcome.message);
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Verify Your Email"</h1>
                <p class="auth-card__subtitle">
                    {move || {
                        let email = auth.get().user.map(|u| u.email).unwrap_or_default();
                        format!("We will send a {OTP_LEN}-digit code to {email}")
                    }}
                </p>
                <button class="btn" on:click=on_send disabled=move || sending.get()>
                    {move || match (sending.get(), sent.get()) {
                        (true, _) => "Sending...",
                        (false, true) => "Resend OTP",
                        (false, false) => "Send OTP",
                    }}
                </button>
                <form class="auth-form" on:submit=on_verify>
                    <input
                        class="auth-input auth-input--otp"
                        type="text"
                        inputmode="numeric"
                        maxlength=OTP_LEN.to_string()
                        placeholder="000000"
                        prop:value=move || otp.get()
                        on:input=move |ev| otp.set(sanitize_otp_input(&event_target_value(&ev)))
                    />
                    <FormMessage message=error/>
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || verifying.get() || otp.get().len() != OTP_LEN
                    >
                        {move || if verifying.get() { "Verifying..." } else { "Verify Email" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
