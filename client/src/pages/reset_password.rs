//! Two-step password reset: request an OTP, then set a new password.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use super::FormMessage;
use crate::state::session::Session;
use crate::util::nav::LOGIN_PATH;
use crate::util::validate::{OTP_LEN, sanitize_otp_input, validate_password_reset, validate_reset_request};

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let otp = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let otp_sent = RwSignal::new(false);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let request_session = session.clone();
    let on_request = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked().trim().to_owned();
        if let Err(e) = validate_reset_request(&email_value) {
            error.set(Some(e.to_string()));
            return;
        }
        error.set(None);
        busy.set(true);
        let session = request_session.clone();
        leptos::task::spawn_local(async move {
            let outcome = session.send_reset_otp(&email_value).await;
            busy.set(false);
            if outcome.success {
                otp_sent.set(true);
            } else {
                error.set(outcome.message);
            }
        });
    };

    let on_reset = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let email_value = email.get_untracked().trim().to_owned();
        let code = otp.get_untracked();
        let new_password = password.get_untracked();
        if let Err(e) = validate_password_reset(&code, &new_password, &confirm.get_untracked()) {
            error.set(Some(e.to_string()));
            return;
        }
        error.set(None);
        busy.set(true);
        let session = session.clone();
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let outcome = session.reset_password(&email_value, &code, &new_password).await;
            busy.set(false);
            if outcome.success {
                navigate(LOGIN_PATH, NavigateOptions::default());
            } else {
                error.set(outcome.message);
            }
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"Reset Password"</h1>
                <Show
                    when=move || otp_sent.get()
                    fallback=move || {
                        view! {
                            <form class="auth-form" on:submit=on_request.clone()>
                                <input
                                    class="auth-input"
                                    type="email"
                                    placeholder="Registered email"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                                    "Send Reset OTP"
                                </button>
                            </form>
                        }
                    }
                >
                    <form class="auth-form" on:submit=on_reset.clone()>
                        <input
                            class="auth-input auth-input--otp"
                            type="text"
                            inputmode="numeric"
                            maxlength=OTP_LEN.to_string()
                            placeholder="000000"
                            prop:value=move || otp.get()
                            on:input=move |ev| otp.set(sanitize_otp_input(&event_target_value(&ev)))
                        />
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="New password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                        <input
                            class="auth-input"
                            type="password"
                            placeholder="Confirm new password"
                            prop:value=move || confirm.get()
                            on:input=move |ev| confirm.set(event_target_value(&ev))
                        />
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            "Reset Password"
                        </button>
                    </form>
                </Show>
                <FormMessage message=error/>
                <div class="auth-card__links">
                    <A href=LOGIN_PATH>"Back to login"</A>
                </div>
            </div>
        </div>
    }
}
