//! Complaint submission: photo, detected location and contact details.
//!
//! SYSTEM CONTEXT
//! ==============
//! Location is requested once on mount. The form validates photo, location
//! and contact fields locally and only then uploads one multipart request.
//! Success lands on the complaint history.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use super::FormMessage;
use crate::net::backend::Attachment;
use crate::net::types::GeoPoint;
use crate::state::complaint::{ComplaintDraft, submit_complaint_draft};
use crate::state::notify::ToastKind;
use crate::state::session::Session;
use crate::util::cancel::scoped_token;
use crate::util::files::{attachment_from_event, preview_url, revoke_preview};
use crate::util::format::file_size;
use crate::util::geo::current_position;
use crate::util::nav::HISTORY_PATH;
use crate::util::validate::validate_image;

#[derive(Clone, Debug, PartialEq)]
enum LocationStatus {
    Detecting,
    Found(GeoPoint),
    Failed(String),
}

#[component]
pub fn SubmitComplaintPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let token = scoped_token();

    let name = RwSignal::new(session.snapshot().user.map(|u| u.name).unwrap_or_default());
    let phone = RwSignal::new(String::new());
    let address = RwSignal::new(String::new());
    let image = RwSignal::new_local(None::<Attachment>);
    let preview = RwSignal::new(None::<String>);
    let location = RwSignal::new(LocationStatus::Detecting);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let detect_token = token.clone();
    let detect = move || {
        location.set(LocationStatus::Detecting);
        let token = detect_token.clone();
        leptos::task::spawn_local(async move {
            let status = match current_position().await {
                Ok(point) => LocationStatus::Found(point),
                Err(e) => LocationStatus::Failed(e.to_string()),
            };
            if let Some(status) = token.guard(status) {
                location.set(status);
            }
        });
    };
    let detect_on_mount = detect.clone();
    Effect::new(move || detect_on_mount());

    on_cleanup(move || {
        if let Some(Some(url)) = preview.try_get_untracked() {
            revoke_preview(&url);
        }
    });

    let on_image = move |ev: leptos::ev::Event| {
        let picked = attachment_from_event(&ev);
        if let Some(old) = preview.get_untracked() {
            revoke_preview(&old);
        }
        match validate_image(picked.as_ref()) {
            Ok(()) => {
                error.set(None);
                preview.set(picked.as_ref().and_then(preview_url));
                image.set(picked);
            }
            Err(e) => {
                error.set(Some(e.to_string()));
                preview.set(None);
                image.set(None);
            }
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let draft = ComplaintDraft {
            name: name.get_untracked(),
            phone: phone.get_untracked(),
            address: address.get_untracked(),
            location: match location.get_untracked() {
                LocationStatus::Found(point) => Some(point),
                _ => None,
            },
            image: image.get_untracked(),
        };
        error.set(None);
        busy.set(true);
        let session = session.clone();
        let navigate = navigate.clone();
        let token = token.clone();
        leptos::task::spawn_local(async move {
            let result = submit_complaint_draft(session.backend(), &draft).await;
            if token.is_cancelled() {
                return;
            }
            busy.set(false);
            match result {
                Ok(()) => {
                    session.notify(ToastKind::Success, "Complaint submitted successfully!");
                    navigate(HISTORY_PATH, NavigateOptions::default());
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    view! {
        <div class="page submit-page">
            <h1>"Report Garbage"</h1>
            <form class="complaint-form" on:submit=on_submit>
                <section class="complaint-form__photo">
                    <label class="btn">
                        "Take / Upload Photo"
                        <input type="file" accept="image/*" capture="environment" hidden=true on:change=on_image/>
                    </label>
                    {move || {
                        preview
                            .get()
                            .map(|src| view! { <img class="complaint-form__preview" src=src alt="Selected photo"/> })
                    }}
                    <span class="complaint-form__file">
                        {move || image.with(|i| i.as_ref().map(|a| format!("{} ({})", a.name, file_size(a.size))))}
                    </span>
                </section>
                <section class="complaint-form__location">
                    {move || match location.get() {
                        LocationStatus::Detecting => view! { <p>"Detecting location..."</p> }.into_any(),
                        LocationStatus::Found(point) => {
                            view! { <p class="complaint-form__coords">"Location: " {point.label()}</p> }.into_any()
                        }
                        LocationStatus::Failed(message) => {
                            let retry = detect.clone();
                            view! {
                                <p class="form-message form-message--error">{message}</p>
                                <button class="btn" type="button" on:click=move |_| retry()>
                                    "Retry location"
                                </button>
                            }
                                .into_any()
                        }
                    }}
                </section>
                <input
                    class="form-input"
                    type="text"
                    placeholder="Your name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class="form-input"
                    type="tel"
                    placeholder="Phone number"
                    prop:value=move || phone.get()
                    on:input=move |ev| phone.set(event_target_value(&ev))
                />
                <textarea
                    class="form-input"
                    placeholder="Address or landmark (optional)"
                    prop:value=move || address.get()
                    on:input=move |ev| address.set(event_target_value(&ev))
                ></textarea>
                <FormMessage message=error/>
                <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                    {move || if busy.get() { "Submitting..." } else { "Submit Complaint" }}
                </button>
            </form>
        </div>
    }
}
