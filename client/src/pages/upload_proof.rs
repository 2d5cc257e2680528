//! Proof-of-cleanup video upload for one resolved complaint.
//!
//! The complaint id arrives as `?complaint=<id>`. Without it the page shows
//! an inline error and the upload stays blocked.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};

use super::FormMessage;
use crate::net::backend::Attachment;
use crate::state::complaint::upload_proof_draft;
use crate::state::notify::ToastKind;
use crate::state::session::Session;
use crate::util::cancel::scoped_token;
use crate::util::files::attachment_from_event;
use crate::util::format::file_size;
use crate::util::nav::{COMPLAINT_QUERY_KEY, HISTORY_PATH};
use crate::util::validate::ValidationError;

#[component]
pub fn UploadProofPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let navigate = use_navigate();
    let query = use_query_map();
    let token = scoped_token();

    let complaint_id = Memo::new(move |_| {
        query.with(|q| q.get(COMPLAINT_QUERY_KEY)).filter(|id| !id.trim().is_empty())
    });
    let video = RwSignal::new_local(None::<Attachment>);
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_video = move |ev: leptos::ev::Event| {
        let picked = attachment_from_event(&ev);
        if picked.as_ref().is_some_and(Attachment::is_video) {
            error.set(None);
            video.set(picked);
        } else {
            error.set(Some(ValidationError::MissingVideo.to_string()));
            video.set(None);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let id = complaint_id.get_untracked();
        let picked = video.get_untracked();
        error.set(None);
        busy.set(true);
        let session = session.clone();
        let navigate = navigate.clone();
        let token = token.clone();
        leptos::task::spawn_local(async move {
            let result = upload_proof_draft(session.backend(), id.as_deref(), picked.as_ref()).await;
            if token.is_cancelled() {
                return;
            }
            busy.set(false);
            match result {
                Ok(()) => {
                    session.notify(ToastKind::Success, "Proof video uploaded successfully!");
                    navigate(HISTORY_PATH, NavigateOptions::default());
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    view! {
        <div class="page proof-page">
            <h1>"Upload Cleanup Proof"</h1>
            <Show
                when=move || complaint_id.get().is_some()
                fallback=|| {
                    view! {
                        <p class="form-message form-message--error" role="alert">
                            {ValidationError::MissingComplaintId.to_string()}
                        </p>
                        <A href=HISTORY_PATH attr:class="btn">"Back to history"</A>
                    }
                }
            >
                <p class="page__status">"Complaint " {move || complaint_id.get().unwrap_or_default()}</p>
            </Show>
            <form class="proof-form" on:submit=on_submit>
                <label class="btn">
                    "Choose Video"
                    <input type="file" accept="video/*" hidden=true on:change=on_video/>
                </label>
                <span class="proof-form__file">
                    {move || video.with(|v| v.as_ref().map(|a| format!("{} ({})", a.name, file_size(a.size))))}
                </span>
                <FormMessage message=error/>
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || busy.get() || complaint_id.get().is_none()
                >
                    {move || if busy.get() { "Uploading..." } else { "Upload Proof" }}
                </button>
            </form>
        </div>
    }
}
