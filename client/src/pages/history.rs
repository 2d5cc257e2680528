//! The signed-in citizen's complaints.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::complaint_card::ComplaintCard;
use crate::net::api;
use crate::net::types::Complaint;
use crate::state::session::Session;
use crate::util::cancel::{CancelToken, scoped_token};
use crate::util::nav::{PAST_HISTORY_PATH, SUBMIT_PATH};

/// Loaded list state shared by the history views.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ComplaintList {
    pub loading: bool,
    pub items: Vec<Complaint>,
    pub error: Option<String>,
}

/// Fetch `/api/complaints/history` into `list` unless `token` is cancelled first.
pub(crate) fn load_history(session: &Session, list: RwSignal<ComplaintList>, token: CancelToken) {
    list.update(|l| {
        l.loading = true;
        l.error = None;
    });
    let backend = session.backend().clone();
    leptos::task::spawn_local(async move {
        let result = api::complaint_history(&backend).await;
        let Some(result) = token.guard(result) else {
            return;
        };
        list.update(|l| {
            l.loading = false;
            match result {
                Ok(items) => l.items = items,
                Err(e) => {
                    leptos::logging::warn!("complaint history failed: {e}");
                    l.error = Some(e.user_message());
                }
            }
        });
    });
}

#[component]
pub fn HistoryPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let token = scoped_token();
    let list = RwSignal::new(ComplaintList { loading: true, ..ComplaintList::default() });

    Effect::new(move || load_history(&session, list, token.clone()));

    view! {
        <div class="page history-page">
            <header class="page__header">
                <h1>"My Complaints"</h1>
                <A href=PAST_HISTORY_PATH attr:class="btn">"Past History"</A>
            </header>
            <ComplaintListView list=list empty="You have not submitted any complaints yet."/>
            <A href=SUBMIT_PATH attr:class="btn btn--primary">"Report New Garbage"</A>
        </div>
    }
}

/// Loading, error, empty and populated renderings of a complaint list.
#[component]
pub(crate) fn ComplaintListView(#[prop(into)] list: Signal<ComplaintList>, empty: &'static str) -> impl IntoView {
    move || {
        let state = list.get();
        if state.loading {
            return view! { <p class="page__status">"Loading complaints..."</p> }.into_any();
        }
        if let Some(error) = state.error {
            return view! { <p class="form-message form-message--error">{error}</p> }.into_any();
        }
        if state.items.is_empty() {
            return view! { <p class="page__status">{empty}</p> }.into_any();
        }
        view! {
            <div class="complaint-list">
                {state
                    .items
                    .into_iter()
                    .map(|complaint| view! { <ComplaintCard complaint=complaint/> })
                    .collect::<Vec<_>>()}
            </div>
        }
        .into_any()
    }
}
