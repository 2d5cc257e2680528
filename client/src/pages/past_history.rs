//! Closed complaints: resolved or rejected.

use leptos::prelude::*;
use leptos_router::components::A;

use super::history::{ComplaintList, ComplaintListView, load_history};
use crate::state::complaint::past_complaints;
use crate::state::session::Session;
use crate::util::cancel::scoped_token;
use crate::util::nav::HISTORY_PATH;

#[component]
pub fn PastHistoryPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let token = scoped_token();
    let raw = RwSignal::new(ComplaintList { loading: true, ..ComplaintList::default() });
    let closed = Memo::new(move |_| {
        let state = raw.get();
        ComplaintList { items: past_complaints(&state.items), ..state }
    });

    Effect::new(move || load_history(&session, raw, token.clone()));

    view! {
        <div class="page history-page">
            <header class="page__header">
                <h1>"Past History"</h1>
                <A href=HISTORY_PATH attr:class="btn">"All Complaints"</A>
            </header>
            <ComplaintListView list=closed empty="No resolved or rejected complaints yet."/>
        </div>
    }
}
