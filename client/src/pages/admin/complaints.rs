//! Staff complaint triage: filter, page, inspect and edit complaints.
//!
//! SYSTEM CONTEXT
//! ==============
//! The backend does the filtering and paging; this page only turns the
//! filter and pager signals into a query (`state::admin::complaint_query`)
//! and refetches whenever that query changes. Edits go out as one PUT and
//! trigger a refetch of the current page.

use leptos::prelude::*;

use crate::components::pagination::Pagination;
use crate::components::status_chip::{PriorityChip, StatusChip};
use crate::net::api;
use crate::net::types::{Complaint, ComplaintStatus, ComplaintUpdate, Priority};
use crate::pages::FormMessage;
use crate::state::admin::{ComplaintFilters, Filter, Pager, complaint_query};
use crate::state::notify::ToastKind;
use crate::state::session::Session;
use crate::util::cancel::scoped_slot;
use crate::util::format::display_date;

#[component]
pub fn ComplaintsManagementPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let slot = scoped_slot();

    let filters = RwSignal::new(ComplaintFilters::default());
    let pager = RwSignal::new(Pager::default());
    let refresh = RwSignal::new(0_u32);
    let rows = RwSignal::new(Vec::<Complaint>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let viewing = RwSignal::new(None::<Complaint>);
    let editing = RwSignal::new(None::<Complaint>);

    let query = Memo::new(move |_| complaint_query(&filters.get(), &pager.get()));

    let load_session = session.clone();
    Effect::new(move || {
        refresh.track();
        let query = query.get();
        let backend = load_session.backend().clone();
        let token = slot.next();
        loading.set(true);
        leptos::task::spawn_local(async move {
            let result = api::admin_complaints(&backend, &query).await;
            let Some(result) = token.guard(result) else {
                return;
            };
            loading.set(false);
            match result {
                Ok(page) => {
                    error.set(None);
                    rows.set(page.complaints);
                    pager.update(|p| p.set_total(page.total));
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    });

    let on_saved = Callback::new(move |()| {
        editing.set(None);
        session.notify(ToastKind::Success, "Complaint updated successfully");
        refresh.update(|n| *n += 1);
    });

    view! {
        <div class="page admin-page">
            <h1>"Complaints Management"</h1>
            <div class="filters">
                <input
                    class="form-input"
                    type="search"
                    placeholder="Search name, phone or address"
                    prop:value=move || filters.get().search
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        filters.update(|f| f.search = value);
                        pager.update(Pager::rewind);
                    }
                />
                <select
                    class="form-input"
                    prop:value=move || filters.get().status.select_value()
                    on:change=move |ev| {
                        let status = Filter::<ComplaintStatus>::from_select(&event_target_value(&ev));
                        filters.update(|f| f.status = status);
                        pager.update(Pager::rewind);
                    }
                >
                    <option value="all">"All statuses"</option>
                    {ComplaintStatus::ALL
                        .iter()
                        .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
                <select
                    class="form-input"
                    prop:value=move || filters.get().priority.select_value()
                    on:change=move |ev| {
                        let priority = Filter::<Priority>::from_select(&event_target_value(&ev));
                        filters.update(|f| f.priority = priority);
                        pager.update(Pager::rewind);
                    }
                >
                    <option value="all">"All priorities"</option>
                    {Priority::ALL
                        .iter()
                        .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </div>
            <FormMessage message=error/>
            <Show when=move || !loading.get() fallback=|| view! { <p class="page__status">"Loading complaints..."</p> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Reporter"</th>
                            <th>"Phone"</th>
                            <th>"Location"</th>
                            <th>"Status"</th>
                            <th>"Priority"</th>
                            <th>"Submitted"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || rows.get()
                            key=|c| (c.id.clone(), c.status, c.priority, c.admin_notes.clone())
                            children=move |c: Complaint| {
                                let for_view = c.clone();
                                let for_edit = c.clone();
                                view! {
                                    <tr>
                                        <td>{c.name.clone()}</td>
                                        <td>{c.phone.clone()}</td>
                                        <td>{c.place()}</td>
                                        <td><StatusChip status=c.status/></td>
                                        <td><PriorityChip priority=c.priority/></td>
                                        <td>{display_date(&c.submitted_at)}</td>
                                        <td class="data-table__actions">
                                            <button class="btn" on:click=move |_| viewing.set(Some(for_view.clone()))>
                                                "View"
                                            </button>
                                            <button class="btn" on:click=move |_| editing.set(Some(for_edit.clone()))>
                                                "Edit"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || rows.with(Vec::is_empty)>
                    <p class="page__status">"No complaints match these filters."</p>
                </Show>
            </Show>
            <Pagination pager=pager/>
            {move || viewing.get().map(|c| view! { <ViewComplaintDialog complaint=c on_close=Callback::new(move |()| viewing.set(None))/> })}
            {move || {
                editing
                    .get()
                    .map(|c| {
                        view! {
                            <EditComplaintDialog
                                complaint=c
                                on_cancel=Callback::new(move |()| editing.set(None))
                                on_saved=on_saved
                            />
                        }
                    })
            }}
        </div>
    }
}

/// Read-only complaint details with photo and proof video.
#[component]
fn ViewComplaintDialog(complaint: Complaint, on_close: Callback<()>) -> impl IntoView {
    let proof = complaint.proof_video.clone().filter(|v| !v.is_empty());
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--wide" on:click=move |ev| ev.stop_propagation()>
                <h2>"Complaint Details"</h2>
                <img class="dialog__image" src=complaint.image.clone() alt="Reported garbage"/>
                <dl class="dialog__facts">
                    <dt>"Reporter"</dt>
                    <dd>{complaint.name.clone()}</dd>
                    <dt>"Phone"</dt>
                    <dd>{complaint.phone.clone()}</dd>
                    <dt>"Email"</dt>
                    <dd>{complaint.reporter_email().unwrap_or("-").to_owned()}</dd>
                    <dt>"Location"</dt>
                    <dd>{complaint.place()}</dd>
                    <dt>"Coordinates"</dt>
                    <dd>{complaint.location.label()}</dd>
                    <dt>"Status"</dt>
                    <dd><StatusChip status=complaint.status/></dd>
                    <dt>"Priority"</dt>
                    <dd><PriorityChip priority=complaint.priority/></dd>
                    <dt>"Submitted"</dt>
                    <dd>{display_date(&complaint.submitted_at)}</dd>
                    <dt>"Admin notes"</dt>
                    <dd>{complaint.admin_notes.clone().unwrap_or_else(|| "-".to_owned())}</dd>
                </dl>
                {proof.map(|src| view! { <video class="dialog__video" src=src controls=true></video> })}
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>"Close"</button>
                </div>
            </div>
        </div>
    }
}

/// Status, priority and notes editor for one complaint.
#[component]
fn EditComplaintDialog(complaint: Complaint, on_cancel: Callback<()>, on_saved: Callback<()>) -> impl IntoView {
    let session = expect_context::<Session>();
    let id = complaint.id.clone();
    let draft = RwSignal::new(ComplaintUpdate::from(&complaint));
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_save = move |_| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        error.set(None);
        let backend = session.backend().clone();
        let id = id.clone();
        let mut update = draft.get_untracked();
        update.admin_notes = update.admin_notes.filter(|n| !n.trim().is_empty());
        leptos::task::spawn_local(async move {
            let result = api::update_complaint(&backend, &id, &update).await;
            busy.set(false);
            match result {
                Ok(()) => on_saved.run(()),
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                <h2>"Update Complaint"</h2>
                <label class="dialog__label">
                    "Status"
                    <select
                        class="dialog__input"
                        prop:value=move || draft.get().status.as_str()
                        on:change=move |ev| {
                            if let Some(status) = ComplaintStatus::parse(&event_target_value(&ev)) {
                                draft.update(|d| d.status = status);
                            }
                        }
                    >
                        {ComplaintStatus::ALL
                            .iter()
                            .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="dialog__label">
                    "Priority"
                    <select
                        class="dialog__input"
                        prop:value=move || draft.get().priority.as_str()
                        on:change=move |ev| {
                            if let Some(priority) = Priority::parse(&event_target_value(&ev)) {
                                draft.update(|d| d.priority = priority);
                            }
                        }
                    >
                        {Priority::ALL
                            .iter()
                            .map(|p| view! { <option value=p.as_str()>{p.label()}</option> })
                            .collect::<Vec<_>>()}
                    </select>
                </label>
                <label class="dialog__label">
                    "Admin Notes"
                    <textarea
                        class="dialog__input"
                        rows="4"
                        prop:value=move || draft.get().admin_notes.unwrap_or_default()
                        on:input=move |ev| {
                            let notes = event_target_value(&ev);
                            draft.update(|d| d.admin_notes = Some(notes));
                        }
                    ></textarea>
                </label>
                <FormMessage message=error/>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=on_save>
                        {move || if busy.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </div>
        </div>
    }
}
