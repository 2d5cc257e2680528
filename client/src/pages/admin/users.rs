//! Staff user management: search, page and deactivate accounts.

use leptos::prelude::*;

use crate::components::pagination::Pagination;
use crate::net::api;
use crate::net::types::ManagedUser;
use crate::pages::FormMessage;
use crate::state::admin::{Pager, user_query};
use crate::state::notify::ToastKind;
use crate::state::session::Session;
use crate::util::cancel::scoped_slot;
use crate::util::format::display_date;

#[component]
pub fn UsersManagementPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let slot = scoped_slot();

    let search = RwSignal::new(String::new());
    let pager = RwSignal::new(Pager::default());
    let refresh = RwSignal::new(0_u32);
    let rows = RwSignal::new(Vec::<ManagedUser>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let confirming = RwSignal::new(None::<ManagedUser>);

    let query = Memo::new(move |_| user_query(&search.get(), &pager.get()));

    let load_session = session.clone();
    Effect::new(move || {
        refresh.track();
        let query = query.get();
        let backend = load_session.backend().clone();
        let token = slot.next();
        loading.set(true);
        leptos::task::spawn_local(async move {
            let result = api::admin_users(&backend, &query).await;
            let Some(result) = token.guard(result) else {
                return;
            };
            loading.set(false);
            match result {
                Ok(page) => {
                    error.set(None);
                    rows.set(page.users);
                    pager.update(|p| p.set_total(page.total));
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    });

    let on_confirm = move |_| {
        let Some(user) = confirming.get_untracked() else {
            return;
        };
        confirming.set(None);
        let session = session.clone();
        leptos::task::spawn_local(async move {
            match api::deactivate_user(session.backend(), &user.id).await {
                Ok(()) => {
                    session.notify(ToastKind::Success, format!("{} has been deactivated", user.name));
                    refresh.update(|n| *n += 1);
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    };

    view! {
        <div class="page admin-page">
            <h1>"Users Management"</h1>
            <div class="filters">
                <input
                    class="form-input"
                    type="search"
                    placeholder="Search users by name or email"
                    prop:value=move || search.get()
                    on:input=move |ev| {
                        search.set(event_target_value(&ev));
                        pager.update(Pager::rewind);
                    }
                />
            </div>
            <FormMessage message=error/>
            <Show when=move || !loading.get() fallback=|| view! { <p class="page__status">"Loading users..."</p> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Role"</th>
                            <th>"Verified"</th>
                            <th>"Status"</th>
                            <th>"Joined"</th>
                            <th>"Last Login"</th>
                            <th>"Actions"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || rows.get()
                            key=|u| (u.id.clone(), u.is_active)
                            children=move |u: ManagedUser| {
                                let target = u.clone();
                                let active = u.is_active;
                                view! {
                                    <tr>
                                        <td>{u.name.clone()}</td>
                                        <td>{u.email.clone()}</td>
                                        <td><span class="chip chip--role">{u.role.as_str()}</span></td>
                                        <td>{if u.is_account_verified { "Verified" } else { "Not Verified" }}</td>
                                        <td>{if active { "Active" } else { "Inactive" }}</td>
                                        <td>{display_date(&u.created_at)}</td>
                                        <td>{u.last_login.as_deref().map_or_else(|| "Never".to_owned(), display_date)}</td>
                                        <td class="data-table__actions">
                                            <button
                                                class="btn btn--danger"
                                                disabled=!active
                                                on:click=move |_| confirming.set(Some(target.clone()))
                                            >
                                                "Deactivate"
                                            </button>
                                        </td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
                <Show when=move || rows.with(Vec::is_empty)>
                    <p class="page__status">"No users found."</p>
                </Show>
            </Show>
            <Pagination pager=pager/>
            <Show when=move || confirming.get().is_some()>
                <div class="dialog-backdrop" on:click=move |_| confirming.set(None)>
                    <div class="dialog" on:click=move |ev| ev.stop_propagation()>
                        <h2>"Deactivate User"</h2>
                        <p class="dialog__danger">
                            {move || {
                                let name = confirming.get().map(|u| u.name).unwrap_or_default();
                                format!("{name} will no longer be able to sign in.")
                            }}
                        </p>
                        <div class="dialog__actions">
                            <button class="btn" on:click=move |_| confirming.set(None)>"Cancel"</button>
                            <button class="btn btn--danger" on:click=on_confirm.clone()>"Deactivate"</button>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
