//! Privileged account management: list moderators and admins, create new ones.

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{Moderator, NewModerator, Role};
use crate::pages::FormMessage;
use crate::state::notify::ToastKind;
use crate::state::session::Session;
use crate::util::cancel::scoped_slot;
use crate::util::format::display_date;
use crate::util::validate::validate_moderator;

#[component]
pub fn ModeratorsManagementPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let slot = scoped_slot();

    let refresh = RwSignal::new(0_u32);
    let rows = RwSignal::new(Vec::<Moderator>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let form = RwSignal::new(NewModerator::default());
    let form_error = RwSignal::new(None::<String>);
    let creating = RwSignal::new(false);
    let show_form = RwSignal::new(false);

    let load_session = session.clone();
    Effect::new(move || {
        refresh.track();
        let backend = load_session.backend().clone();
        let token = slot.next();
        loading.set(true);
        leptos::task::spawn_local(async move {
            let result = api::moderators(&backend).await;
            let Some(result) = token.guard(result) else {
                return;
            };
            loading.set(false);
            match result {
                Ok(list) => {
                    error.set(None);
                    rows.set(list);
                }
                Err(e) => error.set(Some(e.user_message())),
            }
        });
    });

    let on_create = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if creating.get_untracked() {
            return;
        }
        let account = form.get_untracked();
        if let Err(e) = validate_moderator(&account.name, &account.email, &account.password) {
            form_error.set(Some(e.to_string()));
            return;
        }
        form_error.set(None);
        creating.set(true);
        let session = session.clone();
        leptos::task::spawn_local(async move {
            let result = api::create_moderator(session.backend(), &account).await;
            creating.set(false);
            match result {
                Ok(()) => {
                    session.notify(ToastKind::Success, format!("{} account created", account.role.as_str()));
                    form.set(NewModerator::default());
                    show_form.set(false);
                    refresh.update(|n| *n += 1);
                }
                Err(e) => form_error.set(Some(e.user_message())),
            }
        });
    };

    let text_field = move |label: &'static str, kind: &'static str, get: fn(&NewModerator) -> String, set: fn(&mut NewModerator, String)| {
        view! {
            <label class="dialog__label">
                {label}
                <input
                    class="dialog__input"
                    type=kind
                    prop:value=move || form.with(get)
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        form.update(|f| set(f, value));
                    }
                />
            </label>
        }
    };

    view! {
        <div class="page admin-page">
            <header class="page__header">
                <h1>"Moderators Management"</h1>
                <button class="btn btn--primary" on:click=move |_| show_form.set(true)>"Add Moderator"</button>
            </header>
            <FormMessage message=error/>
            <Show when=move || !loading.get() fallback=|| view! { <p class="page__status">"Loading moderators..."</p> }>
                <table class="data-table">
                    <thead>
                        <tr>
                            <th>"Name"</th>
                            <th>"Email"</th>
                            <th>"Role"</th>
                            <th>"Created"</th>
                        </tr>
                    </thead>
                    <tbody>
                        <For
                            each=move || rows.get()
                            key=|m| m.id.clone()
                            children=move |m: Moderator| {
                                view! {
                                    <tr>
                                        <td>{m.name}</td>
                                        <td>{m.email}</td>
                                        <td><span class="chip chip--role">{m.role.as_str()}</span></td>
                                        <td>{display_date(&m.created_at)}</td>
                                    </tr>
                                }
                            }
                        />
                    </tbody>
                </table>
            </Show>
            <Show when=move || show_form.get()>
                <div class="dialog-backdrop" on:click=move |_| show_form.set(false)>
                    <form class="dialog" on:click=move |ev| ev.stop_propagation() on:submit=on_create.clone()>
                        <h2>"Create Staff Account"</h2>
                        {text_field("Full Name", "text", |f| f.name.clone(), |f, v| f.name = v)}
                        {text_field("Email Address", "email", |f| f.email.clone(), |f, v| f.email = v)}
                        {text_field("Password", "password", |f| f.password.clone(), |f, v| f.password = v)}
                        <label class="dialog__label">
                            "Role"
                            <select
                                class="dialog__input"
                                prop:value=move || form.get().role.as_str()
                                on:change=move |ev| {
                                    let role = if event_target_value(&ev) == "admin" { Role::Admin } else { Role::Moderator };
                                    form.update(|f| f.role = role);
                                }
                            >
                                <option value="moderator">"Moderator"</option>
                                <option value="admin">"Admin"</option>
                            </select>
                        </label>
                        <FormMessage message=form_error/>
                        <div class="dialog__actions">
                            <button class="btn" type="button" on:click=move |_| show_form.set(false)>"Cancel"</button>
                            <button class="btn btn--primary" type="submit" disabled=move || creating.get()>
                                {move || if creating.get() { "Creating..." } else { "Create" }}
                            </button>
                        </div>
                    </form>
                </div>
            </Show>
        </div>
    }
}
