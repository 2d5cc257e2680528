//! Top navigation bar driven by the role-based navigation plan.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::A;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::Session;
use crate::util::nav::{logout_redirect, resolve_nav, role_chip};

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<Session>();
    let auth = session.auth();

    let plan = Memo::new(move |_| {
        let state = auth.get();
        resolve_nav(state.is_authenticated, state.user.as_ref().map(|u| u.role))
    });
    let chip = move || role_chip(auth.get().viewer());
    let user_name = move || auth.get().user.map(|u| u.name).unwrap_or_default();

    // Every page, gated or not, ends on the login screen after logout.
    let logged_out = RwSignal::new(false);
    let navigate = use_navigate();
    let location = use_location();
    Effect::new(move || {
        if !logged_out.get() {
            return;
        }
        logged_out.set(false);
        if let Some(target) = logout_redirect(&location.pathname.get_untracked()) {
            navigate(target, NavigateOptions::default());
        }
    });

    let on_logout = move |_| {
        let session = session.clone();
        leptos::task::spawn_local(async move {
            session.logout().await;
            logged_out.set(true);
        });
    };

    view! {
        <header class="navbar">
            <A href=move || plan.get().home_path.to_owned() attr:class="navbar__brand">
                "Clean India"
            </A>
            <nav class="navbar__links">
                {move || {
                    plan.get()
                        .links
                        .iter()
                        .map(|link| {
                            view! {
                                <A href=link.path attr:class="navbar__link">
                                    {link.label}
                                </A>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </nav>
            <span class="navbar__spacer"></span>
            <Show when=move || auth.get().is_authenticated>
                <span class="navbar__user">
                    {user_name}
                    {move || chip().map(|label| view! { <span class="chip chip--role">{label}</span> })}
                </span>
                <button class="btn navbar__logout" on:click=on_logout.clone()>
                    "Logout"
                </button>
            </Show>
        </header>
    }
}
