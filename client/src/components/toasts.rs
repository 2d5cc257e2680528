//! Transient notification stack.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` and pages push onto `NotificationState`; this component
//! renders the stack and retires each toast after `TOAST_TTL_MS` in the
//! browser. Clicking a toast dismisses it early.

use leptos::prelude::*;

use crate::state::notify::{NotificationState, Toast};

#[cfg(feature = "hydrate")]
const TOAST_TTL_MS: u32 = 4_000;

#[component]
pub fn Toasts() -> impl IntoView {
    let notices = expect_context::<RwSignal<NotificationState>>();

    // Schedule expiry for every toast newer than the last one seen.
    Effect::new(move |seen: Option<u64>| {
        let seen = seen.unwrap_or(0);
        let fresh: Vec<u64> = notices.with(|n| n.toasts.iter().map(|t| t.id).filter(|id| *id > seen).collect());
        let newest = fresh.iter().copied().max().unwrap_or(seen);
        #[cfg(feature = "hydrate")]
        {
            for id in fresh {
                leptos::task::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(TOAST_TTL_MS).await;
                    notices.update(|n| n.dismiss(id));
                });
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = fresh;
        }
        newest
    });

    view! {
        <div class="toasts" role="status" aria-live="polite">
            <For
                each=move || notices.get().toasts
                key=|t| t.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!("toast {}", toast.kind.css_modifier())
                            on:click=move |_| notices.update(|n| n.dismiss(id))
                        >
                            {toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
