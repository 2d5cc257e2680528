//! Read-only view of the signed-in account.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthState;
use crate::util::nav::VERIFICATION_PATH;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    move || {
        let Some(user) = auth.get().user else {
            return view! { <p class="page__status">"Loading profile..."</p> }.into_any();
        };
        let verified = user.is_account_verified;
        view! {
            <div class="page profile-page">
                <div class="profile-card">
                    <div class="profile-card__avatar">{user.initials()}</div>
                    <h1>{user.name.clone()}</h1>
                    <p class="profile-card__email">{user.email.clone()}</p>
                    <dl class="profile-card__facts">
                        <dt>"Role"</dt>
                        <dd class="chip chip--role">{user.role.as_str()}</dd>
                        <dt>"Email status"</dt>
                        <dd>{if verified { "Verified" } else { "Not verified" }}</dd>
                    </dl>
                    <Show when=move || !verified>
                        <A href=VERIFICATION_PATH attr:class="btn btn--primary">"Verify email"</A>
                    </Show>
                </div>
            </div>
        }
        .into_any()
    }
}
