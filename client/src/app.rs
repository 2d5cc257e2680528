//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` is the session lifetime boundary: it builds the one `SessionStore`,
//! provides it (plus its signals and the backend config) as context, and
//! starts the session probe once the page is live in the browser. Citizen
//! routes sit behind `AuthGate`; `/admin/*` behind an admin-only gate.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::auth_gate::AuthGate;
use crate::components::navbar::Navbar;
use crate::components::toasts::Toasts;
use crate::config::{API_BASE_META, CREDENTIALS_META, ClientConfig};
use crate::net::backend::HttpBackend;
use crate::pages::admin::{
    complaints::ComplaintsManagementPage, dashboard::AdminDashboardPage, moderators::ModeratorsManagementPage,
    users::UsersManagementPage,
};
use crate::pages::{
    HomeRedirect, about::AboutPage, history::HistoryPage, login::LoginPage, past_history::PastHistoryPage,
    profile::ProfilePage, register::RegisterPage, reset_password::ResetPasswordPage,
    submit_complaint::SubmitComplaintPage, upload_proof::UploadProofPage, verification::VerificationPage,
};
use crate::state::session::SessionStore;

/// HTML shell rendered on the server for SSR + hydration.
///
/// `config` is mirrored into `<meta>` tags so the hydrated client talks to
/// the same backend the server was configured with.
pub fn shell(options: LeptosOptions, config: ClientConfig) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=config.api_base.clone()/>
                <meta name=CREDENTIALS_META content=config.credentials.as_str()/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<ClientConfig>().unwrap_or_else(ClientConfig::detect);
    let session = SessionStore::new(HttpBackend::new(config.clone()));

    provide_context(config);
    provide_context(session.auth());
    provide_context(session.notices());
    provide_context(session.clone());

    // Effects only run in the browser, so the probe never fires during SSR.
    Effect::new(move || {
        let session = session.clone();
        leptos::task::spawn_local(async move {
            let outcome = session.check_session().await;
            leptos::logging::log!("session probe finished: authenticated={}", outcome.success);
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/clean-india.css"/>
        <Title text="Clean India"/>
        <Meta name="description" content="Report garbage and track its cleanup"/>

        <Router>
            <Navbar/>
            <Toasts/>
            <main class="app-main">
                <Routes fallback=|| view! { <HomeRedirect/> }>
                    <Route path=StaticSegment("") view=HomeRedirect/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegisterPage/>
                    <Route path=StaticSegment("about") view=AboutPage/>
                    <Route path=StaticSegment("reset-password") view=ResetPasswordPage/>
                    <Route path=StaticSegment("submit") view=|| view! { <AuthGate><SubmitComplaintPage/></AuthGate> }/>
                    <Route path=StaticSegment("history") view=|| view! { <AuthGate><HistoryPage/></AuthGate> }/>
                    <Route path=StaticSegment("upload-proof") view=|| view! { <AuthGate><UploadProofPage/></AuthGate> }/>
                    <Route path=StaticSegment("profile") view=|| view! { <AuthGate><ProfilePage/></AuthGate> }/>
                    <Route path=StaticSegment("pasthistory") view=|| view! { <AuthGate><PastHistoryPage/></AuthGate> }/>
                    <Route path=StaticSegment("verification") view=|| view! { <AuthGate><VerificationPage/></AuthGate> }/>
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("dashboard"))
                        view=|| view! { <AuthGate admin_only=true><AdminDashboardPage/></AuthGate> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("complaints"))
                        view=|| view! { <AuthGate admin_only=true><ComplaintsManagementPage/></AuthGate> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("users"))
                        view=|| view! { <AuthGate admin_only=true><UsersManagementPage/></AuthGate> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("moderators"))
                        view=|| view! { <AuthGate admin_only=true><ModeratorsManagementPage/></AuthGate> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
