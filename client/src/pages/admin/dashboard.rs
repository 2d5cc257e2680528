//! Admin landing page: counters and the newest complaints.
//!
//! SYSTEM CONTEXT
//! ==============
//! Stats and recent complaints are independent reads issued together and
//! joined before anything renders, so the page never shows half a dashboard.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::status_chip::{PriorityChip, StatusChip};
use crate::net::api::{self, ApiError};
use crate::net::types::{Complaint, ComplaintPage, DashboardStats};
use crate::state::admin::recent_complaints_query;
use crate::state::session::Session;
use crate::util::cancel::scoped_token;
use crate::util::format::display_date;
use crate::util::nav::{ADMIN_COMPLAINTS_PATH, ADMIN_MODERATORS_PATH, ADMIN_USERS_PATH};

#[derive(Clone, Debug, PartialEq)]
enum DashboardLoad {
    Loading,
    Ready { stats: DashboardStats, recent: Vec<Complaint> },
    Failed(String),
}

fn join_dashboard(
    stats: Result<DashboardStats, ApiError>,
    recent: Result<ComplaintPage, ApiError>,
) -> DashboardLoad {
    match (stats, recent) {
        (Ok(stats), Ok(page)) => DashboardLoad::Ready { stats, recent: page.complaints },
        (Err(e), _) | (_, Err(e)) => {
            leptos::logging::warn!("dashboard load failed: {e}");
            DashboardLoad::Failed(match e {
                ApiError::Rejected(message) => message,
                ApiError::Network(_) => "Failed to load dashboard data".to_owned(),
            })
        }
    }
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let session = expect_context::<Session>();
    let token = scoped_token();
    let load = RwSignal::new(DashboardLoad::Loading);

    Effect::new(move || {
        let backend = session.backend().clone();
        let token = token.clone();
        leptos::task::spawn_local(async move {
            let recent_query = recent_complaints_query();
            let (stats, recent) =
                futures::join!(api::dashboard_stats(&backend), api::admin_complaints(&backend, &recent_query));
            if let Some(result) = token.guard(join_dashboard(stats, recent)) {
                load.set(result);
            }
        });
    });

    view! {
        <div class="page admin-page">
            <h1>"Admin Dashboard"</h1>
            {move || match load.get() {
                DashboardLoad::Loading => view! { <p class="page__status">"Loading dashboard..."</p> }.into_any(),
                DashboardLoad::Failed(message) => {
                    view! { <p class="form-message form-message--error">{message}</p> }.into_any()
                }
                DashboardLoad::Ready { stats, recent } => view! {
                    <StatsGrid stats=stats/>
                    <RecentComplaints complaints=recent/>
                }
                .into_any(),
            }}
            <nav class="admin-page__shortcuts">
                <A href=ADMIN_COMPLAINTS_PATH attr:class="btn">"Manage Complaints"</A>
                <A href=ADMIN_USERS_PATH attr:class="btn">"Manage Users"</A>
                <A href=ADMIN_MODERATORS_PATH attr:class="btn">"Manage Moderators"</A>
            </nav>
        </div>
    }
}

#[component]
fn StatsGrid(stats: DashboardStats) -> impl IntoView {
    let tiles = [
        ("Total Users", stats.total_users),
        ("Total Complaints", stats.total_complaints),
        ("Pending", stats.pending_complaints),
        ("Resolved", stats.resolved_complaints),
        ("This Week", stats.recent_complaints),
    ];
    view! {
        <div class="stats-grid">
            {tiles
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <div class="stats-grid__tile">
                            <span class="stats-grid__value">{value}</span>
                            <span class="stats-grid__label">{label}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

#[component]
fn RecentComplaints(complaints: Vec<Complaint>) -> impl IntoView {
    if complaints.is_empty() {
        return view! { <p class="page__status">"No complaints yet."</p> }.into_any();
    }
    view! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>"Reporter"</th>
                    <th>"Location"</th>
                    <th>"Status"</th>
                    <th>"Priority"</th>
                    <th>"Submitted"</th>
                </tr>
            </thead>
            <tbody>
                {complaints
                    .into_iter()
                    .map(|c| {
                        view! {
                            <tr>
                                <td>{c.name.clone()}</td>
                                <td>{c.place()}</td>
                                <td><StatusChip status=c.status/></td>
                                <td><PriorityChip priority=c.priority/></td>
                                <td>{display_date(&c.submitted_at)}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
    .into_any()
}
