//! Colored chips for complaint status and priority.

use leptos::prelude::*;

use crate::net::types::{ComplaintStatus, Priority};
use crate::util::format::{priority_class, status_class};

#[component]
pub fn StatusChip(status: ComplaintStatus) -> impl IntoView {
    view! { <span class=status_class(status)>{status.label()}</span> }
}

#[component]
pub fn PriorityChip(priority: Priority) -> impl IntoView {
    view! { <span class=priority_class(priority)>{priority.label()}</span> }
}
