//! Citizen-facing summary of one complaint.

use leptos::prelude::*;
use leptos_router::components::A;

use super::status_chip::{PriorityChip, StatusChip};
use crate::net::types::Complaint;
use crate::util::format::display_date;
use crate::util::nav::upload_proof_href;

#[component]
pub fn ComplaintCard(complaint: Complaint) -> impl IntoView {
    let awaits_proof = complaint.awaits_proof();
    let proof_href = upload_proof_href(&complaint.id);
    let proof_video = complaint.proof_video.clone().filter(|v| !v.is_empty());
    let notes = complaint.admin_notes.clone().filter(|n| !n.trim().is_empty());

    view! {
        <article class="complaint-card">
            <img class="complaint-card__image" src=complaint.image.clone() alt="Reported garbage"/>
            <div class="complaint-card__body">
                <header class="complaint-card__header">
                    <StatusChip status=complaint.status/>
                    <PriorityChip priority=complaint.priority/>
                    <span class="complaint-card__date">{display_date(&complaint.submitted_at)}</span>
                </header>
                <p class="complaint-card__place">{complaint.place()}</p>
                <p class="complaint-card__contact">{complaint.name.clone()} " · " {complaint.phone.clone()}</p>
                {notes.map(|n| view! { <p class="complaint-card__notes">"Admin notes: " {n}</p> })}
                {proof_video
                    .map(|src| {
                        view! {
                            <video class="complaint-card__proof" src=src controls=true preload="metadata"></video>
                        }
                    })}
                <Show when=move || awaits_proof>
                    <A href=proof_href.clone() attr:class="btn btn--primary">
                        "Upload Proof"
                    </A>
                </Show>
            </div>
        </article>
    }
}
