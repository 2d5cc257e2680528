//! Static project description.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page about-page">
            <article class="about-card">
                <h1>"About Clean India"</h1>
                <p>
                    "Clean India lets citizens report garbage in their surroundings. Each complaint "
                    "carries a photo and the reporter's live location so municipal teams can find "
                    "and clear it quickly."
                </p>
                <h2>"Features"</h2>
                <ul>
                    <li>"Photo and location based complaints"</li>
                    <li>"Complaint tracking with live status"</li>
                    <li>"Video proof upload once an area is cleaned"</li>
                    <li>"Staff dashboard for triage and user management"</li>
                </ul>
                <h2>"How it works"</h2>
                <ol>
                    <li>"Create an account and verify your email."</li>
                    <li>"Open Submit Complaint, take a photo and let the page detect your location."</li>
                    <li>"Follow progress from your complaint history."</li>
                    <li>"After the spot is cleaned, upload a short video as proof."</li>
                </ol>
            </article>
        </div>
    }
}
