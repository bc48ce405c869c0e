use leptos::prelude::*;

#[component]
pub fn ConferencesPage() -> impl IntoView {
    view! {
        <h2 class="page__title">"Conferences & Talks"</h2>
        <div class="conference-item">
            <h3>"Invited talk — SIGMORPHON 2025"</h3>
            <p>"\"Grammars are data too\" — on reusing descriptive grammars as weak supervision."</p>
        </div>
        <div class="conference-item">
            <h3>"Panel — LREC 2024"</h3>
            <p>"Community consent and licensing for field-collected corpora."</p>
        </div>
        <div class="conference-item">
            <h3>"Tutorial — ACL 2023"</h3>
            <p>"Low-resource morphology from zero: elicitation, modeling, evaluation."</p>
        </div>
    }
}
