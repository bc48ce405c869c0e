use leptos::prelude::*;

#[component]
pub fn TeachingPage() -> impl IntoView {
    view! {
        <h2 class="page__title">"Teaching"</h2>
        <div class="course-card">
            <h3>"LING 431 — Computational Morphology"</h3>
            <p>"Finite-state methods, paradigm induction, and neural inflection models. Spring term."</p>
        </div>
        <div class="course-card">
            <h3>"LING 220 — Introduction to Language Technology"</h3>
            <p>"A survey course for linguistics majors with no programming background. Autumn term."</p>
        </div>
        <div class="course-card">
            <h3>"LING 590 — Field Methods Seminar"</h3>
            <p>"Co-taught with the documentation group; includes a live elicitation practicum."</p>
        </div>
    }
}
