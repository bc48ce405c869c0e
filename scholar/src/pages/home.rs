//! Landing page with the hero banner and quick links into the site.

use leptos::prelude::*;

use crate::app::Navigate;
use crate::state::nav::PageId;

#[component]
pub fn HomePage() -> impl IntoView {
    let navigate = expect_context::<Navigate>();

    view! {
        <div class="hero">
            <h1 class="hero__title">"Dr. Maya Okafor"</h1>
            <p class="hero__subtitle">
                "Associate Professor of Computational Linguistics, University of Westbrook"
            </p>
            <p class="hero__lead">
                "I study how machines can learn the structure of low-resource languages, "
                "and how linguistic theory can keep them honest while they do it."
            </p>
            <div class="hero__actions">
                <a
                    class="btn btn--primary"
                    href="#research"
                    on:click=move |_| navigate.0.run(PageId::Research)
                >
                    "View Research"
                </a>
                <a
                    class="btn"
                    href="#contact"
                    on:click=move |_| navigate.0.run(PageId::Contact)
                >
                    "Get in Touch"
                </a>
            </div>
        </div>

        <div class="achievements">
            <div class="achievement-card">
                <h3>"40+ publications"</h3>
                <p>"in journals and refereed conference proceedings"</p>
            </div>
            <div class="achievement-card">
                <h3>"3 funded projects"</h3>
                <p>"on morphology-aware modeling of under-documented languages"</p>
            </div>
            <div class="achievement-card">
                <h3>"12 PhD students"</h3>
                <p>"supervised to completion"</p>
            </div>
        </div>
    }
}
