//! Wall-clock card: formatted time and date, refreshed every second.

use leptos::prelude::*;

use crate::runtime::Runtime;

#[component]
pub fn ClockCard() -> impl IntoView {
    let rt = expect_context::<Runtime>();
    let clock = rt.clock;

    view! {
        <section class="card card--clock">
            <h2 class="card__title">"Clock"</h2>
            <p class="card__value">{move || clock.get().time}</p>
            <p class="card__detail">{move || clock.get().date}</p>
        </section>
    }
}
