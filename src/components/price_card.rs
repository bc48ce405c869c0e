//! Simulated price card: tweened price, percent change vs. the previous
//! sample, and a sparkline over the capped history.

use leptos::prelude::*;

use crate::components::sparkline::Sparkline;
use crate::runtime::Runtime;

#[component]
pub fn PriceCard() -> impl IntoView {
    let rt = expect_context::<Runtime>();
    let price = rt.price;
    let value = rt.price_value;
    let change = rt.price_change;

    let history = Signal::derive(move || price.get().history());

    view! {
        <section class="card card--price">
            <h2 class="card__title">"BTC / USD"</h2>
            <p class="card__value">{move || format!("${:.2}", value.get())}</p>
            <p
                class="card__detail price__change"
                class=("price__change--up", move || change.get() >= 0.0)
                class=("price__change--down", move || change.get() < 0.0)
            >
                {move || format!("{:+.2}%", change.get())}
            </p>
            <Sparkline values=history/>
        </section>
    }
}
