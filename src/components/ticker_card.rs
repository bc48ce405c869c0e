//! News ticker card: rotates through the configured headlines.

use leptos::prelude::*;

use crate::runtime::Runtime;

#[component]
pub fn TickerCard() -> impl IntoView {
    let rt = expect_context::<Runtime>();
    let ticker = rt.ticker;

    view! {
        <section class="card card--ticker">
            <h2 class="card__title">"Newsline"</h2>
            {move || {
                ticker.with(|t| match t.current() {
                    Some(item) => view! {
                        <div class="ticker__item">
                            <p class="ticker__headline">{item.headline.clone()}</p>
                            <p class="ticker__source">{item.source.clone()}</p>
                        </div>
                    }
                    .into_any(),
                    None => view! {
                        <p class="card__empty">"No headlines configured."</p>
                    }
                    .into_any(),
                })
            }}
        </section>
    }
}
