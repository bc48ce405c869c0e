//! Sentiment gauge card: tweened 0–100 value, bucket label, and bar
//! width.

use leptos::prelude::*;

use crate::runtime::Runtime;
use crate::state::sentiment;

#[component]
pub fn SentimentCard() -> impl IntoView {
    let rt = expect_context::<Runtime>();
    let value = rt.sentiment_value;

    view! {
        <section class="card card--sentiment">
            <h2 class="card__title">"Sentiment"</h2>
            <p class="card__value">
                {move || format!("{:.0}", value.get())}
                <span class="sentiment__label">{move || sentiment::label(value.get())}</span>
            </p>
            <div class="gauge">
                <div
                    class="gauge__bar"
                    style=move || format!("width: {:.1}%", value.get().clamp(0.0, 100.0))
                ></div>
            </div>
        </section>
    }
}
