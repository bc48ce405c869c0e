//! Simulated weather card: tweened temperature plus condition icon and
//! city.

use leptos::prelude::*;

use crate::runtime::Runtime;

#[component]
pub fn WeatherCard() -> impl IntoView {
    let rt = expect_context::<Runtime>();
    let weather = rt.weather;
    let temp = rt.weather_temp;

    view! {
        <section class="card card--weather">
            <h2 class="card__title">"Weather"</h2>
            <p class="card__value">
                <span class="weather__icon">{move || weather.get().condition_icon()}</span>
                {move || format!("{:.1}\u{b0}C", temp.get())}
            </p>
            <p class="card__detail">
                {move || {
                    let w = weather.get();
                    format!("{} \u{b7} {}", w.condition_label(), w.city_name())
                }}
            </p>
        </section>
    }
}
