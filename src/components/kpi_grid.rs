//! KPI card: one tweened value per configured metric, each on its own
//! randomized cadence.

use leptos::prelude::*;

use crate::runtime::{KpiHandle, Runtime};

#[component]
pub fn KpiGrid() -> impl IntoView {
    let rt = expect_context::<Runtime>();

    // The KPI set is fixed at startup, so this is a plain iteration, not
    // a reactive <For/>.
    let cells = rt.kpis.iter().copied().map(kpi_cell).collect::<Vec<_>>();
    let empty = rt
        .kpis
        .is_empty()
        .then(|| view! { <p class="card__empty">"Metrics unavailable."</p> });

    view! {
        <section class="card card--kpis">
            <h2 class="card__title">"Key Metrics"</h2>
            {empty}
            <div class="kpi-grid">{cells}</div>
        </section>
    }
}

fn kpi_cell(handle: KpiHandle) -> impl IntoView {
    let state = handle.state;
    let value = handle.value;

    view! {
        <div class="kpi">
            <p class="kpi__label">{move || state.with(|k| k.spec.label.clone())}</p>
            <p class="kpi__value">{move || state.with(|k| k.format(value.get()))}</p>
        </div>
    }
}
