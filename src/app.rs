//! Dashboard root: theme bootstrap, widget runtime, global shortcuts, and
//! the card grid.

use leptos::ev;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use toast::{Stacking, ToastHost, ToastKind, provide_toaster};
use wasm_bindgen::JsCast;

use crate::components::clock_card::ClockCard;
use crate::components::kpi_grid::KpiGrid;
use crate::components::price_card::PriceCard;
use crate::components::sentiment_card::SentimentCard;
use crate::components::task_list::TaskList;
use crate::components::theme_toggle::ThemeToggle;
use crate::components::ticker_card::TickerCard;
use crate::components::weather_card::WeatherCard;
use crate::runtime;
use crate::util::theme;

/// The dashboard stacks toasts and drops them after three seconds.
const TOAST_TIMEOUT_MS: u32 = 3_000;

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    let toaster = provide_toaster(Stacking::Stacked, TOAST_TIMEOUT_MS);

    // Apply the persisted theme before anything renders.
    let theme = RwSignal::new(theme::load());
    theme::apply(theme.get_untracked());
    provide_context(theme);

    // Build all widgets. A widget whose init failed is skipped and
    // reported; its siblings run regardless.
    let (rt, failures) = runtime::start();
    for failure in &failures {
        log::error!("widget init failed: {failure}");
    }
    if !failures.is_empty() {
        toaster.notify(
            format!("{} widget(s) failed to initialize", failures.len()),
            ToastKind::Error,
        );
    }
    provide_context(rt);

    // The '/' shortcut focuses this input; TaskList mounts it.
    let filter_ref = NodeRef::<leptos::html::Input>::new();

    // Global shortcuts, ignored while focus is in a text field.
    let _ = window_event_listener(ev::keydown, move |ev| {
        if is_text_input(&ev) {
            return;
        }
        match ev.key().as_str() {
            "t" => theme.update(|t| *t = theme::toggle(*t)),
            "/" => {
                ev.prevent_default();
                if let Some(input) = filter_ref.get_untracked() {
                    let _ = input.focus();
                }
            }
            "?" => toaster.notify(
                "Shortcuts: t toggles the theme, / focuses the task filter, ? shows this help",
                ToastKind::Info,
            ),
            _ => {}
        }
    });

    view! {
        <Title text="Pulse Dashboard"/>

        <div class="dashboard">
            <header class="dashboard__header">
                <h1 class="dashboard__title">"Pulse"</h1>
                <ThemeToggle/>
            </header>
            <div class="dashboard__grid">
                <ClockCard/>
                <WeatherCard/>
                <PriceCard/>
                <SentimentCard/>
                <TickerCard/>
                <KpiGrid/>
                <TaskList filter_ref=filter_ref/>
            </div>
        </div>
        <ToastHost/>
    }
}

/// Whether the key event originated in a text-entry element.
fn is_text_input(ev: &web_sys::KeyboardEvent) -> bool {
    ev.target()
        .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
        .map_or(false, |el| {
            matches!(el.tag_name().as_str(), "INPUT" | "TEXTAREA" | "SELECT")
        })
}
