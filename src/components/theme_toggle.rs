//! Light/dark theme toggle button.

use leptos::prelude::*;

use crate::util::theme::{self, Theme};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<Theme>>();

    view! {
        <button
            class="theme-toggle"
            aria-label="Toggle color theme"
            on:click=move |_| theme.update(|t| *t = theme::toggle(*t))
        >
            {move || match theme.get() {
                Theme::Light => "\u{1f319}",
                Theme::Dark => "\u{2600}",
            }}
        </button>
    }
}
