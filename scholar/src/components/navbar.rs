//! Top navigation bar: brand, page links, and the mobile hamburger toggle.

use leptos::prelude::*;

use crate::app::Navigate;
use crate::state::nav::{NavState, PageId};

/// Site-wide navigation. The link matching the active page carries the
/// `active` class; the menu list gets it while the mobile menu is open.
#[component]
pub fn NavBar() -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    let navigate = expect_context::<Navigate>();

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="#home" on:click=move |_| navigate.0.run(PageId::Home)>
                "Dr. Maya Okafor"
            </a>

            <button
                class="navbar__toggle"
                aria-label="Toggle navigation menu"
                on:click=move |_| nav.update(|n| n.toggle_menu())
            >
                <span></span>
                <span></span>
                <span></span>
            </button>

            <ul class="navbar__menu" class:active=move || nav.get().menu_open>
                {PageId::ALL
                    .into_iter()
                    .map(|page| {
                        view! {
                            <li>
                                <a
                                    class="navbar__link"
                                    class:active=move || nav.get().current == page
                                    href=format!("#{}", page.slug())
                                    on:click=move |_| navigate.0.run(page)
                                >
                                    {page.title()}
                                </a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </header>
    }
}
