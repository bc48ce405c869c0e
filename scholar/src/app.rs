//! Root component: navigation shell, the eight page sections, and the
//! toast overlay.

use leptos::ev;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use toast::{Stacking, ToastHost, provide_toaster};
use wasm_bindgen::JsCast;

use crate::components::navbar::NavBar;
use crate::pages::{
    about::AboutPage, blog::BlogPage, conferences::ConferencesPage, contact::ContactPage,
    home::HomePage, publications::PublicationsPage, research::ResearchPage,
    teaching::TeachingPage,
};
use crate::state::nav::{NavState, PageId};
use crate::util::browser;

/// This site shows one toast at a time, for five seconds.
const TOAST_TIMEOUT_MS: u32 = 5_000;

/// Navigation entry point shared through context. Every page switch —
/// link clicks, hero buttons, keyboard shortcuts — funnels through this
/// one callback.
#[derive(Clone, Copy)]
pub struct Navigate(pub Callback<PageId>);

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_toaster(Stacking::Single, TOAST_TIMEOUT_MS);
    toast::inject_styles();

    let nav = RwSignal::new(NavState::default());
    provide_context(nav);

    let navigate = Navigate(Callback::new(move |page: PageId| {
        nav.update(|n| n.show(page));
        browser::scroll_to_top();
        browser::write_fragment(page.slug());
    }));
    provide_context(navigate);

    // Initial page from the URL fragment; unknown or absent falls back to
    // the home page.
    let initial = browser::read_fragment()
        .and_then(|slug| PageId::from_slug(&slug))
        .unwrap_or_default();
    navigate.0.run(initial);

    // Browser back/forward and plain `#slug` anchors both arrive here.
    let _ = window_event_listener(ev::hashchange, move |_| {
        let page = browser::read_fragment().and_then(|slug| PageId::from_slug(&slug));
        if let Some(page) = page {
            nav.update(|n| n.show(page));
            browser::scroll_to_top();
        }
    });

    // Alt+1 .. Alt+8 jump straight to a page.
    let _ = window_event_listener(ev::keydown, move |ev| {
        if !ev.alt_key() {
            return;
        }
        if let Some(page) = ev.key().chars().next().and_then(PageId::from_digit) {
            ev.prevent_default();
            navigate.0.run(page);
        }
    });

    // Clicking anywhere outside the navigation closes the mobile menu.
    let _ = window_event_listener(ev::click, move |ev| {
        let inside_nav = ev
            .target()
            .and_then(|target| target.dyn_into::<web_sys::Element>().ok())
            .map_or(false, |el| el.closest(".navbar").ok().flatten().is_some());
        if !inside_nav {
            nav.update(|n| n.close_menu());
        }
    });

    view! {
        <Title text="Dr. Maya Okafor — Computational Linguistics"/>

        <NavBar/>
        <main class="site">
            <PageSection page=PageId::Home>
                <HomePage/>
            </PageSection>
            <PageSection page=PageId::About>
                <AboutPage/>
            </PageSection>
            <PageSection page=PageId::Research>
                <ResearchPage/>
            </PageSection>
            <PageSection page=PageId::Publications>
                <PublicationsPage/>
            </PageSection>
            <PageSection page=PageId::Conferences>
                <ConferencesPage/>
            </PageSection>
            <PageSection page=PageId::Teaching>
                <TeachingPage/>
            </PageSection>
            <PageSection page=PageId::Blog>
                <BlogPage/>
            </PageSection>
            <PageSection page=PageId::Contact>
                <ContactPage/>
            </PageSection>
        </main>
        <ToastHost/>
    }
}

/// One switchable page section. All eight stay in the DOM; visibility is
/// the `active` class, so exactly one section carries it at a time.
#[component]
fn PageSection(page: PageId, children: Children) -> impl IntoView {
    let nav = expect_context::<RwSignal<NavState>>();
    view! {
        <section id=page.slug() class="page" class:active=move || nav.get().current == page>
            {children()}
        </section>
    }
}
