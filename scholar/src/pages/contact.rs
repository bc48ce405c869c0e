use leptos::prelude::*;

use crate::components::contact_form::ContactForm;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <h2 class="page__title">"Contact"</h2>
        <p>
            "For prospective students: please read the group's openings page "
            "before writing — I reply to every message that mentions a concrete "
            "research interest."
        </p>
        <p>"Office: Humanities Building 4.12 · office hours Tuesday 14:00–16:00"</p>
        <ContactForm/>
    }
}
