use leptos::prelude::*;

#[component]
pub fn BlogPage() -> impl IntoView {
    view! {
        <h2 class="page__title">"Blog"</h2>
        <article class="blog-post">
            <h3>"Why our benchmark has no leaderboard"</h3>
            <p class="blog-post__date">"June 2026"</p>
            <p>
                "We decided against a public leaderboard for the typology suite. "
                "Here is what happened the last time a field-data benchmark got one."
            </p>
        </article>
        <article class="blog-post">
            <h3>"Notes from the Makhuwa elicitation sessions"</h3>
            <p class="blog-post__date">"February 2026"</p>
            <p>
                "Three weeks, two hundred verb paradigms, and one tone pattern none "
                "of our models saw coming."
            </p>
        </article>
    }
}
