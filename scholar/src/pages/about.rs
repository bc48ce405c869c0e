use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <h2 class="page__title">"About"</h2>
        <p>
            "I joined the University of Westbrook in 2016 after a postdoc at the "
            "Institute for Language Technology in Copenhagen. My doctoral work at "
            "Edinburgh examined finite-state models of Bantu verbal morphology."
        </p>
        <p>
            "My group builds tools that make field data usable for modern NLP "
            "without flattening the structure documentary linguists worked to "
            "capture. We collaborate closely with speaker communities and keep "
            "every dataset we release under community-approved licenses."
        </p>
        <h3>"Education"</h3>
        <ul>
            <li>"PhD, Linguistics — University of Edinburgh, 2012"</li>
            <li>"MSc, Speech and Language Processing — University of Edinburgh, 2008"</li>
            <li>"BA, Linguistics and Computer Science — University of Lagos, 2006"</li>
        </ul>
    }
}
