use leptos::prelude::*;

#[component]
pub fn PublicationsPage() -> impl IntoView {
    view! {
        <h2 class="page__title">"Selected Publications"</h2>
        <div class="publication-item">
            <p class="publication-item__title">
                "What Tokenizers Forget: Morphological Probes for Subword Models"
            </p>
            <p class="publication-item__venue">"Computational Linguistics, 2025"</p>
        </div>
        <div class="publication-item">
            <p class="publication-item__title">
                "Eliciting the Right Paradigm: Active Learning with Field Linguists in the Loop"
            </p>
            <p class="publication-item__venue">"Proceedings of ACL, 2024"</p>
        </div>
        <div class="publication-item">
            <p class="publication-item__title">
                "A Typologically Balanced Benchmark for Morphological Inflection"
            </p>
            <p class="publication-item__venue">"Transactions of the ACL, 2023"</p>
        </div>
        <div class="publication-item">
            <p class="publication-item__title">
                "Finite-State Morphology for Sixteen Bantu Languages, Revisited"
            </p>
            <p class="publication-item__venue">"Proceedings of LREC, 2022"</p>
        </div>
        <p>
            "A complete list is on "
            <a href="https://scholar.example.org/okafor" rel="external">"my scholar profile"</a>
            "."
        </p>
    }
}
