use leptos::prelude::*;

#[component]
pub fn ResearchPage() -> impl IntoView {
    view! {
        <h2 class="page__title">"Research"</h2>
        <div class="research-card">
            <h3>"Morphology-aware language models"</h3>
            <p>
                "Subword tokenizers discard analyses that documentary grammars "
                "already provide. We inject morphological segmentations into "
                "pretraining and measure what sticks."
            </p>
        </div>
        <div class="research-card">
            <h3>"Active learning for field annotation"</h3>
            <p>
                "Annotation time with native speakers is the scarcest resource in "
                "low-resource NLP. We rank what to elicit next so an afternoon of "
                "fieldwork moves the model as far as possible."
            </p>
        </div>
        <div class="research-card">
            <h3>"Evaluation beyond benchmark languages"</h3>
            <p>
                "Scores on high-resource benchmarks say little about typologically "
                "distant languages. We maintain a living evaluation suite covering "
                "23 languages across 9 families."
            </p>
        </div>
    }
}
