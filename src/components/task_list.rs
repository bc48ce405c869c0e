//! Task checklist card: user-driven progress with a tweened progress bar
//! and client-side text filtering.

use leptos::prelude::*;

use crate::runtime::Runtime;
use crate::state::tasks;
use crate::util::animate::DEFAULT_DURATION_MS;

#[component]
pub fn TaskList(
    /// Mounted on the filter input so the `/` shortcut can focus it.
    filter_ref: NodeRef<leptos::html::Input>,
) -> impl IntoView {
    let rt = expect_context::<Runtime>();
    let tasks = rt.tasks;
    let progress = rt.tasks_progress;

    let on_toggle = move |id: usize| {
        let mut percent = 0.0;
        tasks.update(|t| {
            t.toggle(id);
            percent = t.progress_percent();
        });
        progress.animate_to(percent, DEFAULT_DURATION_MS);
    };

    view! {
        <section class="card card--tasks">
            <h2 class="card__title">"Tasks"</h2>

            <input
                class="task-filter"
                type="text"
                placeholder="Filter tasks..."
                node_ref=filter_ref
                prop:value=move || tasks.with(|t| t.filter.clone())
                on:input=move |ev| tasks.update(|t| t.set_filter(event_target_value(&ev)))
            />

            <ul class="task-list">
                <For
                    each=move || tasks.with(|t| t.tasks.clone())
                    key=|task| task.id
                    children=move |task: tasks::Task| {
                        let id = task.id;
                        view! {
                            <li
                                class="task"
                                class=("task--hidden", move || !tasks.with(|t| t.is_visible(id)))
                            >
                                <label class="task__row">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || tasks.with(|t| t.is_done(id))
                                        on:change=move |_| on_toggle(id)
                                    />
                                    <span class="task__label">{task.label.clone()}</span>
                                </label>
                            </li>
                        }
                    }
                />
            </ul>

            <div class="progress">
                <div
                    class="progress__bar"
                    style=move || format!("width: {:.1}%", progress.get().clamp(0.0, 100.0))
                ></div>
            </div>
            <p class="progress__label">
                {move || {
                    tasks.with(|t| format!("{} of {} done", t.done_count(), t.tasks.len()))
                }}
            </p>
        </section>
    }
}
