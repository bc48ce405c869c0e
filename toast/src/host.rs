//! Leptos host for the toast queue: the overlay component, auto-dismiss
//! timing, and one-time stylesheet injection.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use uuid::Uuid;

use crate::queue::{Stacking, Toast, ToastKind, ToastQueue};

/// Element id guarding the injected stylesheet fragment.
const STYLE_ID: &str = "toast-styles";

/// Handle for posting notifications. `Copy`, so it moves freely into event
/// closures.
#[derive(Clone, Copy)]
pub struct Toaster {
    queue: RwSignal<ToastQueue>,
    timeout_ms: u32,
}

impl Toaster {
    /// Show a toast. It auto-dismisses after the host timeout or when the
    /// user closes it, whichever comes first.
    pub fn notify(&self, message: impl Into<String>, kind: ToastKind) {
        let mut id = Uuid::nil();
        self.queue.update(|q| id = q.push(message, kind));

        let queue = self.queue;
        let timeout_ms = self.timeout_ms;
        leptos::task::spawn_local(async move {
            TimeoutFuture::new(timeout_ms).await;
            // Id-based: a no-op if the toast was closed or replaced already.
            queue.update(|q| q.dismiss(id));
        });
    }

    /// Remove a toast immediately.
    pub fn dismiss(&self, id: Uuid) {
        self.queue.update(|q| q.dismiss(id));
    }

    fn visible(&self) -> Vec<Toast> {
        self.queue.with(|q| q.toasts().to_vec())
    }
}

/// Create a [`Toaster`] with the given policy and provide it as context.
pub fn provide_toaster(stacking: Stacking, timeout_ms: u32) -> Toaster {
    let toaster = Toaster { queue: RwSignal::new(ToastQueue::new(stacking)), timeout_ms };
    provide_context(toaster);
    toaster
}

/// The ambient [`Toaster`] provided by the app root.
#[must_use]
pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

/// Fixed overlay rendering the visible toasts.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toaster = use_toaster();

    view! {
        <div class="toast-host">
            <For
                each=move || toaster.visible()
                key=|toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    view! {
                        <div class=format!("toast toast--{}", toast.kind.as_str())>
                            <p class="toast__message">{toast.message}</p>
                            <button
                                class="toast__close"
                                aria-label="Close notification"
                                on:click=move |_| toaster.dismiss(id)
                            >
                                "\u{d7}"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}

/// Lazily append the shared toast stylesheet, once per page load.
///
/// Silent no-op outside a browser or when the fragment is already present.
pub fn inject_styles() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    if document.get_element_by_id(STYLE_ID).is_some() {
        return;
    }
    let Some(head) = document.head() else {
        return;
    };
    let Ok(style) = document.create_element("style") else {
        return;
    };
    style.set_id(STYLE_ID);
    style.set_text_content(Some(TOAST_CSS));
    let _ = head.append_child(&style);
}

const TOAST_CSS: &str = "
.toast-host {
    position: fixed;
    top: 100px;
    right: 20px;
    z-index: 1001;
    display: flex;
    flex-direction: column;
    gap: 8px;
}
.toast {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 12px;
    max-width: 300px;
    padding: 12px 16px;
    border-radius: 6px;
    color: #fff;
    animation: toast-slide-in 0.3s ease-out;
}
.toast--info { background: #4f7cac; }
.toast--success { background: #2e7d32; }
.toast--error { background: #c62828; }
.toast__message { margin: 0; }
.toast__close {
    background: none;
    border: none;
    color: inherit;
    font-size: 1.2em;
    line-height: 1;
    padding: 0;
    cursor: pointer;
}
@keyframes toast-slide-in {
    from { opacity: 0; transform: translateX(100%); }
    to { opacity: 1; transform: translateX(0); }
}
";
