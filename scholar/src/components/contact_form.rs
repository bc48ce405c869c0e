//! Contact form: four required fields, client-side validation, and a
//! simulated submission round-trip.

use leptos::prelude::*;
use toast::{ToastKind, use_toaster};

use crate::form::{ContactMessage, validate};
use crate::net::api;

/// The contact form.
///
/// The submit control is disabled and relabeled while the (simulated)
/// backend call is in flight, and restored on both result arms. A failed
/// validation aborts before any of that and leaves every field untouched.
#[component]
pub fn ContactForm() -> impl IntoView {
    let toaster = use_toaster();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let sending = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get() {
            return;
        }

        let msg = ContactMessage {
            name: name.get(),
            email: email.get(),
            subject: subject.get(),
            message: message.get(),
        };
        if let Err(err) = validate(&msg) {
            toaster.notify(err.to_string(), ToastKind::Error);
            return;
        }

        sending.set(true);
        leptos::task::spawn_local(async move {
            let result = api::send_message(&msg).await;
            sending.set(false);
            match result {
                Ok(()) => {
                    toaster.notify(
                        "Thank you for your message! I will get back to you soon.",
                        ToastKind::Success,
                    );
                    name.set(String::new());
                    email.set(String::new());
                    subject.set(String::new());
                    message.set(String::new());
                }
                Err(err) => toaster.notify(err.to_string(), ToastKind::Error),
            }
        });
    };

    view! {
        <form class="contact-form" on:submit=on_submit>
            <label class="contact-form__label">
                "Name"
                <input
                    class="contact-form__input"
                    type="text"
                    name="name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label class="contact-form__label">
                "Email"
                <input
                    class="contact-form__input"
                    type="email"
                    name="email"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="contact-form__label">
                "Subject"
                <input
                    class="contact-form__input"
                    type="text"
                    name="subject"
                    prop:value=move || subject.get()
                    on:input=move |ev| subject.set(event_target_value(&ev))
                />
            </label>
            <label class="contact-form__label">
                "Message"
                <textarea
                    class="contact-form__input contact-form__input--area"
                    name="message"
                    rows="6"
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
            </label>
            <button class="btn btn--primary" type="submit" prop:disabled=move || sending.get()>
                {move || if sending.get() { "Sending..." } else { "Send Message" }}
            </button>
        </form>
    }
}
