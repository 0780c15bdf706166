//! Contact inquiry form posting to the third-party forms endpoint.
//!
//! On success every field clears and the success modal opens; on failure the
//! form stays populated and nothing else changes (the error is logged by the
//! network layer).

use leptos::prelude::*;

use crate::components::success_modal::SuccessModal;
use crate::net::forms::ContactSubmission;

#[component]
pub fn ContactForm() -> impl IntoView {
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let subject = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let sending = RwSignal::new(false);
    let sent = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get() {
            return;
        }
        let submission = ContactSubmission {
            name: name.get(),
            email: email.get(),
            phone: phone.get(),
            subject: subject.get(),
            message: message.get(),
        };
        if !submission.is_complete() {
            return;
        }
        sending.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            if crate::net::forms::submit_contact(&submission).await.is_ok() {
                name.set(String::new());
                email.set(String::new());
                phone.set(String::new());
                subject.set(String::new());
                message.set(String::new());
                sent.set(true);
            }
            sending.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = &submission;
            sending.set(false);
        }
    };

    view! {
        <form class="inquiry-form" on:submit=on_submit>
            <label class="inquiry-form__field">
                "Name"
                <input
                    type="text"
                    required
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label class="inquiry-form__field">
                "Email"
                <input
                    type="email"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="inquiry-form__field">
                "Phone"
                <input
                    type="tel"
                    prop:value=move || phone.get()
                    on:input=move |ev| phone.set(event_target_value(&ev))
                />
            </label>
            <label class="inquiry-form__field">
                "Subject"
                <input
                    type="text"
                    prop:value=move || subject.get()
                    on:input=move |ev| subject.set(event_target_value(&ev))
                />
            </label>
            <label class="inquiry-form__field">
                "How can we help?"
                <textarea
                    rows="5"
                    required
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
            </label>
            <button class="btn btn--primary" type="submit" disabled=move || sending.get()>
                {move || if sending.get() { "Sending..." } else { "Send Message" }}
            </button>
        </form>
        <Show when=move || sent.get()>
            <SuccessModal
                title="Message Sent"
                message="Thanks for reaching out. We will get back to you within one business day."
                on_close=Callback::new(move |()| sent.set(false))
            />
        </Show>
    }
}
