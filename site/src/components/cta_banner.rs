//! Call-to-action banner closing out most marketing pages.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn CtaBanner(
    #[prop(optional)] heading: &'static str,
    #[prop(optional)] text: &'static str,
) -> impl IntoView {
    let heading = if heading.is_empty() {
        "Ready to grow your business?"
    } else {
        heading
    };
    let text = if text.is_empty() {
        "Tell us about your market and goals. We respond to every inquiry within one business day."
    } else {
        text
    };

    view! {
        <section class="cta-banner">
            <h2 class="cta-banner__heading">{heading}</h2>
            <p class="cta-banner__text">{text}</p>
            <span class="cta-banner__button">
                <A href="/contact-us">"Get in Touch"</A>
            </span>
        </section>
    }
}
