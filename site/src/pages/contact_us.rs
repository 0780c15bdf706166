//! Contact page — inquiry form, onboarding application, and office details.

use content::editor::ListEditor;
use content::model::{ContactSettings, Faq, FaqCategory};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::contact_form::ContactForm;
use crate::components::faq_list::FaqList;
use crate::components::onboarding_form::OnboardingForm;
use crate::components::reveal::Reveal;

/// Which of the two forms is active.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
enum FormTab {
    #[default]
    Inquiry,
    Onboarding,
}

#[component]
pub fn ContactUsPage() -> impl IntoView {
    let settings = expect_context::<RwSignal<ContactSettings>>();
    let faqs = expect_context::<RwSignal<ListEditor<Faq>>>();
    let tab = RwSignal::new(FormTab::default());

    let general_faqs = Signal::derive(move || {
        faqs.get()
            .items()
            .iter()
            .filter(|faq| faq.category == FaqCategory::General)
            .cloned()
            .collect::<Vec<_>>()
    });

    let tab_class = move |this: FormTab| {
        if tab.get() == this { "tab tab--active" } else { "tab" }
    };

    view! {
        <Title text="Contact Us — Hearthside Realty Group"/>

        <section class="page-hero">
            <h1>"Contact Us"</h1>
            <p>"Questions, audits, or ready to start — we answer within one business day."</p>
        </section>

        <Reveal class="section section--contact">
            <div class="contact-grid">
                <aside class="contact-info">
                    <h2>"The office"</h2>
                    {move || {
                        let s = settings.get();
                        view! {
                            <p class="contact-info__address">
                                {s.address.street.clone()}
                                ", "
                                {s.address.suite.clone()}
                                <br/>
                                {format!("{}, {} {}", s.address.city, s.address.state, s.address.zip)}
                            </p>
                            <p class="contact-info__reach">
                                <a href=format!("tel:{}", s.phone)>{s.phone.clone()}</a>
                                <br/>
                                <a href=format!("mailto:{}", s.email)>{s.email.clone()}</a>
                            </p>
                            <h3>"Hours"</h3>
                            <ul class="contact-info__hours">
                                {s.hours
                                    .into_iter()
                                    .map(|row| {
                                        view! {
                                            <li>
                                                <span>{row.days}</span>
                                                <span>{row.hours}</span>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                    }}
                </aside>
                <div class="contact-forms">
                    <div class="contact-forms__tabs">
                        <button
                            class=move || tab_class(FormTab::Inquiry)
                            on:click=move |_| tab.set(FormTab::Inquiry)
                        >
                            "General Inquiry"
                        </button>
                        <button
                            class=move || tab_class(FormTab::Onboarding)
                            on:click=move |_| tab.set(FormTab::Onboarding)
                        >
                            "New Client Application"
                        </button>
                    </div>
                    <Show
                        when=move || tab.get() == FormTab::Inquiry
                        fallback=|| view! { <OnboardingForm/> }
                    >
                        <ContactForm/>
                    </Show>
                </div>
            </div>
        </Reveal>

        <Reveal class="section">
            <h2 class="section__heading">"Before you write in"</h2>
            <FaqList faqs=general_faqs/>
        </Reveal>
    }
}
