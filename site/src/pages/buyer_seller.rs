//! Buyers & sellers page — who we help on each side of a transaction.

use content::editor::ListEditor;
use content::model::{Faq, FaqCategory};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::cta_banner::CtaBanner;
use crate::components::faq_list::FaqList;
use crate::components::reveal::Reveal;

const BUYER_POINTS: [&str; 4] = [
    "Neighborhood-level search guidance before you tour a single home",
    "Pre-approval and budget walkthroughs with zero sales pressure",
    "Offer strategy built from live comparable data",
    "A coordinator tracking every deadline from contract to keys",
];

const SELLER_POINTS: [&str; 4] = [
    "Pricing analysis grounded in what is actually closing nearby",
    "Professional photography, staging advice, and a launch plan",
    "A single-property website and targeted buyer campaigns",
    "Weekly showing and feedback reports until the sale closes",
];

#[component]
pub fn BuyerSellerPage() -> impl IntoView {
    let faqs = expect_context::<RwSignal<ListEditor<Faq>>>();
    let process_faqs = Signal::derive(move || {
        faqs.get()
            .items()
            .iter()
            .filter(|faq| faq.category == FaqCategory::Process)
            .cloned()
            .collect::<Vec<_>>()
    });

    view! {
        <Title text="Buyers & Sellers — Hearthside Realty Group"/>

        <section class="page-hero">
            <h1>"Buyers & Sellers"</h1>
            <p>
                "We work with the agents who work for you — and with buyers and sellers directly \
                 through our partner network."
            </p>
        </section>

        <Reveal class="section section--split">
            <div class="split-panel">
                <h2>"Buying a home"</h2>
                <ul class="split-panel__points">
                    {BUYER_POINTS
                        .iter()
                        .map(|&point| view! { <li>{point}</li> })
                        .collect::<Vec<_>>()}
                </ul>
                <p class="split-panel__link">
                    <A href="/resources/first-time-buyer-roadmap">"Read the buyer roadmap"</A>
                </p>
            </div>
            <div class="split-panel">
                <h2>"Selling a home"</h2>
                <ul class="split-panel__points">
                    {SELLER_POINTS
                        .iter()
                        .map(|&point| view! { <li>{point}</li> })
                        .collect::<Vec<_>>()}
                </ul>
                <p class="split-panel__link">
                    <A href="/resources/listing-prep-checklist">"Read the listing prep checklist"</A>
                </p>
            </div>
        </Reveal>

        <Reveal class="section">
            <h2 class="section__heading">"Common questions about the process"</h2>
            <FaqList faqs=process_faqs/>
        </Reveal>

        <Reveal class="section">
            <CtaBanner
                heading="Have a move on the horizon?"
                text="Reach out and we will connect you with the right people for your side of the table."
            />
        </Reveal>
    }
}
