//! Services listing page with the engagement process and onboarding CTA.

use content::editor::ListEditor;
use content::model::Service;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::cta_banner::CtaBanner;
use crate::components::reveal::Reveal;
use crate::components::service_card::ServiceCard;

const PROCESS_STEPS: [(&str, &str); 4] = [
    (
        "Discovery",
        "A strategy call to map your market, your goals, and where your next deals should come from.",
    ),
    (
        "Launch plan",
        "A 30-day rollout with owners, deadlines, and the accounts and access we need collected up front.",
    ),
    (
        "Execution",
        "Campaigns, content, and profile work ship on a weekly cadence with a named account manager.",
    ),
    (
        "Reporting",
        "Monthly numbers tied to calls, leads, and closings — not impressions.",
    ),
];

#[component]
pub fn ServicesPage() -> impl IntoView {
    let services = expect_context::<RwSignal<ListEditor<Service>>>();

    let active_services = move || {
        services
            .get()
            .items()
            .iter()
            .filter(|service| service.active)
            .cloned()
            .collect::<Vec<_>>()
    };

    view! {
        <Title text="Services — Hearthside Realty Group"/>

        <section class="page-hero">
            <h1>"Services"</h1>
            <p>
                "Everything an agent or team needs to be found, chosen, and closed — under one \
                 roof and one point of contact."
            </p>
        </section>

        <Reveal class="section">
            <div class="card-grid">
                {move || {
                    active_services()
                        .into_iter()
                        .map(|service| view! { <ServiceCard service=service/> })
                        .collect::<Vec<_>>()
                }}
            </div>
        </Reveal>

        <Reveal class="section section--process">
            <h2 class="section__heading">"How an engagement works"</h2>
            <ol class="process-steps">
                {PROCESS_STEPS
                    .iter()
                    .map(|&(step, detail)| {
                        view! {
                            <li class="process-steps__item">
                                <h3>{step}</h3>
                                <p>{detail}</p>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ol>
        </Reveal>

        <Reveal class="section">
            <CtaBanner
                heading="Not sure where to start?"
                text="Most clients begin with a Google Business Profile audit. It is the fastest way to see what you are missing."
            />
        </Reveal>
    }
}
