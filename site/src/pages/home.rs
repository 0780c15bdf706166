//! Home page — hero, trust stats, service grid, social proof, closing CTA.

use content::editor::ListEditor;
use content::model::{CaseStudy, Service, Testimonial};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::case_study_card::CaseStudyCard;
use crate::components::cta_banner::CtaBanner;
use crate::components::reveal::Reveal;
use crate::components::service_card::ServiceCard;
use crate::components::testimonial_card::TestimonialCard;

const TRUST_STATS: [(&str, &str); 4] = [
    ("140+", "agents and teams served"),
    ("38,000", "leads delivered"),
    ("4.9★", "average client rating"),
    ("9 yrs", "serving Central Texas"),
];

#[component]
pub fn HomePage() -> impl IntoView {
    let services = expect_context::<RwSignal<ListEditor<Service>>>();
    let testimonials = expect_context::<RwSignal<ListEditor<Testimonial>>>();
    let case_studies = expect_context::<RwSignal<ListEditor<CaseStudy>>>();

    let active_services = move || {
        services
            .get()
            .items()
            .iter()
            .filter(|service| service.active)
            .cloned()
            .collect::<Vec<_>>()
    };
    let featured_testimonials = move || {
        testimonials
            .get()
            .items()
            .iter()
            .filter(|testimonial| testimonial.featured)
            .cloned()
            .collect::<Vec<_>>()
    };
    let featured_case_study = move || {
        case_studies
            .get()
            .items()
            .iter()
            .find(|study| study.featured)
            .cloned()
    };

    view! {
        <Title text="Hearthside Realty Group — Real Estate Marketing That Closes"/>

        <section class="hero">
            <div class="hero__content">
                <h1 class="hero__title">
                    "Marketing that turns local searches into closed transactions"
                </h1>
                <p class="hero__subtitle">
                    "Google Business Profile management, lead generation, and listing marketing \
                     for real-estate agents and teams who want a pipeline they can count on."
                </p>
                <div class="hero__cta-group">
                    <span class="hero__cta"><A href="/contact-us">"Book a Strategy Call"</A></span>
                    <span class="hero__cta hero__cta--ghost"><A href="/case-studies">"See the Results"</A></span>
                </div>
            </div>
        </section>

        <Reveal class="section section--stats">
            <dl class="stat-band">
                {TRUST_STATS
                    .iter()
                    .map(|&(value, label)| {
                        view! {
                            <div class="stat-band__item">
                                <dt>{value}</dt>
                                <dd>{label}</dd>
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()}
            </dl>
        </Reveal>

        <Reveal class="section">
            <h2 class="section__heading">"What we do"</h2>
            <p class="section__lede">
                "Six service lines, one goal: more closings with less guesswork."
            </p>
            <div class="card-grid">
                {move || {
                    active_services()
                        .into_iter()
                        .map(|service| view! { <ServiceCard service=service/> })
                        .collect::<Vec<_>>()
                }}
            </div>
        </Reveal>

        <Reveal class="section section--testimonials">
            <h2 class="section__heading">"What clients say"</h2>
            <div class="card-grid card-grid--testimonials">
                {move || {
                    featured_testimonials()
                        .into_iter()
                        .map(|testimonial| view! { <TestimonialCard testimonial=testimonial/> })
                        .collect::<Vec<_>>()
                }}
            </div>
        </Reveal>

        <Reveal class="section">
            <h2 class="section__heading">"Featured success story"</h2>
            {move || {
                featured_case_study()
                    .map(|study| view! { <CaseStudyCard study=study/> })
            }}
            <p class="section__more">
                <A href="/case-studies">"Browse all case studies"</A>
            </p>
        </Reveal>

        <Reveal class="section">
            <CtaBanner/>
        </Reveal>
    }
}
