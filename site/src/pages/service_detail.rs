//! Detail page for one service, selected by its slug route param.

use content::editor::ListEditor;
use content::model::{Service, ServicePricing};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::hooks::use_params_map;

use crate::components::cta_banner::CtaBanner;
use crate::components::pricing_table::PricingTable;
use crate::components::reveal::Reveal;
use crate::pages::not_found::NotFoundPage;

#[component]
pub fn ServiceDetailPage() -> impl IntoView {
    let params = use_params_map();
    let services = expect_context::<RwSignal<ListEditor<Service>>>();
    let pricing = expect_context::<RwSignal<ListEditor<ServicePricing>>>();

    let service = move || {
        let slug = params.read().get("slug").unwrap_or_default();
        services
            .get()
            .items()
            .iter()
            .find(|service| service.active && service.link == slug)
            .cloned()
    };

    view! {
        {move || match service() {
            Some(service) => {
                let pricing_group = pricing
                    .get()
                    .items()
                    .iter()
                    .find(|group| group.service == service.title)
                    .cloned();
                view! {
                    <Title text=format!("{} — Hearthside Realty Group", service.title)/>

                    <section class="page-hero page-hero--service">
                        <h1>{service.title.clone()}</h1>
                        <p class="page-hero__subtitle">{service.subtitle.clone()}</p>
                    </section>

                    <Reveal class="section section--service-detail">
                        <img class="service-detail__image" src=service.image.clone() alt=service.title.clone()/>
                        <div class="service-detail__copy">
                            <p>{service.description.clone()}</p>
                            <h2>"What's included"</h2>
                            <ul class="service-detail__features">
                                {service
                                    .features
                                    .iter()
                                    .map(|feature| view! { <li>{feature.clone()}</li> })
                                    .collect::<Vec<_>>()}
                            </ul>
                        </div>
                    </Reveal>

                    {pricing_group.map(|group| {
                        view! {
                            <Reveal class="section section--pricing">
                                <h2 class="section__heading">"Plans"</h2>
                                <PricingTable group=group/>
                            </Reveal>
                        }
                    })}

                    <Reveal class="section">
                        <CtaBanner
                            heading="Want this handled for you?"
                            text="Tell us about your market and we will scope the right plan on a 20-minute call."
                        />
                    </Reveal>
                }
                .into_any()
            }
            None => view! { <NotFoundPage/> }.into_any(),
        }}
    }
}
