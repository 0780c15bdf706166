//! Pricing cards for one service's plan group.

use content::model::ServicePricing;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn PricingTable(group: ServicePricing) -> impl IntoView {
    view! {
        <div class="pricing-group">
            <h3 class="pricing-group__service">
                <span class=format!("icon icon--{}", group.icon)></span>
                {group.service}
            </h3>
            <div class="pricing-group__plans">
                {group
                    .plans
                    .into_iter()
                    .map(|plan| {
                        let popular = plan.popular;
                        let card_class = if popular {
                            "pricing-card pricing-card--popular"
                        } else {
                            "pricing-card"
                        };
                        view! {
                            <article class=card_class>
                                <Show when=move || popular>
                                    <span class="pricing-card__badge">"Most Popular"</span>
                                </Show>
                                <span class=format!("pricing-card__icon icon icon--{}", plan.icon)></span>
                                <h4 class="pricing-card__name">{plan.name.clone()}</h4>
                                <p class="pricing-card__price">
                                    <strong>{plan.price.clone()}</strong>
                                    <span>{plan.period.clone()}</span>
                                </p>
                                <ul class="pricing-card__features">
                                    {plan
                                        .features
                                        .iter()
                                        .map(|feature| view! { <li>{feature.clone()}</li> })
                                        .collect::<Vec<_>>()}
                                </ul>
                                <span class="pricing-card__cta">
                                    <A href="/contact-us">"Get Started"</A>
                                </span>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </div>
    }
}
