//! Card for one service line, linking to its detail page.

use content::model::Service;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn ServiceCard(service: Service) -> impl IntoView {
    let detail_href = format!("/services/{}", service.link);

    view! {
        <article class="service-card">
            <span class=format!("service-card__icon icon icon--{}", service.icon)></span>
            <h3 class="service-card__title">{service.title}</h3>
            <p class="service-card__subtitle">{service.subtitle}</p>
            <p class="service-card__description">{service.description}</p>
            <ul class="service-card__features">
                {service
                    .features
                    .into_iter()
                    .map(|feature| view! { <li>{feature}</li> })
                    .collect::<Vec<_>>()}
            </ul>
            <span class="service-card__link">
                <A href=detail_href>"Learn more"</A>
            </span>
        </article>
    }
}
