//! Card for one case study, including its stat band and breakdown lists.

use content::model::CaseStudy;
use leptos::prelude::*;

#[component]
pub fn CaseStudyCard(study: CaseStudy) -> impl IntoView {
    let expanded = RwSignal::new(false);

    view! {
        <article class="case-card">
            <img class="case-card__image" src=study.image alt=study.title.clone()/>
            <div class="case-card__body">
                <p class="case-card__meta">
                    <span class="case-card__category">{study.category}</span>
                    " · "
                    {study.client}
                    " · "
                    {study.location}
                </p>
                <h3 class="case-card__title">{study.title}</h3>
                <p class="case-card__description">{study.description}</p>
                <dl class="case-card__stats">
                    {study
                        .stats
                        .into_iter()
                        .map(|stat| {
                            view! {
                                <div class="case-card__stat">
                                    <dt>{stat.value}</dt>
                                    <dd>{stat.label}</dd>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </dl>
                <button
                    class="case-card__expand"
                    on:click=move |_| expanded.update(|open| *open = !*open)
                >
                    {move || if expanded.get() { "Hide details" } else { "Read the full story" }}
                </button>
                <Show when=move || expanded.get()>
                    <div class="case-card__details">
                        <h4>"The Challenge"</h4>
                        <ul>
                            {study
                                .challenges
                                .iter()
                                .map(|item| view! { <li>{item.clone()}</li> })
                                .collect::<Vec<_>>()}
                        </ul>
                        <h4>"What We Did"</h4>
                        <ul>
                            {study
                                .solutions
                                .iter()
                                .map(|item| view! { <li>{item.clone()}</li> })
                                .collect::<Vec<_>>()}
                        </ul>
                        <h4>"The Results"</h4>
                        <ul>
                            {study
                                .results
                                .iter()
                                .map(|item| view! { <li>{item.clone()}</li> })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>
                </Show>
            </div>
        </article>
    }
}
