//! About page — company story, values, and the team grid.

use content::editor::ListEditor;
use content::model::TeamMember;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::cta_banner::CtaBanner;
use crate::components::reveal::Reveal;
use crate::components::team_card::TeamCard;

const VALUES: [(&str, &str); 3] = [
    (
        "Numbers over noise",
        "Every report ties back to calls, leads, and closings. If a channel stops earning its keep, we say so.",
    ),
    (
        "You own everything",
        "Your profiles, your ad accounts, your creative. Leaving us should never cost you your pipeline.",
    ),
    (
        "One named human",
        "No ticket queues. Every client has an account manager who knows their market by name.",
    ),
];

#[component]
pub fn AboutUsPage() -> impl IntoView {
    let team = expect_context::<RwSignal<ListEditor<TeamMember>>>();

    let active_members = move || {
        team.get()
            .items()
            .iter()
            .filter(|member| member.active)
            .cloned()
            .collect::<Vec<_>>()
    };

    view! {
        <Title text="About Us — Hearthside Realty Group"/>

        <section class="page-hero">
            <h1>"About Hearthside"</h1>
            <p>"A marketing team built by people who have carried a buyer's box of keys."</p>
        </section>

        <Reveal class="section section--story">
            <h2 class="section__heading">"Our story"</h2>
            <p>
                "Hearthside started in 2017 when our founder, then a top-producing agent, \
                 couldn't find a marketing partner who understood that a real-estate lead is \
                 not a click — it is a phone call from someone three blocks away. We built the \
                 agency we wished existed: local-first, accountable to closings, and staffed by \
                 people who have worked transactions themselves."
            </p>
            <p>
                "Today we serve agents, teams, and boutique brokerages across Central Texas, \
                 from first-year solo agents to groups closing three hundred sides a year."
            </p>
        </Reveal>

        <Reveal class="section">
            <h2 class="section__heading">"What we believe"</h2>
            <div class="card-grid card-grid--values">
                {VALUES
                    .iter()
                    .map(|&(title, detail)| {
                        view! {
                            <article class="value-card">
                                <h3>{title}</h3>
                                <p>{detail}</p>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </Reveal>

        <Reveal class="section">
            <h2 class="section__heading">"The team"</h2>
            <div class="card-grid card-grid--team">
                {move || {
                    active_members()
                        .into_iter()
                        .map(|member| view! { <TeamCard member=member/> })
                        .collect::<Vec<_>>()
                }}
            </div>
        </Reveal>

        <Reveal class="section">
            <CtaBanner/>
        </Reveal>
    }
}
