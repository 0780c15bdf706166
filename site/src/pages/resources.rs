//! Resource guides — a fixed set of long-form pages for buyers and sellers.

#[cfg(test)]
#[path = "resources_test.rs"]
mod resources_test;

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use crate::components::cta_banner::CtaBanner;
use crate::components::reveal::Reveal;
use crate::pages::not_found::NotFoundPage;

/// One static guide page under `/resources/`.
pub struct Guide {
    pub slug: &'static str,
    pub title: &'static str,
    pub audience: &'static str,
    pub summary: &'static str,
    pub sections: &'static [(&'static str, &'static str)],
}

pub const GUIDES: [Guide; 4] = [
    Guide {
        slug: "first-time-buyer-roadmap",
        title: "The First-Time Buyer Roadmap",
        audience: "Buyers",
        summary: "Every milestone from pre-approval to keys, in the order it actually happens.",
        sections: &[
            (
                "Get pre-approved before you browse",
                "A pre-approval letter tells you your real budget and makes your eventual offer \
                 credible. Gather two years of tax returns, recent pay stubs, and bank \
                 statements; a lender can usually turn these around in two to three days.",
            ),
            (
                "Shop neighborhoods, then houses",
                "Commute times, school zones, and resale trends outlast paint colors. Spend a \
                 weekend driving your shortlist at different times of day before touring homes.",
            ),
            (
                "Make an offer built on comparables",
                "Your agent should price the offer from what has closed within a half mile in \
                 the last ninety days, not from the listing price.",
            ),
            (
                "From contract to keys",
                "Option period, inspection, appraisal, clear-to-close. A transaction \
                 coordinator tracks each deadline so nothing slips.",
            ),
        ],
    },
    Guide {
        slug: "listing-prep-checklist",
        title: "The Listing Prep Checklist",
        audience: "Sellers",
        summary: "Thirty days of preparation that routinely add five figures to a sale price.",
        sections: &[
            (
                "Declutter and depersonalize",
                "Buyers need to picture their own life in the rooms. Pack a third of your \
                 belongings before photos; it reads as space, not emptiness.",
            ),
            (
                "Fix the small things",
                "Dripping faucets, scuffed trim, and burned-out bulbs all whisper deferred \
                 maintenance. A weekend of fixes changes how every showing feels.",
            ),
            (
                "Price from the market, not the mortgage",
                "What you owe has no bearing on what buyers will pay. Trust the comparable \
                 analysis and let launch-week demand confirm it.",
            ),
            (
                "Launch once, launch right",
                "Professional photos, a single-property site, and a coming-soon campaign \
                 concentrate attention into the first weekend, when offers peak.",
            ),
        ],
    },
    Guide {
        slug: "gbp-self-audit",
        title: "The 15-Minute Google Business Profile Self-Audit",
        audience: "Agents",
        summary: "Seven checks that explain most map-pack ranking problems.",
        sections: &[
            (
                "Verify your primary category",
                "\"Real estate agent\" and \"Real estate agency\" rank differently. Pick the one \
                 that matches how clients search for you, not how you describe yourself.",
            ),
            (
                "Audit your review velocity",
                "Google weighs recency as well as volume. Five reviews this quarter beat fifty \
                 from three years ago.",
            ),
            (
                "Post like the profile is a channel",
                "Profiles with weekly posts and fresh photos consistently outrank dormant ones \
                 with more reviews.",
            ),
        ],
    },
    Guide {
        slug: "lead-follow-up-playbook",
        title: "The Lead Follow-Up Playbook",
        audience: "Agents",
        summary: "Why speed-to-lead decides close rates, and the cadence that wins.",
        sections: &[
            (
                "The five-minute window",
                "Contact rates fall off a cliff after five minutes. Route every new lead to a \
                 phone, not an inbox.",
            ),
            (
                "The 10-touch cadence",
                "Two calls and a text on day one, then a mix of calls, texts, and emails over \
                 fourteen days. Most conversions happen after the fifth touch most agents \
                 never make.",
            ),
            (
                "Long-term nurture",
                "Leads who are six months out still close. A monthly market-update email keeps \
                 you the obvious choice when they are ready.",
            ),
        ],
    },
];

/// Look up a guide by its route slug.
#[must_use]
pub fn find_guide(slug: &str) -> Option<&'static Guide> {
    GUIDES.iter().find(|guide| guide.slug == slug)
}

#[component]
pub fn ResourcesPage() -> impl IntoView {
    view! {
        <Title text="Resources — Hearthside Realty Group"/>

        <section class="page-hero">
            <h1>"Resources"</h1>
            <p>"Free guides we hand to clients. No email gate, no watermark."</p>
        </section>

        <Reveal class="section">
            <div class="card-grid card-grid--guides">
                {GUIDES
                    .iter()
                    .map(|guide| {
                        view! {
                            <article class="guide-card">
                                <span class="guide-card__audience">{guide.audience}</span>
                                <h3 class="guide-card__title">{guide.title}</h3>
                                <p class="guide-card__summary">{guide.summary}</p>
                                <span class="guide-card__link">
                                    <A href=format!("/resources/{}", guide.slug)>"Read the guide"</A>
                                </span>
                            </article>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </Reveal>

        <Reveal class="section">
            <CtaBanner
                heading="Prefer it done for you?"
                text="Everything in these guides is something we handle for clients every week."
            />
        </Reveal>
    }
}

#[component]
pub fn ResourceDetailPage() -> impl IntoView {
    let params = use_params_map();

    view! {
        {move || {
            let slug = params.read().get("slug").unwrap_or_default();
            match find_guide(&slug) {
                Some(guide) => {
                    view! {
                        <Title text=format!("{} — Hearthside Realty Group", guide.title)/>

                        <section class="page-hero">
                            <span class="page-hero__kicker">{guide.audience}</span>
                            <h1>{guide.title}</h1>
                            <p>{guide.summary}</p>
                        </section>

                        <Reveal class="section section--guide">
                            {guide
                                .sections
                                .iter()
                                .map(|&(heading, body)| {
                                    view! {
                                        <section class="guide-section">
                                            <h2>{heading}</h2>
                                            <p>{body}</p>
                                        </section>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </Reveal>

                        <Reveal class="section">
                            <CtaBanner/>
                        </Reveal>
                    }
                    .into_any()
                }
                None => view! { <NotFoundPage/> }.into_any(),
            }
        }}
    }
}
