//! Case studies page — client results, featured stories first.

#[cfg(test)]
#[path = "case_studies_test.rs"]
mod case_studies_test;

use content::editor::ListEditor;
use content::model::CaseStudy;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::case_study_card::CaseStudyCard;
use crate::components::cta_banner::CtaBanner;
use crate::components::reveal::Reveal;

/// Featured studies first, otherwise keeping list order.
#[must_use]
pub fn featured_first(studies: &[CaseStudy]) -> Vec<CaseStudy> {
    let mut ordered: Vec<CaseStudy> = studies.to_vec();
    ordered.sort_by_key(|study| !study.featured);
    ordered
}

#[component]
pub fn CaseStudiesPage() -> impl IntoView {
    let case_studies = expect_context::<RwSignal<ListEditor<CaseStudy>>>();

    let ordered = move || featured_first(case_studies.get().items());

    view! {
        <Title text="Case Studies — Hearthside Realty Group"/>

        <section class="page-hero">
            <h1>"Case Studies"</h1>
            <p>"Real clients, real markets, and the numbers behind each engagement."</p>
        </section>

        <Reveal class="section">
            <div class="case-grid">
                {move || {
                    ordered()
                        .into_iter()
                        .map(|study| view! { <CaseStudyCard study=study/> })
                        .collect::<Vec<_>>()
                }}
            </div>
        </Reveal>

        <Reveal class="section">
            <CtaBanner
                heading="Want results like these?"
                text="Every engagement starts with a conversation about your market and your numbers."
            />
        </Reveal>
    }
}
