//! Admin overview — content counts and jump links per family.

use content::editor::ListEditor;
use content::model::{CaseStudy, Faq, Service, ServicePricing, TeamMember, Testimonial};
use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

use crate::components::admin::shell::AdminShell;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let testimonials = expect_context::<RwSignal<ListEditor<Testimonial>>>();
    let services = expect_context::<RwSignal<ListEditor<Service>>>();
    let pricing = expect_context::<RwSignal<ListEditor<ServicePricing>>>();
    let faqs = expect_context::<RwSignal<ListEditor<Faq>>>();
    let team = expect_context::<RwSignal<ListEditor<TeamMember>>>();
    let case_studies = expect_context::<RwSignal<ListEditor<CaseStudy>>>();

    view! {
        <Title text="Admin — Hearthside Realty Group"/>
        <AdminShell title="Overview">
            <div class="admin-overview">
                <OverviewCard
                    label="Testimonials"
                    href="/admin/testimonials"
                    count=Signal::derive(move || testimonials.get().len())
                />
                <OverviewCard
                    label="Services"
                    href="/admin/services"
                    count=Signal::derive(move || services.get().len())
                />
                <OverviewCard
                    label="Pricing Groups"
                    href="/admin/pricing"
                    count=Signal::derive(move || pricing.get().len())
                />
                <OverviewCard
                    label="FAQs"
                    href="/admin/faq"
                    count=Signal::derive(move || faqs.get().len())
                />
                <OverviewCard
                    label="Team Members"
                    href="/admin/team"
                    count=Signal::derive(move || team.get().len())
                />
                <OverviewCard
                    label="Case Studies"
                    href="/admin/case-studies"
                    count=Signal::derive(move || case_studies.get().len())
                />
            </div>
            <p class="admin-overview__note">
                "Content edits apply immediately to the public pages in this tab. They are not \
                 written anywhere; reloading restores the shipped content."
            </p>
        </AdminShell>
    }
}

#[component]
fn OverviewCard(
    label: &'static str,
    href: &'static str,
    count: Signal<usize>,
) -> impl IntoView {
    view! {
        <article class="admin-overview__card">
            <span class="admin-overview__count">{move || count.get()}</span>
            <h2 class="admin-overview__label">{label}</h2>
            <span class="admin-overview__link">
                <A href=href>"Manage"</A>
            </span>
        </article>
    }
}
