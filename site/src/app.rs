//! Root application component with routing and context providers.
//!
//! ARCHITECTURE
//! ============
//! All admin-editable content lives in `RwSignal<ListEditor<_>>` contexts
//! seeded from fixtures here, so the public pages and the admin screens are
//! views over the same in-memory lists. None of it is persisted; a reload
//! rebuilds everything from the fixtures.

use content::editor::ListEditor;
use content::fixtures;
use leptos::prelude::*;
use leptos_meta::{Script, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::{ParamSegment, StaticSegment};

use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;
use crate::pages::about_us::AboutUsPage;
use crate::pages::admin::case_studies::AdminCaseStudiesPage;
use crate::pages::admin::contact_settings::AdminContactSettingsPage;
use crate::pages::admin::dashboard::AdminDashboardPage;
use crate::pages::admin::faq::AdminFaqPage;
use crate::pages::admin::pricing::AdminPricingPage;
use crate::pages::admin::services::AdminServicesPage;
use crate::pages::admin::team::AdminTeamPage;
use crate::pages::admin::testimonials::AdminTestimonialsPage;
use crate::pages::buyer_seller::BuyerSellerPage;
use crate::pages::case_studies::CaseStudiesPage;
use crate::pages::contact_us::ContactUsPage;
use crate::pages::home::HomePage;
use crate::pages::not_found::NotFoundPage;
use crate::pages::resources::{ResourceDetailPage, ResourcesPage};
use crate::pages::service_detail::ServiceDetailPage;
use crate::pages::services::ServicesPage;
use crate::state::auth::AuthState;
use crate::util::config;

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(AuthState::restore()));
    provide_context(RwSignal::new(ListEditor::seeded(fixtures::testimonials())));
    provide_context(RwSignal::new(ListEditor::seeded(fixtures::services())));
    provide_context(RwSignal::new(ListEditor::seeded(fixtures::service_pricing())));
    provide_context(RwSignal::new(ListEditor::seeded(fixtures::faqs())));
    provide_context(RwSignal::new(ListEditor::seeded(fixtures::team_members())));
    provide_context(RwSignal::new(ListEditor::seeded(fixtures::case_studies())));
    provide_context(RwSignal::new(fixtures::contact_settings()));

    let gtag_src = format!(
        "https://www.googletagmanager.com/gtag/js?id={}",
        config::ANALYTICS_MEASUREMENT_ID
    );
    let gtag_init = format!(
        "window.dataLayer = window.dataLayer || [];\n\
         function gtag(){{dataLayer.push(arguments);}}\n\
         gtag('js', new Date());\n\
         gtag('config', '{}');",
        config::ANALYTICS_MEASUREMENT_ID
    );

    view! {
        <Title text="Hearthside Realty Group"/>
        <Script src=gtag_src async_="true"/>
        <Script>{gtag_init}</Script>

        <Router>
            <AppChrome/>
        </Router>
    }
}

/// Layout wrapper inside the router: public chrome everywhere except the
/// admin tree, plus a scroll reset on navigation.
#[component]
fn AppChrome() -> impl IntoView {
    let pathname = leptos_router::hooks::use_location().pathname;
    let is_admin = move || pathname.get().starts_with("/admin");

    #[cfg(feature = "csr")]
    Effect::new(move || {
        // Track the path so every navigation lands at the top of the page.
        let _ = pathname.get();
        if let Some(window) = web_sys::window() {
            window.scroll_to_with_x_and_y(0.0, 0.0);
        }
    });

    view! {
        <Show when=move || !is_admin()>
            <SiteHeader/>
        </Show>
        <main class="site-main">
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("services") view=ServicesPage/>
                <Route
                    path=(StaticSegment("services"), ParamSegment("slug"))
                    view=ServiceDetailPage
                />
                <Route path=StaticSegment("buyer-seller") view=BuyerSellerPage/>
                <Route path=StaticSegment("about-us") view=AboutUsPage/>
                <Route path=StaticSegment("case-studies") view=CaseStudiesPage/>
                <Route path=StaticSegment("contact-us") view=ContactUsPage/>
                <Route path=StaticSegment("resources") view=ResourcesPage/>
                <Route
                    path=(StaticSegment("resources"), ParamSegment("slug"))
                    view=ResourceDetailPage
                />
                <Route path=StaticSegment("admin") view=AdminDashboardPage/>
                <Route
                    path=(StaticSegment("admin"), StaticSegment("testimonials"))
                    view=AdminTestimonialsPage
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("services"))
                    view=AdminServicesPage
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("pricing"))
                    view=AdminPricingPage
                />
                <Route path=(StaticSegment("admin"), StaticSegment("faq")) view=AdminFaqPage/>
                <Route path=(StaticSegment("admin"), StaticSegment("team")) view=AdminTeamPage/>
                <Route
                    path=(StaticSegment("admin"), StaticSegment("case-studies"))
                    view=AdminCaseStudiesPage
                />
                <Route
                    path=(StaticSegment("admin"), StaticSegment("contact"))
                    view=AdminContactSettingsPage
                />
            </Routes>
        </main>
        <Show when=move || !is_admin()>
            <SiteFooter/>
        </Show>
    }
}
