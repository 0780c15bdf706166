//! Site footer rendering the sitewide contact settings.

use content::model::ContactSettings;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn SiteFooter() -> impl IntoView {
    let settings = expect_context::<RwSignal<ContactSettings>>();

    let social_links = move || {
        let socials = settings.get().socials;
        [
            ("LinkedIn", socials.linkedin),
            ("Twitter", socials.twitter),
            ("Facebook", socials.facebook),
            ("Instagram", socials.instagram),
        ]
        .into_iter()
        .filter_map(|(label, url)| url.map(|url| (label, url)))
        .collect::<Vec<_>>()
    };

    view! {
        <footer class="site-footer">
            <div class="site-footer__grid">
                <div class="site-footer__col">
                    <h3>"Hearthside Realty Group"</h3>
                    <p>
                        "Marketing, lead generation, and transaction support for real-estate \
                         agents and teams across Central Texas."
                    </p>
                    <ul class="site-footer__socials">
                        {move || {
                            social_links()
                                .into_iter()
                                .map(|(label, url)| {
                                    view! {
                                        <li>
                                            <a href=url target="_blank" rel="noreferrer">{label}</a>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </div>
                <div class="site-footer__col">
                    <h4>"Explore"</h4>
                    <ul class="site-footer__links">
                        <li><A href="/services">"Services"</A></li>
                        <li><A href="/case-studies">"Case Studies"</A></li>
                        <li><A href="/resources">"Resources"</A></li>
                        <li><A href="/about-us">"About Us"</A></li>
                        <li><A href="/contact-us">"Contact"</A></li>
                    </ul>
                </div>
                <div class="site-footer__col">
                    <h4>"Visit"</h4>
                    {move || {
                        let address = settings.get().address;
                        view! {
                            <p class="site-footer__address">
                                {address.street}
                                <br/>
                                {address.suite}
                                <br/>
                                {format!("{}, {} {}", address.city, address.state, address.zip)}
                            </p>
                        }
                    }}
                    <p class="site-footer__contact">
                        <a href=move || format!("tel:{}", settings.get().phone)>
                            {move || settings.get().phone}
                        </a>
                        <br/>
                        <a href=move || format!("mailto:{}", settings.get().email)>
                            {move || settings.get().email}
                        </a>
                    </p>
                </div>
                <div class="site-footer__col">
                    <h4>"Hours"</h4>
                    <ul class="site-footer__hours">
                        {move || {
                            settings
                                .get()
                                .hours
                                .into_iter()
                                .map(|row| {
                                    view! {
                                        <li>
                                            <span>{row.days}</span>
                                            <span>{row.hours}</span>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                </div>
            </div>
            <p class="site-footer__legal">
                "© 2026 Hearthside Realty Group. All rights reserved."
            </p>
        </footer>
    }
}
