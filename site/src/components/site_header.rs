//! Top navigation bar shared by the public pages.

use leptos::prelude::*;
use leptos_router::components::A;

const NAV_LINKS: [(&str, &str); 6] = [
    ("/services", "Services"),
    ("/buyer-seller", "Buyers & Sellers"),
    ("/case-studies", "Case Studies"),
    ("/resources", "Resources"),
    ("/about-us", "About"),
    ("/contact-us", "Contact"),
];

#[component]
pub fn SiteHeader() -> impl IntoView {
    let menu_open = RwSignal::new(false);

    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <span class="site-header__brand">
                    <A href="/">"Hearthside Realty Group"</A>
                </span>
                <button
                    class="site-header__toggle"
                    aria-label="Toggle navigation"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
                <nav class=move || {
                    if menu_open.get() { "site-nav site-nav--open" } else { "site-nav" }
                }>
                    <ul class="site-nav__list">
                        {NAV_LINKS
                            .iter()
                            .map(|&(href, label)| {
                                view! {
                                    <li class="site-nav__item" on:click=move |_| menu_open.set(false)>
                                        <A href=href>{label}</A>
                                    </li>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </ul>
                </nav>
            </div>
        </header>
    }
}
