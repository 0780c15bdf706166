//! Static not-found page used as the router fallback.

use leptos::prelude::*;
use leptos_meta::Title;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <Title text="Page Not Found — Hearthside Realty Group"/>
        <section class="not-found">
            <h1>"404"</h1>
            <p>"That page does not exist. The listings, however, are very real."</p>
            <span class="not-found__home">
                <A href="/">"Back to the home page"</A>
            </span>
        </section>
    }
}
