//! Authenticated frame around every admin screen.
//!
//! Renders the login form until the session flag is set, then the sidebar,
//! header, and screen content. A reload drops all content edits back to the
//! fixtures; the banner in the header says so.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::admin::login_form::LoginForm;
use crate::state::auth::AuthState;

const ADMIN_LINKS: [(&str, &str); 8] = [
    ("/admin", "Overview"),
    ("/admin/testimonials", "Testimonials"),
    ("/admin/services", "Services"),
    ("/admin/pricing", "Pricing"),
    ("/admin/faq", "FAQ"),
    ("/admin/team", "Team"),
    ("/admin/case-studies", "Case Studies"),
    ("/admin/contact", "Contact Settings"),
];

#[component]
pub fn AdminShell(title: &'static str, children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_logout = move |_| {
        auth.update(AuthState::logout);
    };

    view! {
        <Show when=move || auth.get().authenticated fallback=|| view! { <LoginForm/> }>
            <div class="admin">
                <aside class="admin__sidebar">
                    <span class="admin__brand">"Hearthside Admin"</span>
                    <nav>
                        <ul class="admin__nav">
                            {ADMIN_LINKS
                                .iter()
                                .map(|&(href, label)| {
                                    view! {
                                        <li class="admin__nav-item">
                                            <A href=href>{label}</A>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </nav>
                </aside>
                <div class="admin__main">
                    <header class="admin__header">
                        <h1>{title}</h1>
                        <p class="admin__session-note">
                            "Edits live in this browser session and reset on reload."
                        </p>
                        <span class="admin__user">
                            {move || auth.get().username.unwrap_or_else(|| "admin".to_owned())}
                        </span>
                        <button class="btn admin__logout" on:click=on_logout>
                            "Logout"
                        </button>
                    </header>
                    <section class="admin__content">{children()}</section>
                </div>
            </div>
        </Show>
    }
}
