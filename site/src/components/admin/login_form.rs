//! Admin login form gating the dashboard routes.
//!
//! Submits resolve after an artificial delay, then compare the two inputs
//! against the build-time constants. Every failure shows the same static
//! error string.

use leptos::prelude::*;

use crate::state::auth::{AuthState, LOGIN_ERROR, verify_credentials};

#[component]
pub fn LoginForm() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "csr")]
        {
            let username_value = username.get().trim().to_owned();
            let password_value = password.get();
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(
                    crate::state::auth::LOGIN_DELAY_MS,
                ))
                .await;
                if verify_credentials(&username_value, &password_value) {
                    auth.update(|state| state.login(&username_value));
                } else {
                    error.set(LOGIN_ERROR.to_owned());
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            if verify_credentials(username.get().trim(), &password.get()) {
                auth.update(|state| state.login(username.get().trim()));
            } else {
                error.set(LOGIN_ERROR.to_owned());
            }
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Hearthside Admin"</h1>
                <p class="login-card__subtitle">"Sign in to manage site content"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        placeholder="Username"
                        required
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        required
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
            </div>
        </div>
    }
}
