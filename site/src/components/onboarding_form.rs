//! New-client onboarding application posting to the forms endpoint.
//!
//! Mirrors the contact form's submit contract: clear-and-modal on success,
//! untouched form on failure.

use content::editor::ListEditor;
use content::model::Service;
use leptos::prelude::*;

use crate::components::success_modal::SuccessModal;
use crate::net::forms::OnboardingApplication;

const BUDGET_OPTIONS: [&str; 4] = [
    "Under $1,000 / month",
    "$1,000 – $2,500 / month",
    "$2,500 – $5,000 / month",
    "$5,000+ / month",
];

#[component]
pub fn OnboardingForm() -> impl IntoView {
    let services = expect_context::<RwSignal<ListEditor<Service>>>();

    let full_name = RwSignal::new(String::new());
    let brokerage = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let market = RwSignal::new(String::new());
    let selected_services = RwSignal::new(Vec::<String>::new());
    let monthly_budget = RwSignal::new(BUDGET_OPTIONS[0].to_owned());
    let notes = RwSignal::new(String::new());
    let sending = RwSignal::new(false);
    let sent = RwSignal::new(false);

    let service_titles = move || {
        services
            .get()
            .items()
            .iter()
            .filter(|service| service.active)
            .map(|service| service.title.clone())
            .collect::<Vec<_>>()
    };

    let clear_all = move || {
        full_name.set(String::new());
        brokerage.set(String::new());
        email.set(String::new());
        phone.set(String::new());
        market.set(String::new());
        selected_services.set(Vec::new());
        monthly_budget.set(BUDGET_OPTIONS[0].to_owned());
        notes.set(String::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if sending.get() {
            return;
        }
        let application = OnboardingApplication {
            full_name: full_name.get(),
            brokerage: brokerage.get(),
            email: email.get(),
            phone: phone.get(),
            market: market.get(),
            services: selected_services.get(),
            monthly_budget: monthly_budget.get(),
            notes: notes.get(),
        };
        if !application.is_complete() {
            return;
        }
        sending.set(true);

        #[cfg(feature = "csr")]
        leptos::task::spawn_local(async move {
            if crate::net::forms::submit_onboarding(&application).await.is_ok() {
                clear_all();
                sent.set(true);
            }
            sending.set(false);
        });
        #[cfg(not(feature = "csr"))]
        {
            let _ = &application;
            sending.set(false);
        }
    };

    view! {
        <form class="inquiry-form" on:submit=on_submit>
            <label class="inquiry-form__field">
                "Full Name"
                <input
                    type="text"
                    required
                    prop:value=move || full_name.get()
                    on:input=move |ev| full_name.set(event_target_value(&ev))
                />
            </label>
            <label class="inquiry-form__field">
                "Brokerage / Team"
                <input
                    type="text"
                    prop:value=move || brokerage.get()
                    on:input=move |ev| brokerage.set(event_target_value(&ev))
                />
            </label>
            <label class="inquiry-form__field">
                "Email"
                <input
                    type="email"
                    required
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="inquiry-form__field">
                "Phone"
                <input
                    type="tel"
                    required
                    prop:value=move || phone.get()
                    on:input=move |ev| phone.set(event_target_value(&ev))
                />
            </label>
            <label class="inquiry-form__field">
                "Primary Market"
                <input
                    type="text"
                    placeholder="e.g. Austin metro"
                    prop:value=move || market.get()
                    on:input=move |ev| market.set(event_target_value(&ev))
                />
            </label>
            <fieldset class="inquiry-form__services">
                <legend>"Services you are interested in"</legend>
                {move || {
                    service_titles()
                        .into_iter()
                        .map(|title| {
                            let toggle_title = title.clone();
                            let checked_title = title.clone();
                            view! {
                                <label class="inquiry-form__checkbox">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || {
                                            selected_services.get().contains(&checked_title)
                                        }
                                        on:change=move |_| {
                                            selected_services.update(|selected| {
                                                if let Some(index) =
                                                    selected.iter().position(|s| s == &toggle_title)
                                                {
                                                    selected.remove(index);
                                                } else {
                                                    selected.push(toggle_title.clone());
                                                }
                                            });
                                        }
                                    />
                                    {title}
                                </label>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </fieldset>
            <label class="inquiry-form__field">
                "Monthly Marketing Budget"
                <select on:change=move |ev| monthly_budget.set(event_target_value(&ev))>
                    {BUDGET_OPTIONS
                        .into_iter()
                        .map(|option| {
                            view! {
                                <option
                                    value=option
                                    selected=move || monthly_budget.get() == option
                                >
                                    {option}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
            </label>
            <label class="inquiry-form__field">
                "Anything else we should know?"
                <textarea
                    rows="4"
                    prop:value=move || notes.get()
                    on:input=move |ev| notes.set(event_target_value(&ev))
                ></textarea>
            </label>
            <button class="btn btn--primary" type="submit" disabled=move || sending.get()>
                {move || if sending.get() { "Submitting..." } else { "Submit Application" }}
            </button>
        </form>
        <Show when=move || sent.get()>
            <SuccessModal
                title="Application Received"
                message="Thanks for applying. A strategist will review your goals and reach out to schedule a kickoff call."
                on_close=Callback::new(move |()| sent.set(false))
            />
        </Show>
    }
}
