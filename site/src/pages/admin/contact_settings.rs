//! Admin form for the single sitewide contact-settings record.
//!
//! No list semantics here: the form edits a draft of every field and one
//! save button writes the whole record back to the shared signal.

use content::model::{Address, ContactSettings, SeoMeta, SocialLinks};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::admin::shell::AdminShell;
use crate::pages::admin::forms::{hours_to_lines, optional_field, parse_hours};

#[component]
pub fn AdminContactSettingsPage() -> impl IntoView {
    let settings = expect_context::<RwSignal<ContactSettings>>();
    let current = settings.get_untracked();

    let phone = RwSignal::new(current.phone.clone());
    let email = RwSignal::new(current.email.clone());
    let street = RwSignal::new(current.address.street.clone());
    let suite = RwSignal::new(current.address.suite.clone());
    let city = RwSignal::new(current.address.city.clone());
    let state = RwSignal::new(current.address.state.clone());
    let zip = RwSignal::new(current.address.zip.clone());
    let hours = RwSignal::new(hours_to_lines(&current.hours));
    let linkedin = RwSignal::new(current.socials.linkedin.clone().unwrap_or_default());
    let twitter = RwSignal::new(current.socials.twitter.clone().unwrap_or_default());
    let facebook = RwSignal::new(current.socials.facebook.clone().unwrap_or_default());
    let instagram = RwSignal::new(current.socials.instagram.clone().unwrap_or_default());
    let seo_title = RwSignal::new(current.seo.title.clone());
    let seo_description = RwSignal::new(current.seo.description.clone());
    let seo_keywords = RwSignal::new(current.seo.keywords.clone());
    let saved = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        settings.set(ContactSettings {
            phone: phone.get().trim().to_owned(),
            email: email.get().trim().to_owned(),
            address: Address {
                street: street.get().trim().to_owned(),
                suite: suite.get().trim().to_owned(),
                city: city.get().trim().to_owned(),
                state: state.get().trim().to_owned(),
                zip: zip.get().trim().to_owned(),
            },
            hours: parse_hours(&hours.get()),
            socials: SocialLinks {
                linkedin: optional_field(&linkedin.get()),
                twitter: optional_field(&twitter.get()),
                facebook: optional_field(&facebook.get()),
                instagram: optional_field(&instagram.get()),
            },
            seo: SeoMeta {
                title: seo_title.get().trim().to_owned(),
                description: seo_description.get().trim().to_owned(),
                keywords: seo_keywords.get().trim().to_owned(),
            },
        });
        saved.set(true);
    };

    view! {
        <Title text="Contact Settings — Admin"/>
        <AdminShell title="Contact Settings">
            <form class="admin-settings" on:submit=on_submit>
                <fieldset class="admin-settings__group">
                    <legend>"Contact"</legend>
                    <label class="dialog__label">
                        "Phone"
                        <input
                            class="dialog__input"
                            type="tel"
                            required
                            prop:value=move || phone.get()
                            on:input=move |ev| phone.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Email"
                        <input
                            class="dialog__input"
                            type="email"
                            required
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                </fieldset>

                <fieldset class="admin-settings__group">
                    <legend>"Address"</legend>
                    <label class="dialog__label">
                        "Street"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || street.get()
                            on:input=move |ev| street.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Suite"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || suite.get()
                            on:input=move |ev| suite.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "City"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || city.get()
                            on:input=move |ev| city.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "State"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || state.get()
                            on:input=move |ev| state.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "ZIP"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || zip.get()
                            on:input=move |ev| zip.set(event_target_value(&ev))
                        />
                    </label>
                </fieldset>

                <fieldset class="admin-settings__group">
                    <legend>"Business Hours"</legend>
                    <label class="dialog__label">
                        "Rows (\"days | hours\", one per line)"
                        <textarea
                            class="dialog__input"
                            rows="4"
                            prop:value=move || hours.get()
                            on:input=move |ev| hours.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                </fieldset>

                <fieldset class="admin-settings__group">
                    <legend>"Social Profiles"</legend>
                    <label class="dialog__label">
                        "LinkedIn URL"
                        <input
                            class="dialog__input"
                            type="url"
                            prop:value=move || linkedin.get()
                            on:input=move |ev| linkedin.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Twitter URL"
                        <input
                            class="dialog__input"
                            type="url"
                            prop:value=move || twitter.get()
                            on:input=move |ev| twitter.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Facebook URL"
                        <input
                            class="dialog__input"
                            type="url"
                            prop:value=move || facebook.get()
                            on:input=move |ev| facebook.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Instagram URL"
                        <input
                            class="dialog__input"
                            type="url"
                            prop:value=move || instagram.get()
                            on:input=move |ev| instagram.set(event_target_value(&ev))
                        />
                    </label>
                </fieldset>

                <fieldset class="admin-settings__group">
                    <legend>"SEO Defaults"</legend>
                    <label class="dialog__label">
                        "Meta Title"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || seo_title.get()
                            on:input=move |ev| seo_title.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Meta Description"
                        <textarea
                            class="dialog__input"
                            rows="3"
                            prop:value=move || seo_description.get()
                            on:input=move |ev| seo_description.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label class="dialog__label">
                        "Keywords"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || seo_keywords.get()
                            on:input=move |ev| seo_keywords.set(event_target_value(&ev))
                        />
                    </label>
                </fieldset>

                <div class="admin-settings__actions">
                    <button class="btn btn--primary" type="submit">
                        "Save Settings"
                    </button>
                    <Show when=move || saved.get()>
                        <span class="admin-settings__saved">
                            "Saved for this session."
                        </span>
                    </Show>
                </div>
            </form>
        </AdminShell>
    }
}
