//! Admin list editor for service lines.

use content::editor::ListEditor;
use content::ids;
use content::model::Service;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::admin::confirm_dialog::ConfirmDialog;
use crate::components::admin::search_bar::SearchBar;
use crate::components::admin::shell::AdminShell;
use crate::pages::admin::forms::{lines_to_list, list_to_lines};
use crate::util::clock;

#[component]
pub fn AdminServicesPage() -> impl IntoView {
    let editor = expect_context::<RwSignal<ListEditor<Service>>>();
    let query = RwSignal::new(String::new());
    let show_add = RwSignal::new(false);
    let edit_id = RwSignal::new(None::<String>);
    let delete_id = RwSignal::new(None::<String>);

    let filtered = move || {
        let q = query.get();
        editor
            .get()
            .search(&q)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    };

    let on_delete = Callback::new(move |()| {
        if let Some(id) = delete_id.get_untracked() {
            editor.update(|list| {
                list.remove(&id);
            });
        }
        delete_id.set(None);
    });

    view! {
        <Title text="Services — Admin"/>
        <AdminShell title="Services">
            <div class="admin-toolbar">
                <SearchBar query=query placeholder="Search by title or description..."/>
                <button class="btn btn--primary" on:click=move |_| show_add.set(true)>
                    "+ Add Service"
                </button>
            </div>

            <div class="admin-list">
                {move || {
                    filtered()
                        .into_iter()
                        .map(|service| {
                            let edit_target = service.id.clone();
                            let delete_target = service.id.clone();
                            let inactive = !service.active;
                            view! {
                                <article class="admin-card">
                                    <header class="admin-card__header">
                                        <h3>{service.title.clone()}</h3>
                                        <Show when=move || inactive>
                                            <span class="admin-card__badge admin-card__badge--muted">
                                                "Hidden"
                                            </span>
                                        </Show>
                                    </header>
                                    <p class="admin-card__meta">
                                        {service.subtitle.clone()}
                                        " · /services/"
                                        {service.link.clone()}
                                    </p>
                                    <p class="admin-card__excerpt">{service.description.clone()}</p>
                                    <div class="admin-card__actions">
                                        <button
                                            class="btn"
                                            on:click=move |_| edit_id.set(Some(edit_target.clone()))
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="btn btn--danger"
                                            on:click=move |_| delete_id.set(Some(delete_target.clone()))
                                        >
                                            "Delete"
                                        </button>
                                    </div>
                                </article>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
                <Show when=move || filtered().is_empty()>
                    <p class="admin-empty">"No services match your search."</p>
                </Show>
            </div>

            <Show when=move || show_add.get()>
                <ServiceDialog
                    heading="Add Service"
                    existing=None
                    on_close=Callback::new(move |()| show_add.set(false))
                />
            </Show>
            {move || {
                edit_id.get().and_then(|id| {
                    editor.get().get(&id).cloned().map(|service| {
                        view! {
                            <ServiceDialog
                                heading="Edit Service"
                                existing=Some(service)
                                on_close=Callback::new(move |()| edit_id.set(None))
                            />
                        }
                    })
                })
            }}
            <Show when=move || delete_id.get().is_some()>
                <ConfirmDialog
                    title="Delete Service"
                    message="This removes the service and its detail page for this session."
                    on_cancel=Callback::new(move |()| delete_id.set(None))
                    on_confirm=on_delete
                />
            </Show>
        </AdminShell>
    }
}

#[component]
fn ServiceDialog(
    heading: &'static str,
    existing: Option<Service>,
    on_close: Callback<()>,
) -> impl IntoView {
    let editor = expect_context::<RwSignal<ListEditor<Service>>>();

    let record_id = existing.as_ref().map(|s| s.id.clone());
    let title = RwSignal::new(existing.as_ref().map(|s| s.title.clone()).unwrap_or_default());
    let subtitle =
        RwSignal::new(existing.as_ref().map(|s| s.subtitle.clone()).unwrap_or_default());
    let description =
        RwSignal::new(existing.as_ref().map(|s| s.description.clone()).unwrap_or_default());
    let features = RwSignal::new(
        existing
            .as_ref()
            .map(|s| list_to_lines(&s.features))
            .unwrap_or_default(),
    );
    let image = RwSignal::new(existing.as_ref().map(|s| s.image.clone()).unwrap_or_default());
    let icon = RwSignal::new(existing.as_ref().map(|s| s.icon.clone()).unwrap_or_default());
    let link = RwSignal::new(existing.as_ref().map(|s| s.link.clone()).unwrap_or_default());
    let active = RwSignal::new(existing.as_ref().is_none_or(|s| s.active));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if title.get().trim().is_empty() || link.get().trim().is_empty() {
            return;
        }
        let record = Service {
            id: record_id
                .clone()
                .unwrap_or_else(|| ids::timestamp_id(clock::now_ms())),
            title: title.get().trim().to_owned(),
            subtitle: subtitle.get().trim().to_owned(),
            description: description.get().trim().to_owned(),
            features: lines_to_list(&features.get()),
            image: image.get().trim().to_owned(),
            icon: icon.get().trim().to_owned(),
            link: link.get().trim().to_owned(),
            active: active.get(),
        };
        editor.update(|list| match &record_id {
            Some(id) => {
                list.update(id, |existing| *existing = record.clone());
            }
            None => list.add(record.clone()),
        });
        on_close.run(());
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--form" on:click=move |ev| ev.stop_propagation()>
                <h2>{heading}</h2>
                <form on:submit=on_submit>
                    <label class="dialog__label">
                        "Title"
                        <input
                            class="dialog__input"
                            type="text"
                            required
                            prop:value=move || title.get()
                            on:input=move |ev| title.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Subtitle"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || subtitle.get()
                            on:input=move |ev| subtitle.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Description"
                        <textarea
                            class="dialog__input"
                            rows="4"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label class="dialog__label">
                        "Features (one per line)"
                        <textarea
                            class="dialog__input"
                            rows="4"
                            prop:value=move || features.get()
                            on:input=move |ev| features.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label class="dialog__label">
                        "Image URL"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || image.get()
                            on:input=move |ev| image.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Icon"
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="e.g. map-pin"
                            prop:value=move || icon.get()
                            on:input=move |ev| icon.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Detail Slug"
                        <input
                            class="dialog__input"
                            type="text"
                            required
                            placeholder="e.g. gbp-management"
                            prop:value=move || link.get()
                            on:input=move |ev| link.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || active.get()
                            on:change=move |_| active.update(|value| *value = !*value)
                        />
                        "Visible on public pages"
                    </label>
                    <div class="dialog__actions">
                        <button class="btn" type="button" on:click=move |_| on_close.run(())>
                            "Cancel"
                        </button>
                        <button class="btn btn--primary" type="submit">
                            "Save"
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
