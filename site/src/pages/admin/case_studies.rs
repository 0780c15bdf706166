//! Admin list editor for case studies.

use content::editor::ListEditor;
use content::ids;
use content::model::CaseStudy;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::admin::confirm_dialog::ConfirmDialog;
use crate::components::admin::search_bar::SearchBar;
use crate::components::admin::shell::AdminShell;
use crate::pages::admin::forms::{lines_to_list, list_to_lines, parse_stats, stats_to_lines};
use crate::util::clock;

#[component]
pub fn AdminCaseStudiesPage() -> impl IntoView {
    let editor = expect_context::<RwSignal<ListEditor<CaseStudy>>>();
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
        <Title text="Case Studies — Admin"/>
        <AdminShell title="Case Studies">
            <div class="admin-toolbar">
                <SearchBar query=query placeholder="Search by title, client, or category..."/>
                <button class="btn btn--primary" on:click=move |_| show_add.set(true)>
                    "+ Add Case Study"
                </button>
            </div>

            <div class="admin-list">
                {move || {
                    filtered()
                        .into_iter()
                        .map(|study| {
                            let edit_target = study.id.clone();
                            let delete_target = study.id.clone();
                            let featured = study.featured;
                            view! {
                                <article class="admin-card">
                                    <header class="admin-card__header">
                                        <h3>{study.title.clone()}</h3>
                                        <Show when=move || featured>
                                            <span class="admin-card__badge">"Featured"</span>
                                        </Show>
                                    </header>
                                    <p class="admin-card__meta">
                                        {study.client.clone()}
                                        " · "
                                        {study.location.clone()}
                                        " · "
                                        {study.category.clone()}
                                    </p>
                                    <p class="admin-card__excerpt">{study.description.clone()}</p>
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
                    <p class="admin-empty">"No case studies match your search."</p>
                </Show>
            </div>

            <Show when=move || show_add.get()>
                <CaseStudyDialog
                    heading="Add Case Study"
                    existing=None
                    on_close=Callback::new(move |()| show_add.set(false))
                />
            </Show>
            {move || {
                edit_id.get().and_then(|id| {
                    editor.get().get(&id).cloned().map(|study| {
                        view! {
                            <CaseStudyDialog
                                heading="Edit Case Study"
                                existing=Some(study)
                                on_close=Callback::new(move |()| edit_id.set(None))
                            />
                        }
                    })
                })
            }}
            <Show when=move || delete_id.get().is_some()>
                <ConfirmDialog
                    title="Delete Case Study"
                    message="This removes the story from the case studies page for this session."
                    on_cancel=Callback::new(move |()| delete_id.set(None))
                    on_confirm=on_delete
                />
            </Show>
        </AdminShell>
    }
}

#[component]
fn CaseStudyDialog(
    heading: &'static str,
    existing: Option<CaseStudy>,
    on_close: Callback<()>,
) -> impl IntoView {
    let editor = expect_context::<RwSignal<ListEditor<CaseStudy>>>();

    let record_id = existing.as_ref().map(|c| c.id.clone());
    let title = RwSignal::new(existing.as_ref().map(|c| c.title.clone()).unwrap_or_default());
    let client = RwSignal::new(existing.as_ref().map(|c| c.client.clone()).unwrap_or_default());
    let location =
        RwSignal::new(existing.as_ref().map(|c| c.location.clone()).unwrap_or_default());
    let category =
        RwSignal::new(existing.as_ref().map(|c| c.category.clone()).unwrap_or_default());
    let image = RwSignal::new(existing.as_ref().map(|c| c.image.clone()).unwrap_or_default());
    let description =
        RwSignal::new(existing.as_ref().map(|c| c.description.clone()).unwrap_or_default());
    let stats = RwSignal::new(
        existing
            .as_ref()
            .map(|c| stats_to_lines(&c.stats))
            .unwrap_or_default(),
    );
    let challenges = RwSignal::new(
        existing
            .as_ref()
            .map(|c| list_to_lines(&c.challenges))
            .unwrap_or_default(),
    );
    let solutions = RwSignal::new(
        existing
            .as_ref()
            .map(|c| list_to_lines(&c.solutions))
            .unwrap_or_default(),
    );
    let results = RwSignal::new(
        existing
            .as_ref()
            .map(|c| list_to_lines(&c.results))
            .unwrap_or_default(),
    );
    let featured = RwSignal::new(existing.as_ref().is_some_and(|c| c.featured));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if title.get().trim().is_empty() || client.get().trim().is_empty() {
            return;
        }
        let record = CaseStudy {
            id: record_id
                .clone()
                .unwrap_or_else(|| ids::timestamp_id(clock::now_ms())),
            title: title.get().trim().to_owned(),
            client: client.get().trim().to_owned(),
            location: location.get().trim().to_owned(),
            category: category.get().trim().to_owned(),
            image: image.get().trim().to_owned(),
            description: description.get().trim().to_owned(),
            stats: parse_stats(&stats.get()),
            challenges: lines_to_list(&challenges.get()),
            solutions: lines_to_list(&solutions.get()),
            results: lines_to_list(&results.get()),
            featured: featured.get(),
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
                        "Client"
                        <input
                            class="dialog__input"
                            type="text"
                            required
                            prop:value=move || client.get()
                            on:input=move |ev| client.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Location"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || location.get()
                            on:input=move |ev| location.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Category"
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="e.g. Lead Generation"
                            prop:value=move || category.get()
                            on:input=move |ev| category.set(event_target_value(&ev))
                        />
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
                        "Description"
                        <textarea
                            class="dialog__input"
                            rows="3"
                            prop:value=move || description.get()
                            on:input=move |ev| description.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label class="dialog__label">
                        "Stats (up to three \"value | label\" lines)"
                        <textarea
                            class="dialog__input"
                            rows="3"
                            placeholder="312% | more profile calls"
                            prop:value=move || stats.get()
                            on:input=move |ev| stats.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label class="dialog__label">
                        "Challenges (one per line)"
                        <textarea
                            class="dialog__input"
                            rows="3"
                            prop:value=move || challenges.get()
                            on:input=move |ev| challenges.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label class="dialog__label">
                        "Solutions (one per line)"
                        <textarea
                            class="dialog__input"
                            rows="3"
                            prop:value=move || solutions.get()
                            on:input=move |ev| solutions.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label class="dialog__label">
                        "Results (one per line)"
                        <textarea
                            class="dialog__input"
                            rows="3"
                            prop:value=move || results.get()
                            on:input=move |ev| results.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label class="dialog__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || featured.get()
                            on:change=move |_| featured.update(|value| *value = !*value)
                        />
                        "Feature on the home page"
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
