//! Admin list editor for FAQ entries.

use content::editor::ListEditor;
use content::ids;
use content::model::{Faq, FaqCategory};
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::admin::confirm_dialog::ConfirmDialog;
use crate::components::admin::search_bar::SearchBar;
use crate::components::admin::shell::AdminShell;
use crate::pages::admin::forms::parse_order;
use crate::util::clock;

fn category_from_value(value: &str) -> FaqCategory {
    FaqCategory::ALL
        .into_iter()
        .find(|category| category.label() == value)
        .unwrap_or_default()
}

#[component]
pub fn AdminFaqPage() -> impl IntoView {
    let editor = expect_context::<RwSignal<ListEditor<Faq>>>();
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
        <Title text="FAQ — Admin"/>
        <AdminShell title="FAQ">
            <div class="admin-toolbar">
                <SearchBar query=query placeholder="Search questions and answers..."/>
                <button class="btn btn--primary" on:click=move |_| show_add.set(true)>
                    "+ Add FAQ"
                </button>
            </div>

            <div class="admin-list">
                {move || {
                    filtered()
                        .into_iter()
                        .map(|faq| {
                            let edit_target = faq.id.clone();
                            let delete_target = faq.id.clone();
                            let inactive = !faq.active;
                            view! {
                                <article class="admin-card">
                                    <header class="admin-card__header">
                                        <h3>{faq.question.clone()}</h3>
                                        <span class="admin-card__badge">
                                            {faq.category.label()}
                                        </span>
                                        <Show when=move || inactive>
                                            <span class="admin-card__badge admin-card__badge--muted">
                                                "Hidden"
                                            </span>
                                        </Show>
                                    </header>
                                    <p class="admin-card__meta">
                                        "Order "
                                        {faq.order}
                                    </p>
                                    <p class="admin-card__excerpt">{faq.answer.clone()}</p>
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
                    <p class="admin-empty">"No FAQ entries match your search."</p>
                </Show>
            </div>

            <Show when=move || show_add.get()>
                <FaqDialog
                    heading="Add FAQ"
                    existing=None
                    on_close=Callback::new(move |()| show_add.set(false))
                />
            </Show>
            {move || {
                edit_id.get().and_then(|id| {
                    editor.get().get(&id).cloned().map(|faq| {
                        view! {
                            <FaqDialog
                                heading="Edit FAQ"
                                existing=Some(faq)
                                on_close=Callback::new(move |()| edit_id.set(None))
                            />
                        }
                    })
                })
            }}
            <Show when=move || delete_id.get().is_some()>
                <ConfirmDialog
                    title="Delete FAQ"
                    message="This removes the question from the public FAQ lists for this session."
                    on_cancel=Callback::new(move |()| delete_id.set(None))
                    on_confirm=on_delete
                />
            </Show>
        </AdminShell>
    }
}

#[component]
fn FaqDialog(
    heading: &'static str,
    existing: Option<Faq>,
    on_close: Callback<()>,
) -> impl IntoView {
    let editor = expect_context::<RwSignal<ListEditor<Faq>>>();

    let record_id = existing.as_ref().map(|f| f.id.clone());
    let question =
        RwSignal::new(existing.as_ref().map(|f| f.question.clone()).unwrap_or_default());
    let answer = RwSignal::new(existing.as_ref().map(|f| f.answer.clone()).unwrap_or_default());
    let category = RwSignal::new(existing.as_ref().map_or_else(FaqCategory::default, |f| f.category));
    let order = RwSignal::new(existing.as_ref().map_or_else(String::new, |f| f.order.to_string()));
    let active = RwSignal::new(existing.as_ref().is_none_or(|f| f.active));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if question.get().trim().is_empty() || answer.get().trim().is_empty() {
            return;
        }
        let record = Faq {
            id: record_id
                .clone()
                .unwrap_or_else(|| ids::timestamp_id(clock::now_ms())),
            question: question.get().trim().to_owned(),
            answer: answer.get().trim().to_owned(),
            category: category.get(),
            order: parse_order(&order.get()),
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
                        "Question"
                        <input
                            class="dialog__input"
                            type="text"
                            required
                            prop:value=move || question.get()
                            on:input=move |ev| question.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Answer"
                        <textarea
                            class="dialog__input"
                            rows="4"
                            required
                            prop:value=move || answer.get()
                            on:input=move |ev| answer.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    <label class="dialog__label">
                        "Category"
                        <select
                            class="dialog__input"
                            on:change=move |ev| {
                                category.set(category_from_value(&event_target_value(&ev)));
                            }
                        >
                            {FaqCategory::ALL
                                .into_iter()
                                .map(|variant| {
                                    view! {
                                        <option
                                            value=variant.label()
                                            selected=move || category.get() == variant
                                        >
                                            {variant.label()}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    <label class="dialog__label">
                        "Display Order"
                        <input
                            class="dialog__input"
                            type="number"
                            min="1"
                            prop:value=move || order.get()
                            on:input=move |ev| order.set(event_target_value(&ev))
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
