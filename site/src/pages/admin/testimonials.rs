//! Admin list editor for testimonials.

use content::editor::ListEditor;
use content::ids;
use content::model::Testimonial;
use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::admin::confirm_dialog::ConfirmDialog;
use crate::components::admin::search_bar::SearchBar;
use crate::components::admin::shell::AdminShell;
use crate::components::testimonial_card::star_row;
use crate::pages::admin::forms::parse_rating;
use crate::util::clock;

#[component]
pub fn AdminTestimonialsPage() -> impl IntoView {
    let editor = expect_context::<RwSignal<ListEditor<Testimonial>>>();
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
        <Title text="Testimonials — Admin"/>
        <AdminShell title="Testimonials">
            <div class="admin-toolbar">
                <SearchBar query=query placeholder="Search by name, role, or quote..."/>
                <button class="btn btn--primary" on:click=move |_| show_add.set(true)>
                    "+ Add Testimonial"
                </button>
            </div>

            <div class="admin-list">
                {move || {
                    filtered()
                        .into_iter()
                        .map(|testimonial| {
                            let edit_target = testimonial.id.clone();
                            let delete_target = testimonial.id.clone();
                            let featured = testimonial.featured;
                            view! {
                                <article class="admin-card">
                                    <header class="admin-card__header">
                                        <h3>{testimonial.name.clone()}</h3>
                                        <span class="admin-card__stars">
                                            {star_row(testimonial.rating)}
                                        </span>
                                        <Show when=move || featured>
                                            <span class="admin-card__badge">"Featured"</span>
                                        </Show>
                                    </header>
                                    <p class="admin-card__meta">
                                        {testimonial.role.clone()}
                                        " · "
                                        {testimonial.date.clone()}
                                    </p>
                                    <p class="admin-card__excerpt">{testimonial.quote.clone()}</p>
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
                    <p class="admin-empty">"No testimonials match your search."</p>
                </Show>
            </div>

            <Show when=move || show_add.get()>
                <TestimonialDialog
                    heading="Add Testimonial"
                    existing=None
                    on_close=Callback::new(move |()| show_add.set(false))
                />
            </Show>
            {move || {
                edit_id.get().and_then(|id| {
                    editor.get().get(&id).cloned().map(|testimonial| {
                        view! {
                            <TestimonialDialog
                                heading="Edit Testimonial"
                                existing=Some(testimonial)
                                on_close=Callback::new(move |()| edit_id.set(None))
                            />
                        }
                    })
                })
            }}
            <Show when=move || delete_id.get().is_some()>
                <ConfirmDialog
                    title="Delete Testimonial"
                    message="This removes the testimonial from every page in this session."
                    on_cancel=Callback::new(move |()| delete_id.set(None))
                    on_confirm=on_delete
                />
            </Show>
        </AdminShell>
    }
}

/// Add/edit dialog; a missing `existing` id means the submit creates a new
/// record with a timestamp id.
#[component]
fn TestimonialDialog(
    heading: &'static str,
    existing: Option<Testimonial>,
    on_close: Callback<()>,
) -> impl IntoView {
    let editor = expect_context::<RwSignal<ListEditor<Testimonial>>>();

    let record_id = existing.as_ref().map(|t| t.id.clone());
    let name = RwSignal::new(existing.as_ref().map(|t| t.name.clone()).unwrap_or_default());
    let role = RwSignal::new(existing.as_ref().map(|t| t.role.clone()).unwrap_or_default());
    let quote = RwSignal::new(existing.as_ref().map(|t| t.quote.clone()).unwrap_or_default());
    let image = RwSignal::new(existing.as_ref().map(|t| t.image.clone()).unwrap_or_default());
    let date = RwSignal::new(existing.as_ref().map(|t| t.date.clone()).unwrap_or_default());
    let rating = RwSignal::new(existing.as_ref().map_or(5, |t| t.rating));
    let featured = RwSignal::new(existing.as_ref().is_some_and(|t| t.featured));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if name.get().trim().is_empty() || quote.get().trim().is_empty() {
            return;
        }
        let record = Testimonial {
            id: record_id
                .clone()
                .unwrap_or_else(|| ids::timestamp_id(clock::now_ms())),
            name: name.get().trim().to_owned(),
            role: role.get().trim().to_owned(),
            quote: quote.get().trim().to_owned(),
            image: image.get().trim().to_owned(),
            rating: Testimonial::clamp_rating(rating.get()),
            featured: featured.get(),
            date: date.get().trim().to_owned(),
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
                        "Name"
                        <input
                            class="dialog__input"
                            type="text"
                            required
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Role / Context"
                        <input
                            class="dialog__input"
                            type="text"
                            prop:value=move || role.get()
                            on:input=move |ev| role.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Quote"
                        <textarea
                            class="dialog__input"
                            rows="4"
                            required
                            prop:value=move || quote.get()
                            on:input=move |ev| quote.set(event_target_value(&ev))
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
                        "Display Date"
                        <input
                            class="dialog__input"
                            type="text"
                            placeholder="e.g. March 2026"
                            prop:value=move || date.get()
                            on:input=move |ev| date.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="dialog__label">
                        "Rating"
                        <select
                            class="dialog__input"
                            on:change=move |ev| rating.set(parse_rating(&event_target_value(&ev)))
                        >
                            {[5u8, 4, 3, 2, 1]
                                .into_iter()
                                .map(|stars| {
                                    view! {
                                        <option
                                            value=stars.to_string()
                                            selected=move || rating.get() == stars
                                        >
                                            {format!("{stars} stars")}
                                        </option>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </select>
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
