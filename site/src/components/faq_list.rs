//! Accordion list of FAQ entries with optional category filtering.

#[cfg(test)]
#[path = "faq_list_test.rs"]
mod faq_list_test;

use content::model::{Faq, FaqCategory};
use leptos::prelude::*;

/// FAQs shown for a category filter: active entries only, ordered by their
/// `order` field (then question text for a stable tie-break).
#[must_use]
pub fn visible_faqs(items: &[Faq], category: Option<FaqCategory>) -> Vec<Faq> {
    let mut selected: Vec<Faq> = items
        .iter()
        .filter(|faq| faq.active && category.is_none_or(|wanted| faq.category == wanted))
        .cloned()
        .collect();
    selected.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.question.cmp(&b.question)));
    selected
}

#[component]
pub fn FaqList(
    #[prop(into)] faqs: Signal<Vec<Faq>>,
    /// Show the category filter chips above the list.
    #[prop(optional)]
    with_filter: bool,
) -> impl IntoView {
    let category = RwSignal::new(None::<FaqCategory>);
    let open_id = RwSignal::new(None::<String>);

    let entries = move || visible_faqs(&faqs.get(), category.get());

    view! {
        <div class="faq-list">
            <Show when=move || with_filter>
                <div class="faq-list__filter">
                    <button
                        class=move || chip_class(category.get().is_none())
                        on:click=move |_| category.set(None)
                    >
                        "All"
                    </button>
                    {FaqCategory::ALL
                        .into_iter()
                        .map(|variant| {
                            view! {
                                <button
                                    class=move || chip_class(category.get() == Some(variant))
                                    on:click=move |_| category.set(Some(variant))
                                >
                                    {variant.label()}
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </Show>
            <ul class="faq-list__items">
                {move || {
                    entries()
                        .into_iter()
                        .map(|faq| {
                            let id = faq.id.clone();
                            let toggle_id = faq.id.clone();
                            let is_open = move || open_id.get().as_deref() == Some(id.as_str());
                            let is_open_class = is_open.clone();
                            view! {
                                <li class=move || {
                                    if is_open_class() { "faq-item faq-item--open" } else { "faq-item" }
                                }>
                                    <button
                                        class="faq-item__question"
                                        on:click=move |_| {
                                            open_id.update(|open| {
                                                if open.as_deref() == Some(toggle_id.as_str()) {
                                                    *open = None;
                                                } else {
                                                    *open = Some(toggle_id.clone());
                                                }
                                            });
                                        }
                                    >
                                        {faq.question}
                                    </button>
                                    <Show when=is_open>
                                        <p class="faq-item__answer">{faq.answer.clone()}</p>
                                    </Show>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </div>
    }
}

fn chip_class(selected: bool) -> &'static str {
    if selected { "chip chip--selected" } else { "chip" }
}
