//! Search input shared by the admin list screens.
//!
//! The bound query feeds `ListEditor::search` on every keystroke; filtering
//! is cheap enough that there is no debouncing.

use leptos::prelude::*;

#[component]
pub fn SearchBar(
    query: RwSignal<String>,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() { "Search..." } else { placeholder };

    view! {
        <div class="admin-search">
            <input
                class="admin-search__input"
                type="search"
                placeholder=placeholder
                prop:value=move || query.get()
                on:input=move |ev| query.set(event_target_value(&ev))
            />
        </div>
    }
}
