//! Scroll-reveal wrapper around the shared observer utility.

use leptos::html::Div;
use leptos::prelude::*;

use crate::util::scroll_reveal::{RevealOptions, reveal_class, use_scroll_reveal};

/// Wrap a page section so it transitions in the first time it scrolls into
/// view. Sections start hidden via the `reveal` class and gain `is-visible`
/// once the shared observer fires.
#[component]
pub fn Reveal(
    /// Extra classes joined after the reveal classes.
    #[prop(optional)]
    class: &'static str,
    /// Observer options; defaults follow the sitewide reveal contract.
    #[prop(optional)]
    options: Option<RevealOptions>,
    children: Children,
) -> impl IntoView {
    let node: NodeRef<Div> = NodeRef::new();
    let visible = use_scroll_reveal(node, options.unwrap_or_default());

    view! {
        <div
            node_ref=node
            class=move || {
                let base = reveal_class(visible.get());
                if class.is_empty() { base.to_owned() } else { format!("{base} {class}") }
            }
        >
            {children()}
        </div>
    }
}
