//! Shared scroll-reveal utility over `IntersectionObserver`.
//!
//! DESIGN
//! ======
//! One observer per call site, created on mount and disconnected on cleanup.
//! The boolean it drives becomes a CSS class on the observed element. If the
//! observer API is unavailable the element simply never reveals; there is no
//! fallback path to coordinate.

#[cfg(test)]
#[path = "scroll_reveal_test.rs"]
mod scroll_reveal_test;

use leptos::html::Div;
use leptos::prelude::*;

/// Options controlling when an element counts as revealed.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealOptions {
    /// Fraction of the element that must intersect the viewport.
    pub threshold: f64,
    /// Margin applied around the viewport root before testing intersection.
    pub root_margin: &'static str,
    /// Once revealed, stay revealed regardless of later exit events.
    pub trigger_once: bool,
}

impl Default for RevealOptions {
    fn default() -> Self {
        Self { threshold: 0.1, root_margin: "0px", trigger_once: true }
    }
}

/// Visibility value after one intersection event.
///
/// With `trigger_once` the value latches: it can transition false→true at
/// most once and never reverts. Without it the value tracks the element's
/// intersection state both ways.
#[must_use]
pub fn next_visible(current: bool, intersecting: bool, trigger_once: bool) -> bool {
    if trigger_once {
        current || intersecting
    } else {
        intersecting
    }
}

/// CSS class list for a revealable element.
#[must_use]
pub fn reveal_class(visible: bool) -> &'static str {
    if visible { "reveal is-visible" } else { "reveal" }
}

/// Observe `node` and drive the returned signal from viewport intersection.
///
/// The observer is created once the node mounts and disconnected when the
/// owning scope is disposed (or as soon as the element reveals, for
/// `trigger_once`).
pub fn use_scroll_reveal(node: NodeRef<Div>, options: RevealOptions) -> RwSignal<bool> {
    let visible = RwSignal::new(false);

    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        Effect::new(move || {
            let Some(element) = node.get() else {
                return;
            };

            let trigger_once = options.trigger_once;
            let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
                move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                        let current = visible.get_untracked();
                        let next = next_visible(current, entry.is_intersecting(), trigger_once);
                        if next != current {
                            visible.set(next);
                        }
                        if next && trigger_once {
                            observer.disconnect();
                        }
                    }
                },
            );

            let init = web_sys::IntersectionObserverInit::new();
            init.set_threshold(&wasm_bindgen::JsValue::from_f64(options.threshold));
            init.set_root_margin(options.root_margin);

            let Ok(observer) = web_sys::IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &init,
            ) else {
                return;
            };
            observer.observe(&element);

            // The closure must outlive the observer; leaking it here is the
            // standard wasm-bindgen pattern for mount-lifetime callbacks.
            callback.forget();
            on_cleanup(move || observer.disconnect());
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (node, options);
    }

    visible
}
