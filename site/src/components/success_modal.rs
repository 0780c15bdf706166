//! Modal shown after a form submission succeeds.

use leptos::prelude::*;

#[component]
pub fn SuccessModal(
    title: &'static str,
    message: &'static str,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--success" on:click=move |ev| ev.stop_propagation()>
                <h2>{title}</h2>
                <p>{message}</p>
                <div class="dialog__actions">
                    <button class="btn btn--primary" on:click=move |_| on_close.run(())>
                        "Close"
                    </button>
                </div>
            </div>
        </div>
    }
}
