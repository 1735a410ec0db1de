//! Two-step action button
//!
//! The first click arms the button and shows a prompt naming the record;
//! the action runs only on the second, explicit confirmation.

use leptos::prelude::*;

#[component]
pub fn ConfirmButton(
    #[prop(into)] label: String,
    /// Shown while armed, e.g. "Remove Gaten Nature Park?"
    #[prop(into)]
    prompt: String,
    #[prop(default = "btn btn-ghost btn-sm")] class: &'static str,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let armed = RwSignal::new(false);

    view! {
        <Show
            when=move || armed.get()
            fallback=move || view! {
                <button class=class on:click=move |_| armed.set(true)>{label.clone()}</button>
            }
        >
            <span class="delete-confirm" role="alertdialog">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button
                    class="confirm-btn"
                    title="Confirm"
                    on:click=move |_| {
                        armed.set(false);
                        on_confirm.run(());
                    }
                >
                    "✓"
                </button>
                <button class="cancel-btn" title="Cancel" on:click=move |_| armed.set(false)>"✗"</button>
            </span>
        </Show>
    }
}
