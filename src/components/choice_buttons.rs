//! Choice Buttons Component
//!
//! A row of toggle buttons where exactly one value is active. Used for
//! category filters and tab bars.

use leptos::prelude::*;

/// (value, label) pairs
pub type Choices = Vec<(&'static str, &'static str)>;

#[component]
pub fn ChoiceButtons(
    choices: Choices,
    #[prop(into)] current: Signal<String>,
    on_change: impl Fn(String) + Copy + 'static,
    #[prop(default = "choice-row")] class: &'static str,
) -> impl IntoView {
    view! {
        <div class=class role="tablist">
            {choices.into_iter().map(|(value, label)| {
                let is_selected = move || current.get() == value;
                view! {
                    <button
                        class=move || if is_selected() { "choice-btn active" } else { "choice-btn" }
                        on:click=move |_| on_change(value.to_string())
                    >
                        {label}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
