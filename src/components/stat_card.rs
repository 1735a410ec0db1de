//! Statistic card

use leptos::prelude::*;

/// Headline number with a label
#[component]
pub fn StatCard(
    #[prop(into)] value: Signal<String>,
    #[prop(into)] label: String,
    #[prop(optional, into)] detail: Option<Signal<String>>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-value">{move || value.get()}</div>
            <div class="stat-label">{label}</div>
            {detail.map(|detail| view! { <div class="stat-detail">{move || detail.get()}</div> })}
        </div>
    }
}
