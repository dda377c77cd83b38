//! Small numeric tile used on the owner and profile pages.

use leptos::prelude::*;

/// A value over a caption. `tone` selects the value colour modifier.
#[component]
pub fn StatCard(value: Signal<String>, label: &'static str, #[prop(optional)] tone: &'static str) -> impl IntoView {
    let class = if tone.is_empty() {
        "stat-card__value".to_owned()
    } else {
        format!("stat-card__value stat-card__value--{tone}")
    };
    view! {
        <div class="stat-card">
            <div class=class>{move || value.get()}</div>
            <div class="stat-card__label">{label}</div>
        </div>
    }
}
