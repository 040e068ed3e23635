//! Loading Component

use leptos::*;

/// Padded placeholder shown while a list fetch is pending.
#[component]
pub fn Loading(#[prop(into)] label: String) -> impl IntoView {
    view! {
        <div class="p-6 text-sm text-slate-500">{label}</div>
    }
}
