//! Error Banner
//!
//! Inline red banner rendered next to the section whose fetch failed.
//! There is no toast layer; every failure stays with its data.

use leptos::*;

#[component]
pub fn ErrorBanner(#[prop(into)] message: Signal<Option<String>>) -> impl IntoView {
    view! {
        {move || {
            message.get().map(|message| view! {
                <div class="text-xs text-red-600 bg-red-50 border border-red-200 rounded-lg px-3 py-2">
                    {message}
                </div>
            })
        }}
    }
}
