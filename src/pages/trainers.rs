//! Trainers Page

use leptos::*;

#[component]
pub fn Trainers() -> impl IntoView {
    view! {
        <div class="space-y-4">
            <h1 class="text-2xl font-semibold text-slate-900">"Trainers"</h1>
            <p class="text-sm text-slate-500">
                "Manage your bank of trainers, qualifications and availability."
            </p>
            <div class="rounded-2xl border border-slate-200 bg-white p-6 text-sm text-slate-500">
                "Trainer management coming soon…"
            </div>
        </div>
    }
}
