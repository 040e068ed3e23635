//! Dashboard Page
//!
//! High-level overview of the training pipeline.

use leptos::*;

#[component]
pub fn Dashboard() -> impl IntoView {
    view! {
        <div class="space-y-4">
            <h1 class="text-2xl font-semibold text-slate-900">"Dashboard"</h1>
            <p class="text-sm text-slate-500">
                "High-level overview of your training pipeline. Stats, charts and \
                 upcoming courses will land here."
            </p>
            <div class="grid gap-4 md:grid-cols-3">
                <StatCard label="Courses this month" value="5" />
                <StatCard label="Learners booked" value="36" />
                <StatCard label="Trainers active" value="4" />
            </div>
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, value: &'static str) -> impl IntoView {
    view! {
        <div class="rounded-2xl border border-slate-200 bg-white p-4">
            <div class="text-xs font-medium text-slate-500">{label}</div>
            <div class="mt-2 text-3xl font-semibold text-slate-900">{value}</div>
        </div>
    }
}
