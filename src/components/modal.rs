//! Modal Scaffold
//!
//! Overlay and card shared by the create forms. Closing is up to the
//! buttons the caller renders inside.

use leptos::*;

#[component]
pub fn Modal(
    title: &'static str,
    subtitle: &'static str,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="fixed inset-0 z-20 flex items-center justify-center bg-slate-950/40">
            <div class="w-full max-w-md rounded-2xl bg-white p-5 shadow-xl">
                <div class="mb-4">
                    <h3 class="text-sm font-semibold text-slate-900">{title}</h3>
                    <p class="text-xs text-slate-500">{subtitle}</p>
                </div>
                {children()}
            </div>
        </div>
    }
}
