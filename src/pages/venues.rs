//! Venues Page
//!
//! List of training venues. Read-only; venues are maintained elsewhere.

use leptos::*;

use crate::api::types::Venue;
use crate::api::Api;
use crate::components::{ErrorBanner, Loading};
use crate::state::collection::Collection;

#[component]
pub fn Venues() -> impl IntoView {
    let api = use_context::<Api>().expect("Api not found");

    let venues = Collection::<Venue>::new();

    create_effect(move |_| {
        spawn_local(async move { venues.resolve(api.fetch_venues().await) });
    });

    view! {
        <div class="space-y-4">
            <header>
                <h1 class="text-2xl font-semibold text-slate-900">"Venues"</h1>
                <p class="text-sm text-slate-500">
                    "Manage training venues used for your courses."
                </p>
            </header>

            <ErrorBanner message=venues.error />

            <div class="bg-slate-50 border border-slate-200 rounded-2xl overflow-hidden">
                <div class="flex items-center justify-between px-4 py-3 border-b border-slate-200">
                    <h2 class="text-sm font-semibold text-slate-700">
                        "Venues (" {move || venues.items.get().len()} ")"
                    </h2>
                    <input
                        type="text"
                        placeholder="Search venues…"
                        class="px-3 py-1.5 rounded-full border border-slate-300 text-sm"
                    />
                </div>

                {move || {
                    if venues.loading.get() {
                        view! { <Loading label="Loading venues…" /> }.into_view()
                    } else if venues.items.get().is_empty() {
                        view! {
                            <div class="p-6 text-sm text-slate-500">
                                "No venues found."
                            </div>
                        }
                        .into_view()
                    } else {
                        view! { <VenueTable venues=venues.items /> }.into_view()
                    }
                }}
            </div>
        </div>
    }
}

#[component]
fn VenueTable(venues: RwSignal<Vec<Venue>>) -> impl IntoView {
    view! {
        <div class="overflow-x-auto">
            <table class="min-w-full text-sm">
                <thead class="bg-slate-100">
                    <tr>
                        <th class="px-4 py-2 text-left font-semibold text-slate-600">"Venue"</th>
                        <th class="px-4 py-2 text-left font-semibold text-slate-600">"Location"</th>
                        <th class="px-4 py-2 text-left font-semibold text-slate-600">"Address"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-slate-200">
                    {move || {
                        venues.get().into_iter().map(|venue| {
                            let location = venue.location_label();
                            let address = venue.address_label();
                            view! {
                                <tr class="hover:bg-slate-100">
                                    <td class="px-4 py-3">
                                        <div class="font-medium text-slate-900">{venue.name}</div>
                                    </td>
                                    <td class="px-4 py-3 text-slate-700">{location}</td>
                                    <td class="px-4 py-3 text-slate-700">{address}</td>
                                </tr>
                            }
                        }).collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
