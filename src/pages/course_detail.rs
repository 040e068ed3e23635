//! Course Detail Page
//!
//! Course header plus the participant roster. The two fetches are scoped by
//! the course id and complete in either order; neither waits for the other.

use leptos::*;
use leptos_router::{use_navigate, use_params_map};

use crate::api::types::{Course, NewParticipant, Participant, ParticipantUpdate};
use crate::api::Api;
use crate::components::badge::status_pill;
use crate::components::{ErrorBanner, Loading, Modal, PaymentBadge};
use crate::state::collection::{Collection, Record};

#[component]
pub fn CourseDetail() -> impl IntoView {
    let api = use_context::<Api>().expect("Api not found");
    let navigate = use_navigate();
    let params = use_params_map();

    let course_id = params.with_untracked(|params| {
        params.get("id").and_then(|id| id.parse::<i64>().ok())
    });

    let Some(course_id) = course_id else {
        let navigate = navigate.clone();
        return view! {
            <div class="text-sm text-slate-500">
                "Invalid course ID. "
                <button
                    on:click=move |_| navigate("/courses", Default::default())
                    class="text-slate-900 underline"
                >
                    "Back to courses"
                </button>
            </div>
        }
        .into_view();
    };

    let course = Record::<Course>::new();
    let participants = Collection::<Participant>::new();

    create_effect(move |_| {
        spawn_local(async move { course.resolve(api.fetch_course(course_id).await) });
        spawn_local(async move {
            participants.resolve(api.fetch_participants(course_id).await)
        });
    });

    let (show_add, set_show_add) = create_signal(false);
    let (saving, set_saving) = create_signal(false);

    let (first_name, set_first_name) = create_signal(String::new());
    let (surname, set_surname) = create_signal(String::new());
    let (email, set_email) = create_signal(String::new());
    let (contact, set_contact) = create_signal(String::new());
    let (payment_status, set_payment_status) = create_signal("Unpaid".to_string());
    let (notes, set_notes) = create_signal(String::new());

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let first = first_name.get();
        let last = surname.get();
        if first.trim().is_empty() || last.trim().is_empty() {
            participants
                .error
                .set(Some("First name and surname are required.".to_string()));
            return;
        }

        set_saving.set(true);
        participants.error.set(None);

        let payload = NewParticipant {
            first_name: first,
            surname: last,
            email: non_empty(email.get()),
            contact_number: non_empty(contact.get()),
            payment_status: non_empty(payment_status.get()),
            notes: non_empty(notes.get()),
            joining_sent: false,
        };

        spawn_local(async move {
            match api.create_participant(course_id, &payload).await {
                Ok(created) => {
                    participants.append(created);
                    set_show_add.set(false);
                    set_first_name.set(String::new());
                    set_surname.set(String::new());
                    set_email.set(String::new());
                    set_contact.set(String::new());
                    set_payment_status.set("Unpaid".to_string());
                    set_notes.set(String::new());
                }
                Err(e) => participants.error.set(Some(e)),
            }
            set_saving.set(false);
        });
    };

    let toggle_joining = move |participant: Participant| {
        let update = ParticipantUpdate {
            joining_sent: Some(!participant.joining_sent),
            ..Default::default()
        };
        spawn_local(async move {
            match api.update_participant(participant.id, &update).await {
                Ok(updated) => participants.replace(updated),
                // Failures stay in the console; the roster keeps its
                // previous state.
                Err(e) => web_sys::console::error_1(&wasm_bindgen::JsValue::from_str(
                    &format!("Failed to update participant: {e}"),
                )),
            }
        });
    };

    let delete_participant = move |participant: Participant| {
        let prompt = format!(
            "Remove {} {} from this course?",
            participant.first_name, participant.surname
        );
        let confirmed = web_sys::window()
            .and_then(|window| window.confirm_with_message(&prompt).ok())
            .unwrap_or(false);
        if !confirmed {
            return;
        }

        spawn_local(async move {
            match api.delete_participant(participant.id).await {
                Ok(()) => participants.remove(participant.id),
                Err(e) => web_sys::console::error_1(
                    &format!("Failed to delete participant: {e}").into(),
                ),
            }
        });
    };

    view! {
        <div class="space-y-6">
            <div class="flex items-center justify-between gap-4">
                <div>
                    <button
                        on:click=move |_| navigate("/courses", Default::default())
                        class="text-xs text-slate-500 hover:text-slate-800"
                    >
                        "← Back to courses"
                    </button>
                    <h1 class="mt-1 text-xl font-semibold text-slate-900">
                        {move || {
                            if course.loading.get() {
                                "Loading course…".to_string()
                            } else {
                                course
                                    .value
                                    .get()
                                    .map(|c| c.title)
                                    .filter(|title| !title.is_empty())
                                    .unwrap_or_else(|| "Course detail".to_string())
                            }
                        }}
                    </h1>
                    {move || {
                        course.value.get().map(|c| {
                            let provider = c
                                .provider_type
                                .unwrap_or_else(|| "Provider not set".to_string());
                            let label = match c.course_type {
                                Some(course_type) => format!("{course_type} • {provider}"),
                                None => provider,
                            };
                            view! { <p class="text-xs text-slate-500">{label}</p> }
                        })
                    }}
                </div>

                <div class="flex flex-col items-end gap-1 text-xs text-slate-500">
                    {move || {
                        course.value.get().map(|c| {
                            let (label, class) = status_pill(&c.status);
                            let start = c
                                .start_date
                                .unwrap_or_else(|| "Start date not set".to_string());
                            let end = c.end_date.map(|end| format!(" → {end}"));
                            view! {
                                <span class=format!(
                                    "inline-flex items-center rounded-full px-2 py-0.5 text-[11px] font-medium {class}"
                                )>
                                    {label}
                                </span>
                                <div>{start}{end}</div>
                            }
                        })
                    }}
                </div>
            </div>

            <ErrorBanner message=course.error />

            {move || {
                course.value.get().map(|c| {
                    let venue = if c.venue_name.is_empty() {
                        "Not set".to_string()
                    } else {
                        c.venue_name
                    };
                    let trainer = if c.trainer_name.is_empty() {
                        "Not assigned".to_string()
                    } else {
                        c.trainer_name
                    };
                    let capacity = c
                        .capacity
                        .map(|n| n.to_string())
                        .unwrap_or_else(|| "-".to_string());
                    view! {
                        <div class="grid grid-cols-1 md:grid-cols-3 gap-4">
                            <InfoCard label="Venue" value=venue />
                            <InfoCard label="Trainer" value=trainer />
                            <InfoCard label="Capacity" value=format!("{capacity} learners") />
                        </div>
                    }
                })
            }}

            <div class="rounded-2xl border border-slate-200 bg-white p-4 space-y-3">
                <div class="flex items-center justify-between gap-4">
                    <div>
                        <h2 class="text-sm font-semibold text-slate-900">"Participants"</h2>
                        <p class="text-xs text-slate-500">
                            "Manage learners registered on this course."
                        </p>
                    </div>
                    <button
                        type="button"
                        on:click=move |_| set_show_add.set(true)
                        class="inline-flex items-center rounded-lg bg-slate-900 px-3 py-1.5 text-xs font-medium text-white shadow-sm hover:bg-slate-800"
                    >
                        "+ Add participant"
                    </button>
                </div>

                <ErrorBanner message=participants.error />

                {move || {
                    if participants.loading.get() {
                        view! { <Loading label="Loading participants…" /> }.into_view()
                    } else if participants.items.get().is_empty() {
                        view! {
                            <div class="text-sm text-slate-500">
                                "No participants yet. Use \"Add participant\" to get started."
                            </div>
                        }
                        .into_view()
                    } else {
                        view! {
                            <div class="overflow-x-auto">
                                <table class="min-w-full text-left text-sm">
                                    <thead class="bg-slate-50 text-xs font-medium text-slate-500 uppercase tracking-wide">
                                        <tr>
                                            <th class="px-3 py-2">"Name"</th>
                                            <th class="px-3 py-2">"Contact"</th>
                                            <th class="px-3 py-2">"Payment"</th>
                                            <th class="px-3 py-2">"Joining instructions"</th>
                                            <th class="px-3 py-2">"Notes"</th>
                                            <th class="px-3 py-2"></th>
                                        </tr>
                                    </thead>
                                    <tbody class="divide-y divide-slate-100 text-xs text-slate-700">
                                        {participants.items.get().into_iter().map(|participant| {
                                            let joining_label = if participant.joining_sent {
                                                "Sent"
                                            } else {
                                                "Not sent"
                                            };
                                            let joining_class = if participant.joining_sent {
                                                "bg-emerald-100 text-emerald-800"
                                            } else {
                                                "bg-slate-100 text-slate-600"
                                            };
                                            let for_toggle = participant.clone();
                                            let for_delete = participant.clone();
                                            view! {
                                                <tr>
                                                    <td class="px-3 py-2">
                                                        <div class="font-medium">
                                                            {format!(
                                                                "{} {}",
                                                                participant.first_name,
                                                                participant.surname,
                                                            )}
                                                        </div>
                                                    </td>
                                                    <td class="px-3 py-2">
                                                        <div class="space-y-0.5">
                                                            {participant.email.clone().map(|email| view! {
                                                                <div class="text-slate-700">{email}</div>
                                                            })}
                                                            {participant.contact_number.clone().map(|number| view! {
                                                                <div class="text-slate-500">{number}</div>
                                                            })}
                                                        </div>
                                                    </td>
                                                    <td class="px-3 py-2">
                                                        <PaymentBadge status=participant.payment_status.clone() />
                                                    </td>
                                                    <td class="px-3 py-2">
                                                        <button
                                                            type="button"
                                                            on:click=move |_| toggle_joining(for_toggle.clone())
                                                            class=format!(
                                                                "inline-flex items-center rounded-full px-3 py-0.5 text-[11px] font-medium {joining_class}"
                                                            )
                                                        >
                                                            {joining_label}
                                                        </button>
                                                    </td>
                                                    <td class="px-3 py-2 max-w-xs">
                                                        {match participant.notes.clone() {
                                                            Some(notes) => view! { <span>{notes}</span> }.into_view(),
                                                            None => view! {
                                                                <span class="text-slate-400 italic">"-"</span>
                                                            }.into_view(),
                                                        }}
                                                    </td>
                                                    <td class="px-3 py-2 text-right">
                                                        <button
                                                            type="button"
                                                            on:click=move |_| delete_participant(for_delete.clone())
                                                            class="text-[11px] text-slate-400 hover:text-red-500"
                                                        >
                                                            "Remove"
                                                        </button>
                                                    </td>
                                                </tr>
                                            }
                                        }).collect_view()}
                                    </tbody>
                                </table>
                            </div>
                        }
                        .into_view()
                    }
                }}
            </div>

            {move || {
                if show_add.get() {
                    view! {
                        <Modal
                            title="Add participant"
                            subtitle="Add a learner to this course. You can send joining instructions later."
                        >
                            <form on:submit=on_add class="space-y-3 text-sm">
                                <div class="grid grid-cols-2 gap-3">
                                    <Field label="First name">
                                        <input
                                            class="w-full rounded-lg border border-slate-200 px-2.5 py-1.5 text-sm focus:outline-none focus:ring-2 focus:ring-slate-900 focus:border-transparent"
                                            prop:value=move || first_name.get()
                                            on:input=move |ev| set_first_name.set(event_target_value(&ev))
                                        />
                                    </Field>
                                    <Field label="Surname">
                                        <input
                                            class="w-full rounded-lg border border-slate-200 px-2.5 py-1.5 text-sm focus:outline-none focus:ring-2 focus:ring-slate-900 focus:border-transparent"
                                            prop:value=move || surname.get()
                                            on:input=move |ev| set_surname.set(event_target_value(&ev))
                                        />
                                    </Field>
                                </div>

                                <div class="grid grid-cols-2 gap-3">
                                    <Field label="Email (optional)">
                                        <input
                                            type="email"
                                            class="w-full rounded-lg border border-slate-200 px-2.5 py-1.5 text-sm focus:outline-none focus:ring-2 focus:ring-slate-900 focus:border-transparent"
                                            prop:value=move || email.get()
                                            on:input=move |ev| set_email.set(event_target_value(&ev))
                                        />
                                    </Field>
                                    <Field label="Contact number (optional)">
                                        <input
                                            class="w-full rounded-lg border border-slate-200 px-2.5 py-1.5 text-sm focus:outline-none focus:ring-2 focus:ring-slate-900 focus:border-transparent"
                                            prop:value=move || contact.get()
                                            on:input=move |ev| set_contact.set(event_target_value(&ev))
                                        />
                                    </Field>
                                </div>

                                <Field label="Payment status">
                                    <select
                                        class="w-full rounded-lg border border-slate-200 px-2.5 py-1.5 text-sm bg-white focus:outline-none focus:ring-2 focus:ring-slate-900 focus:border-transparent"
                                        prop:value=move || payment_status.get()
                                        on:change=move |ev| set_payment_status.set(event_target_value(&ev))
                                    >
                                        <option value="Unpaid">"Unpaid"</option>
                                        <option value="Paid">"Paid"</option>
                                        <option value="Invoiced">"Invoiced"</option>
                                    </select>
                                </Field>

                                <Field label="Notes (optional)">
                                    <textarea
                                        rows="3"
                                        class="w-full rounded-lg border border-slate-200 px-2.5 py-1.5 text-sm focus:outline-none focus:ring-2 focus:ring-slate-900 focus:border-transparent"
                                        prop:value=move || notes.get()
                                        on:input=move |ev| set_notes.set(event_target_value(&ev))
                                    ></textarea>
                                </Field>

                                <div class="flex justify-end gap-2 pt-2">
                                    <button
                                        type="button"
                                        on:click=move |_| set_show_add.set(false)
                                        class="px-3 py-1.5 rounded-lg text-xs font-medium text-slate-600 hover:bg-slate-100"
                                    >
                                        "Cancel"
                                    </button>
                                    <button
                                        type="submit"
                                        disabled=move || saving.get()
                                        class="px-4 py-1.5 rounded-lg text-xs font-medium bg-slate-900 text-white hover:bg-slate-800 disabled:opacity-60"
                                    >
                                        {move || if saving.get() { "Adding…" } else { "Add participant" }}
                                    </button>
                                </div>
                            </form>
                        </Modal>
                    }
                    .into_view()
                } else {
                    view! {}.into_view()
                }
            }}
        </div>
    }
    .into_view()
}

fn non_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

#[component]
fn InfoCard(label: &'static str, #[prop(into)] value: String) -> impl IntoView {
    view! {
        <div class="rounded-xl border border-slate-200 bg-white p-4">
            <div class="text-xs font-medium text-slate-500 uppercase mb-1">{label}</div>
            <div class="text-sm text-slate-900">{value}</div>
        </div>
    }
}

#[component]
fn Field(label: &'static str, children: Children) -> impl IntoView {
    view! {
        <div>
            <label class="block text-xs font-medium text-slate-600 mb-1">{label}</label>
            {children()}
        </div>
    }
}
