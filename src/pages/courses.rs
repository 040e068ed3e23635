//! Courses Page
//!
//! Overview of upcoming and recent training courses, plus the
//! template-driven creation panel.

use leptos::*;
use leptos_router::use_navigate;

use crate::api::types::{Course, CourseStatus, CourseTemplate, NewCourse, Venue};
use crate::api::Api;
use crate::components::{ErrorBanner, Loading, StatusBadge};
use crate::state::collection::Collection;

fn today_iso() -> String {
    chrono::Utc::now().date_naive().to_string()
}

#[component]
pub fn Courses() -> impl IntoView {
    let api = use_context::<Api>().expect("Api not found");
    let navigate = use_navigate();

    let courses = Collection::<Course>::new();
    let templates = create_rw_signal(Vec::<CourseTemplate>::new());
    let venues = create_rw_signal(Vec::<Venue>::new());

    let (show_new, set_show_new) = create_signal(false);
    let (creating, set_creating) = create_signal(false);
    let (create_error, set_create_error) = create_signal(None::<String>);

    let (template_id, set_template_id) = create_signal(String::new());
    let (date, set_date) = create_signal(today_iso());
    let (venue_id, set_venue_id) = create_signal(String::new());
    let (trainer, set_trainer) = create_signal(String::new());
    let (capacity, set_capacity) = create_signal("12".to_string());
    let (status, set_status) = create_signal("Planned".to_string());

    // The course list drives the page; templates and venues only feed the
    // creation form, so their failures stay in the console.
    create_effect(move |_| {
        spawn_local(async move { courses.resolve(api.fetch_courses().await) });
        spawn_local(async move {
            match api.fetch_templates().await {
                Ok(list) => {
                    templates.try_set(list);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to load templates: {e}").into())
                }
            }
        });
        spawn_local(async move {
            match api.fetch_venues().await {
                Ok(list) => {
                    venues.try_set(list);
                }
                Err(e) => web_sys::console::error_1(&format!("Failed to load venues: {e}").into()),
            }
        });
    });

    let reset_form = move || {
        set_template_id.set(String::new());
        set_date.set(today_iso());
        set_venue_id.set(String::new());
        set_trainer.set(String::new());
        set_capacity.set("12".to_string());
        set_status.set("Planned".to_string());
        set_create_error.set(None);
    };

    let on_create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_create_error.set(None);

        let date = date.get();
        let Ok(template_id) = template_id.get().parse::<i64>() else {
            set_create_error.set(Some("Template and date are required.".to_string()));
            return;
        };
        if date.is_empty() {
            set_create_error.set(Some("Template and date are required.".to_string()));
            return;
        }

        let payload = NewCourse {
            template_id,
            course_date: date,
            venue_id: venue_id.get().parse::<i64>().ok(),
            trainer: trainer.get(),
            capacity: capacity.get().parse::<i64>().unwrap_or(12).max(1),
            status: status.get(),
        };

        set_creating.set(true);
        spawn_local(async move {
            match api.create_course(&payload).await {
                Ok(created) => {
                    courses.prepend(created);
                    reset_form();
                    set_show_new.set(false);
                }
                Err(e) => {
                    set_create_error.set(Some(e));
                }
            }
            set_creating.set(false);
        });
    };

    view! {
        <div class="space-y-4">
            <header class="flex items-center justify-between gap-4">
                <div>
                    <h1 class="text-2xl font-semibold text-slate-900">"Courses"</h1>
                    <p class="text-sm text-slate-500">
                        "Overview of upcoming and recent training courses."
                    </p>
                </div>

                <button
                    type="button"
                    on:click=move |_| {
                        if !show_new.get() {
                            reset_form();
                        }
                        set_show_new.update(|open| *open = !*open);
                    }
                    class="px-5 py-2 rounded-full bg-blue-600 text-white text-sm font-medium hover:bg-blue-700 transition"
                >
                    "+ New Course"
                </button>
            </header>

            {move || {
                if show_new.get() {
                    view! {
                        <NewCoursePanel
                            templates=templates
                            venues=venues
                            template_id=template_id
                            set_template_id=set_template_id
                            date=date
                            set_date=set_date
                            venue_id=venue_id
                            set_venue_id=set_venue_id
                            trainer=trainer
                            set_trainer=set_trainer
                            capacity=capacity
                            set_capacity=set_capacity
                            status=status
                            set_status=set_status
                            creating=creating
                            create_error=create_error
                            on_create=on_create
                            on_cancel=move || {
                                reset_form();
                                set_show_new.set(false);
                            }
                        />
                    }
                    .into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            <ErrorBanner message=courses.error />

            <div class="bg-slate-50 border border-slate-200 rounded-2xl overflow-hidden">
                <div class="flex items-center justify-between px-4 py-3 border-b border-slate-200">
                    <h2 class="text-sm font-semibold text-slate-700">
                        "Courses (" {move || courses.items.get().len()} ")"
                    </h2>

                    <input
                        type="text"
                        placeholder="Search courses…"
                        class="px-3 py-1.5 rounded-full border border-slate-300 text-sm"
                    />
                </div>

                {move || {
                    if courses.loading.get() {
                        view! { <Loading label="Loading courses…" /> }.into_view()
                    } else if courses.items.get().is_empty() {
                        view! {
                            <div class="p-6 text-sm text-slate-500">
                                "No courses yet. Use \"+ New Course\" to schedule one."
                            </div>
                        }
                        .into_view()
                    } else {
                        let navigate = navigate.clone();
                        view! {
                            <div class="overflow-x-auto">
                                <table class="min-w-full text-sm">
                                    <thead class="bg-slate-100">
                                        <tr>
                                            <th class="px-4 py-2 text-left font-semibold text-slate-600">"Course"</th>
                                            <th class="px-4 py-2 text-left font-semibold text-slate-600">"Dates"</th>
                                            <th class="px-4 py-2 text-left font-semibold text-slate-600">"Trainer"</th>
                                            <th class="px-4 py-2 text-left font-semibold text-slate-600">"Venue"</th>
                                            <th class="px-4 py-2 text-left font-semibold text-slate-600">"Status"</th>
                                        </tr>
                                    </thead>
                                    <tbody class="divide-y divide-slate-200">
                                        {courses.items.get().into_iter().map(|course| {
                                            let navigate = navigate.clone();
                                            let course_id = course.id;
                                            let dates = course.date_label();
                                            view! {
                                                <tr
                                                    class="hover:bg-slate-100 cursor-pointer"
                                                    on:click=move |_| navigate(
                                                        &format!("/courses/{course_id}"),
                                                        Default::default(),
                                                    )
                                                >
                                                    <td class="px-4 py-3">
                                                        <div class="font-medium text-slate-900">{course.title}</div>
                                                        <div class="text-xs text-slate-500">{course.code}</div>
                                                    </td>
                                                    <td class="px-4 py-3 text-slate-700">{dates}</td>
                                                    <td class="px-4 py-3 text-slate-700">{course.trainer_name}</td>
                                                    <td class="px-4 py-3 text-slate-700">{course.venue_name}</td>
                                                    <td class="px-4 py-3">
                                                        <StatusBadge status=course.status />
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
        </div>
    }
}

/// Inline creation panel, pre-filled from a course template.
#[component]
#[allow(clippy::too_many_arguments)]
fn NewCoursePanel(
    templates: RwSignal<Vec<CourseTemplate>>,
    venues: RwSignal<Vec<Venue>>,
    template_id: ReadSignal<String>,
    set_template_id: WriteSignal<String>,
    date: ReadSignal<String>,
    set_date: WriteSignal<String>,
    venue_id: ReadSignal<String>,
    set_venue_id: WriteSignal<String>,
    trainer: ReadSignal<String>,
    set_trainer: WriteSignal<String>,
    capacity: ReadSignal<String>,
    set_capacity: WriteSignal<String>,
    status: ReadSignal<String>,
    set_status: WriteSignal<String>,
    creating: ReadSignal<bool>,
    create_error: ReadSignal<Option<String>>,
    on_create: impl Fn(web_sys::SubmitEvent) + 'static,
    on_cancel: impl Fn() + 'static + Copy,
) -> impl IntoView {
    view! {
        <div class="bg-slate-900/80 border border-slate-800 rounded-2xl px-6 py-5 text-sm text-slate-50 space-y-4">
            <div class="flex items-center justify-between gap-4">
                <div>
                    <h2 class="text-sm font-semibold text-white">"Create new course"</h2>
                    <p class="text-xs text-slate-300">
                        "Use an existing template to quickly build a new course."
                    </p>
                </div>
                <button
                    type="button"
                    on:click=move |_| on_cancel()
                    class="w-8 h-8 inline-flex items-center justify-center rounded-full bg-slate-800 hover:bg-slate-700 text-slate-200 text-lg leading-none"
                >
                    "×"
                </button>
            </div>

            <form class="grid grid-cols-1 md:grid-cols-3 gap-4" on:submit=on_create>
                <div class="flex flex-col gap-1">
                    <label class="text-xs font-medium text-slate-200">"Template"</label>
                    <select
                        class="rounded-lg bg-slate-800 border border-slate-700 px-3 py-2 text-sm text-slate-50"
                        prop:value=move || template_id.get()
                        on:change=move |ev| set_template_id.set(event_target_value(&ev))
                    >
                        <option value="">"Select a template…"</option>
                        {move || {
                            templates.get().into_iter().map(|template| {
                                let label = match &template.provider_type {
                                    Some(provider) => format!("{} – {}", template.name, provider),
                                    None => template.name.clone(),
                                };
                                view! { <option value=template.id.to_string()>{label}</option> }
                            }).collect_view()
                        }}
                    </select>
                </div>

                <div class="flex flex-col gap-1">
                    <label class="text-xs font-medium text-slate-200">"Course date"</label>
                    <input
                        type="date"
                        class="rounded-lg bg-slate-800 border border-slate-700 px-3 py-2 text-sm text-slate-50"
                        prop:value=move || date.get()
                        on:input=move |ev| set_date.set(event_target_value(&ev))
                    />
                </div>

                <div class="flex flex-col gap-1">
                    <label class="text-xs font-medium text-slate-200">"Venue"</label>
                    <select
                        class="rounded-lg bg-slate-800 border border-slate-700 px-3 py-2 text-sm text-slate-50"
                        prop:value=move || venue_id.get()
                        on:change=move |ev| set_venue_id.set(event_target_value(&ev))
                    >
                        <option value="">"No venue yet"</option>
                        {move || {
                            venues.get().into_iter().map(|venue| {
                                let mut label = venue.name.clone();
                                if let Some(city) = &venue.city {
                                    label.push_str(&format!(" – {city}"));
                                }
                                if let Some(postcode) = &venue.postcode {
                                    label.push_str(&format!(" ({postcode})"));
                                }
                                view! { <option value=venue.id.to_string()>{label}</option> }
                            }).collect_view()
                        }}
                    </select>
                </div>

                <div class="flex flex-col gap-1">
                    <label class="text-xs font-medium text-slate-200">"Trainer"</label>
                    <input
                        type="text"
                        class="rounded-lg bg-slate-800 border border-slate-700 px-3 py-2 text-sm text-slate-50"
                        prop:value=move || trainer.get()
                        on:input=move |ev| set_trainer.set(event_target_value(&ev))
                        placeholder="e.g. Ross Stevenson"
                    />
                </div>

                <div class="flex flex-col gap-1">
                    <label class="text-xs font-medium text-slate-200">"Capacity"</label>
                    <input
                        type="number"
                        min="1"
                        class="rounded-lg bg-slate-800 border border-slate-700 px-3 py-2 text-sm text-slate-50"
                        prop:value=move || capacity.get()
                        on:input=move |ev| set_capacity.set(event_target_value(&ev))
                    />
                </div>

                <div class="flex flex-col gap-1">
                    <label class="text-xs font-medium text-slate-200">"Status"</label>
                    <select
                        class="rounded-lg bg-slate-800 border border-slate-700 px-3 py-2 text-sm text-slate-50"
                        prop:value=move || status.get()
                        on:change=move |ev| set_status.set(event_target_value(&ev))
                    >
                        {CourseStatus::ALL.into_iter().map(|option| view! {
                            <option value=option.as_str()>{option.as_str()}</option>
                        }).collect_view()}
                    </select>
                </div>

                <div class="md:col-span-3 flex items-center justify-end gap-3 pt-2">
                    {move || {
                        create_error.get().map(|message| view! {
                            <div class="text-xs text-red-300 mr-auto">{message}</div>
                        })
                    }}

                    <button
                        type="button"
                        on:click=move |_| on_cancel()
                        class="px-4 py-2 rounded-full border border-slate-600 text-xs font-medium text-slate-200 hover:bg-slate-800"
                    >
                        "Cancel"
                    </button>
                    <button
                        type="submit"
                        disabled=move || {
                            creating.get() || template_id.get().is_empty() || date.get().is_empty()
                        }
                        class="px-5 py-2 rounded-full bg-blue-500 text-white text-xs font-semibold hover:bg-blue-600 disabled:opacity-60"
                    >
                        {move || if creating.get() { "Creating…" } else { "Create course" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
