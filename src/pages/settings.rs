//! Settings Page
//!
//! User accounts and course templates, in two tabs.

use leptos::*;

use crate::api::types::{NewTemplate, NewUser, User, UserRole, UserUpdate};
use crate::api::Api;
use crate::components::{ErrorBanner, Loading, Modal};
use crate::state::collection::Collection;

const TABS: [&str; 2] = ["Users", "Course Templates"];

#[component]
pub fn Settings() -> impl IntoView {
    let (tab, set_tab) = create_signal("Users");

    view! {
        <div class="space-y-6">
            <div>
                <h1 class="text-xl font-semibold text-slate-900">"Settings"</h1>
                <p class="text-sm text-slate-500">
                    "Manage users and course templates for TrainStream."
                </p>
            </div>

            <div class="border-b border-slate-200">
                <nav class="-mb-px flex gap-4 text-sm">
                    {TABS.into_iter().map(|label| view! {
                        <button
                            type="button"
                            on:click=move |_| set_tab.set(label)
                            class=move || {
                                if tab.get() == label {
                                    "px-3 pb-2 border-b-2 text-sm font-medium transition \
                                     border-slate-900 text-slate-900"
                                } else {
                                    "px-3 pb-2 border-b-2 text-sm font-medium transition \
                                     border-transparent text-slate-500 hover:text-slate-900 \
                                     hover:border-slate-300"
                                }
                            }
                        >
                            {label}
                        </button>
                    }).collect_view()}
                </nav>
            </div>

            {move || match tab.get() {
                "Users" => view! { <UsersTab /> }.into_view(),
                _ => view! { <TemplatesTab /> }.into_view(),
            }}
        </div>
    }
}

#[component]
fn UsersTab() -> impl IntoView {
    let api = use_context::<Api>().expect("Api not found");

    let users = Collection::<User>::new();

    create_effect(move |_| {
        spawn_local(async move { users.resolve(api.fetch_users().await) });
    });

    let (show_modal, set_show_modal) = create_signal(false);
    let (creating, set_creating) = create_signal(false);

    let (first_name, set_first_name) = create_signal(String::new());
    let (surname, set_surname) = create_signal(String::new());
    let (role, set_role) = create_signal("Training Admin".to_string());
    let (email, set_email) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());

    let on_create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let first = first_name.get();
        let last = surname.get();
        let password_value = password.get();
        if first.trim().is_empty() || last.trim().is_empty() || password_value.is_empty() {
            users.error.set(Some(
                "First name, surname and an initial password are required.".to_string(),
            ));
            return;
        }

        set_creating.set(true);
        users.error.set(None);

        let payload = NewUser {
            first_name: first,
            surname: last,
            role: role.get(),
            email: {
                let email = email.get();
                if email.is_empty() { None } else { Some(email) }
            },
            password: password_value,
        };

        spawn_local(async move {
            match api.create_user(&payload).await {
                Ok(created) => {
                    users.append(created);
                    set_show_modal.set(false);
                    set_first_name.set(String::new());
                    set_surname.set(String::new());
                    set_role.set("Training Admin".to_string());
                    set_email.set(String::new());
                    set_password.set(String::new());
                }
                Err(e) => users.error.set(Some(e)),
            }
            set_creating.set(false);
        });
    };

    // Unlike the participant toggle, failures here land in the tab's banner.
    let toggle_must_change = move |user: User| {
        let update = UserUpdate {
            must_change_password: Some(!user.must_change_password),
        };
        spawn_local(async move {
            match api.update_user(user.id, &update).await {
                Ok(updated) => users.replace(updated),
                Err(e) => users.error.set(Some(e)),
            }
        });
    };

    view! {
        <div class="space-y-4">
            <div class="flex items-center justify-between gap-4">
                <div>
                    <h2 class="text-sm font-semibold text-slate-900">"Users"</h2>
                    <p class="text-xs text-slate-500">
                        "Control who can log in and what they can do."
                    </p>
                </div>
                <button
                    type="button"
                    on:click=move |_| set_show_modal.set(true)
                    class="inline-flex items-center rounded-lg bg-slate-900 px-3 py-1.5 text-xs font-medium text-white shadow-sm hover:bg-slate-800"
                >
                    "+ Add user"
                </button>
            </div>

            <ErrorBanner message=users.error />

            {move || {
                if users.loading.get() {
                    view! { <Loading label="Loading users…" /> }.into_view()
                } else if users.items.get().is_empty() {
                    view! {
                        <div class="text-sm text-slate-500">
                            "No users yet. Add your first admin or trainer."
                        </div>
                    }
                    .into_view()
                } else {
                    view! {
                        <div class="overflow-hidden rounded-xl border border-slate-200 bg-white">
                            <table class="min-w-full text-left text-sm">
                                <thead class="bg-slate-50 text-xs font-medium text-slate-500 uppercase tracking-wide">
                                    <tr>
                                        <th class="px-4 py-2">"Name"</th>
                                        <th class="px-4 py-2">"Role"</th>
                                        <th class="px-4 py-2">"Email"</th>
                                        <th class="px-4 py-2">"Password status"</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-slate-100">
                                    {users.items.get().into_iter().map(|user| {
                                        let name = user.display_name();
                                        let toggle_label = if user.must_change_password {
                                            "Must change at next login"
                                        } else {
                                            "Password OK"
                                        };
                                        let toggle_class = if user.must_change_password {
                                            "bg-amber-100 text-amber-900"
                                        } else {
                                            "bg-emerald-100 text-emerald-900"
                                        };
                                        let for_toggle = user.clone();
                                        view! {
                                            <tr class="text-xs text-slate-700">
                                                <td class="px-4 py-2">
                                                    <div class="font-medium">{name}</div>
                                                </td>
                                                <td class="px-4 py-2">{user.role.clone()}</td>
                                                <td class="px-4 py-2">
                                                    {match user.email.clone() {
                                                        Some(email) => view! { <span>{email}</span> }.into_view(),
                                                        None => view! {
                                                            <span class="text-slate-400 italic">"No email"</span>
                                                        }.into_view(),
                                                    }}
                                                </td>
                                                <td class="px-4 py-2">
                                                    <button
                                                        type="button"
                                                        on:click=move |_| toggle_must_change(for_toggle.clone())
                                                        class=format!(
                                                            "inline-flex items-center rounded-full px-3 py-1 text-[11px] font-medium {toggle_class}"
                                                        )
                                                    >
                                                        {toggle_label}
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

            {move || {
                if show_modal.get() {
                    view! {
                        <Modal
                            title="Add new user"
                            subtitle="Create an account for an admin, training admin, or trainer."
                        >
                            <form on:submit=on_create class="space-y-3 text-sm">
                                <div class="grid grid-cols-2 gap-3">
                                    <div>
                                        <label class="block text-xs font-medium text-slate-600 mb-1">
                                            "First name"
                                        </label>
                                        <input
                                            class="w-full rounded-lg border border-slate-200 px-2.5 py-1.5 text-sm focus:outline-none focus:ring-2 focus:ring-slate-900 focus:border-transparent"
                                            prop:value=move || first_name.get()
                                            on:input=move |ev| set_first_name.set(event_target_value(&ev))
                                        />
                                    </div>
                                    <div>
                                        <label class="block text-xs font-medium text-slate-600 mb-1">
                                            "Surname"
                                        </label>
                                        <input
                                            class="w-full rounded-lg border border-slate-200 px-2.5 py-1.5 text-sm focus:outline-none focus:ring-2 focus:ring-slate-900 focus:border-transparent"
                                            prop:value=move || surname.get()
                                            on:input=move |ev| set_surname.set(event_target_value(&ev))
                                        />
                                    </div>
                                </div>

                                <div class="grid grid-cols-2 gap-3">
                                    <div>
                                        <label class="block text-xs font-medium text-slate-600 mb-1">
                                            "Role"
                                        </label>
                                        <select
                                            class="w-full rounded-lg border border-slate-200 px-2.5 py-1.5 text-sm bg-white focus:outline-none focus:ring-2 focus:ring-slate-900 focus:border-transparent"
                                            prop:value=move || role.get()
                                            on:change=move |ev| set_role.set(event_target_value(&ev))
                                        >
                                            {UserRole::ALL.into_iter().map(|option| view! {
                                                <option value=option.as_str()>{option.as_str()}</option>
                                            }).collect_view()}
                                        </select>
                                    </div>
                                    <div>
                                        <label class="block text-xs font-medium text-slate-600 mb-1">
                                            "Email (optional)"
                                        </label>
                                        <input
                                            type="email"
                                            placeholder="name@company.com"
                                            class="w-full rounded-lg border border-slate-200 px-2.5 py-1.5 text-sm focus:outline-none focus:ring-2 focus:ring-slate-900 focus:border-transparent"
                                            prop:value=move || email.get()
                                            on:input=move |ev| set_email.set(event_target_value(&ev))
                                        />
                                    </div>
                                </div>

                                <div>
                                    <label class="block text-xs font-medium text-slate-600 mb-1">
                                        "Initial password"
                                    </label>
                                    <input
                                        type="password"
                                        class="w-full rounded-lg border border-slate-200 px-2.5 py-1.5 text-sm focus:outline-none focus:ring-2 focus:ring-slate-900 focus:border-transparent"
                                        prop:value=move || password.get()
                                        on:input=move |ev| set_password.set(event_target_value(&ev))
                                    />
                                    <p class="mt-1 text-[11px] text-slate-500">
                                        "User will be asked to change this at first login."
                                    </p>
                                </div>

                                <div class="flex justify-end gap-2 pt-2">
                                    <button
                                        type="button"
                                        on:click=move |_| set_show_modal.set(false)
                                        class="px-3 py-1.5 rounded-lg text-xs font-medium text-slate-600 hover:bg-slate-100"
                                    >
                                        "Cancel"
                                    </button>
                                    <button
                                        type="submit"
                                        disabled=move || creating.get()
                                        class="px-4 py-1.5 rounded-lg text-xs font-medium bg-slate-900 text-white hover:bg-slate-800 disabled:opacity-60"
                                    >
                                        {move || if creating.get() { "Creating…" } else { "Create user" }}
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
}

#[component]
fn TemplatesTab() -> impl IntoView {
    let api = use_context::<Api>().expect("Api not found");

    let templates = Collection::new();

    create_effect(move |_| {
        spawn_local(async move { templates.resolve(api.fetch_templates().await) });
    });

    let (show_modal, set_show_modal) = create_signal(false);
    let (saving, set_saving) = create_signal(false);

    let (name, set_name) = create_signal(String::new());
    let (course_type, set_course_type) = create_signal(String::new());
    let (course_title, set_course_title) = create_signal(String::new());
    let (provider_type, set_provider_type) = create_signal("Qualsafe".to_string());
    let (default_capacity, set_default_capacity) = create_signal(String::new());
    let (validity_months, set_validity_months) = create_signal(String::new());
    let (cpd_hours, set_cpd_hours) = create_signal(String::new());

    let on_create = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let name_value = name.get();
        if name_value.trim().is_empty() {
            templates
                .error
                .set(Some("Template name is required.".to_string()));
            return;
        }

        set_saving.set(true);
        templates.error.set(None);

        let optional = |value: String| if value.is_empty() { None } else { Some(value) };
        let payload = NewTemplate {
            name: name_value,
            course_type: optional(course_type.get()),
            course_title: optional(course_title.get()),
            provider_type: optional(provider_type.get()),
            default_capacity: default_capacity.get().parse().ok(),
            validity_months: validity_months.get().parse().ok(),
            cpd_hours: cpd_hours.get().parse().ok(),
        };

        spawn_local(async move {
            match api.create_template(&payload).await {
                Ok(created) => {
                    templates.append(created);
                    set_show_modal.set(false);
                    set_name.set(String::new());
                    set_course_type.set(String::new());
                    set_course_title.set(String::new());
                    set_provider_type.set("Qualsafe".to_string());
                    set_default_capacity.set(String::new());
                    set_validity_months.set(String::new());
                    set_cpd_hours.set(String::new());
                }
                Err(e) => templates.error.set(Some(e)),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="space-y-4">
            <div class="flex items-center justify-between gap-4">
                <div>
                    <h2 class="text-sm font-semibold text-slate-900">"Course templates"</h2>
                    <p class="text-xs text-slate-500">
                        "Pre-configure FREC, EFAW and other common courses."
                    </p>
                </div>
                <button
                    type="button"
                    on:click=move |_| set_show_modal.set(true)
                    class="inline-flex items-center rounded-lg bg-slate-900 px-3 py-1.5 text-xs font-medium text-white shadow-sm hover:bg-slate-800"
                >
                    "+ Add template"
                </button>
            </div>

            <ErrorBanner message=templates.error />

            {move || {
                if templates.loading.get() {
                    view! { <Loading label="Loading templates…" /> }.into_view()
                } else if templates.items.get().is_empty() {
                    view! {
                        <div class="text-sm text-slate-500">
                            "No templates yet. Add your first FREC / EFAW template above."
                        </div>
                    }
                    .into_view()
                } else {
                    view! {
                        <div class="overflow-hidden rounded-xl border border-slate-200 bg-white">
                            <table class="min-w-full text-left text-sm">
                                <thead class="bg-slate-50 text-xs font-medium text-slate-500 uppercase tracking-wide">
                                    <tr>
                                        <th class="px-4 py-2">"Name"</th>
                                        <th class="px-4 py-2">"Course title"</th>
                                        <th class="px-4 py-2">"Provider"</th>
                                        <th class="px-4 py-2">"Capacity"</th>
                                        <th class="px-4 py-2">"Validity (months)"</th>
                                        <th class="px-4 py-2">"CPD hours"</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-slate-100 text-xs text-slate-700">
                                    {templates.items.get().into_iter().map(|template| view! {
                                        <tr>
                                            <td class="px-4 py-2 font-medium">{template.name.clone()}</td>
                                            <td class="px-4 py-2">
                                                <OptionalCell value=template.course_title.clone() fallback="Not set" />
                                            </td>
                                            <td class="px-4 py-2">
                                                <OptionalCell value=template.provider_type.clone() fallback="-" />
                                            </td>
                                            <td class="px-4 py-2">
                                                <OptionalCell value=template.default_capacity.map(|n| n.to_string()) fallback="-" />
                                            </td>
                                            <td class="px-4 py-2">
                                                <OptionalCell value=template.validity_months.map(|n| n.to_string()) fallback="-" />
                                            </td>
                                            <td class="px-4 py-2">
                                                <OptionalCell value=template.cpd_hours.map(|n| n.to_string()) fallback="-" />
                                            </td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                        </div>
                    }
                    .into_view()
                }
            }}

            {move || {
                if show_modal.get() {
                    view! {
                        <Modal
                            title="Add course template"
                            subtitle="Save a reusable template for common courses like FREC or EFAW."
                        >
                            <form on:submit=on_create class="space-y-3 text-sm">
                                <div>
                                    <label class="block text-xs font-medium text-slate-600 mb-1">
                                        "Template name"
                                    </label>
                                    <input
                                        placeholder="FREC 3 (5-day)"
                                        class="w-full rounded-lg border border-slate-200 px-2.5 py-1.5 text-sm focus:outline-none focus:ring-2 focus:ring-slate-900 focus:border-transparent"
                                        prop:value=move || name.get()
                                        on:input=move |ev| set_name.set(event_target_value(&ev))
                                    />
                                </div>

                                <div class="grid grid-cols-2 gap-3">
                                    <div>
                                        <label class="block text-xs font-medium text-slate-600 mb-1">
                                            "Course type (internal)"
                                        </label>
                                        <input
                                            placeholder="FREC3 / EFAW / MHFA…"
                                            class="w-full rounded-lg border border-slate-200 px-2.5 py-1.5 text-sm focus:outline-none focus:ring-2 focus:ring-slate-900 focus:border-transparent"
                                            prop:value=move || course_type.get()
                                            on:input=move |ev| set_course_type.set(event_target_value(&ev))
                                        />
                                    </div>
                                    <div>
                                        <label class="block text-xs font-medium text-slate-600 mb-1">
                                            "Course title (learner-facing)"
                                        </label>
                                        <input
                                            placeholder="QA L3 Award in First Response Emergency Care"
                                            class="w-full rounded-lg border border-slate-200 px-2.5 py-1.5 text-sm focus:outline-none focus:ring-2 focus:ring-slate-900 focus:border-transparent"
                                            prop:value=move || course_title.get()
                                            on:input=move |ev| set_course_title.set(event_target_value(&ev))
                                        />
                                    </div>
                                </div>

                                <div class="grid grid-cols-2 gap-3">
                                    <div>
                                        <label class="block text-xs font-medium text-slate-600 mb-1">
                                            "Provider"
                                        </label>
                                        <select
                                            class="w-full rounded-lg border border-slate-200 px-2.5 py-1.5 text-sm bg-white focus:outline-none focus:ring-2 focus:ring-slate-900 focus:border-transparent"
                                            prop:value=move || provider_type.get()
                                            on:change=move |ev| set_provider_type.set(event_target_value(&ev))
                                        >
                                            <option value="Qualsafe">"Qualsafe"</option>
                                            <option value="CPDSO">"CPDSO"</option>
                                            <option value="In-house">"In-house"</option>
                                            <option value="Other">"Other"</option>
                                        </select>
                                    </div>
                                    <div>
                                        <label class="block text-xs font-medium text-slate-600 mb-1">
                                            "Default capacity"
                                        </label>
                                        <input
                                            type="number"
                                            min="1"
                                            placeholder="6"
                                            class="w-full rounded-lg border border-slate-200 px-2.5 py-1.5 text-sm focus:outline-none focus:ring-2 focus:ring-slate-900 focus:border-transparent"
                                            prop:value=move || default_capacity.get()
                                            on:input=move |ev| set_default_capacity.set(event_target_value(&ev))
                                        />
                                    </div>
                                </div>

                                <div class="grid grid-cols-2 gap-3">
                                    <div>
                                        <label class="block text-xs font-medium text-slate-600 mb-1">
                                            "Validity (months)"
                                        </label>
                                        <input
                                            type="number"
                                            min="0"
                                            placeholder="36"
                                            class="w-full rounded-lg border border-slate-200 px-2.5 py-1.5 text-sm focus:outline-none focus:ring-2 focus:ring-slate-900 focus:border-transparent"
                                            prop:value=move || validity_months.get()
                                            on:input=move |ev| set_validity_months.set(event_target_value(&ev))
                                        />
                                    </div>
                                    <div>
                                        <label class="block text-xs font-medium text-slate-600 mb-1">
                                            "CPD hours"
                                        </label>
                                        <input
                                            type="number"
                                            min="0"
                                            step="0.5"
                                            placeholder="35"
                                            class="w-full rounded-lg border border-slate-200 px-2.5 py-1.5 text-sm focus:outline-none focus:ring-2 focus:ring-slate-900 focus:border-transparent"
                                            prop:value=move || cpd_hours.get()
                                            on:input=move |ev| set_cpd_hours.set(event_target_value(&ev))
                                        />
                                    </div>
                                </div>

                                <div class="flex justify-end gap-2 pt-2">
                                    <button
                                        type="button"
                                        on:click=move |_| set_show_modal.set(false)
                                        class="px-3 py-1.5 rounded-lg text-xs font-medium text-slate-600 hover:bg-slate-100"
                                    >
                                        "Cancel"
                                    </button>
                                    <button
                                        type="submit"
                                        disabled=move || saving.get()
                                        class="px-4 py-1.5 rounded-lg text-xs font-medium bg-slate-900 text-white hover:bg-slate-800 disabled:opacity-60"
                                    >
                                        {move || if saving.get() { "Saving…" } else { "Create template" }}
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
}

/// Table cell rendering an optional value with an italic fallback.
#[component]
fn OptionalCell(value: Option<String>, fallback: &'static str) -> impl IntoView {
    match value {
        Some(value) => view! { <span>{value}</span> }.into_view(),
        None => view! { <span class="text-slate-400 italic">{fallback}</span> }.into_view(),
    }
}
