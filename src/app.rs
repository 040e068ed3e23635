//! App Root Component
//!
//! Authentication gate, application shell, and route table.

use leptos::*;
use leptos_router::*;

use crate::api::Api;
use crate::pages::{CourseDetail, Courses, Dashboard, Login, Settings, Trainers, Venues};
use crate::state::session::SessionStore;

const NAV_ITEMS: [(&str, &str); 5] = [
    ("/", "Dashboard"),
    ("/courses", "Courses"),
    ("/trainers", "Trainers"),
    ("/venues", "Venues"),
    ("/settings", "Settings"),
];

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Restore any stored session and share it with the gate, the shell, and
    // the API client.
    let session = SessionStore::restore();
    provide_context(session);
    provide_context(Api::new(session));

    view! {
        <Router>
            <Gate />
        </Router>
    }
}

/// Authentication gate. Re-evaluated on every session or location change:
/// signed-out visitors are pushed to the login screen, signed-in visitors
/// are pushed off it.
#[component]
fn Gate() -> impl IntoView {
    let session = use_context::<SessionStore>().expect("SessionStore not found");
    let location = use_location();

    move || {
        let authed = session.is_authenticated();
        let on_login = location.pathname.get() == "/login";

        if !authed && !on_login {
            view! { <Redirect path="/login" /> }.into_view()
        } else if authed && on_login {
            view! { <Redirect path="/" /> }.into_view()
        } else if authed {
            view! { <AppShell /> }.into_view()
        } else {
            view! { <Login /> }.into_view()
        }
    }
}

/// Sidebar, top bar, and the authenticated route table.
#[component]
fn AppShell() -> impl IntoView {
    let session = use_context::<SessionStore>().expect("SessionStore not found");
    let location = use_location();

    let display_name = move || {
        session
            .username()
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| "User".to_string())
    };

    view! {
        <div class="min-h-screen bg-slate-950 text-slate-100 flex">
            <aside class="w-64 border-r border-slate-800 bg-slate-950/80 backdrop-blur flex flex-col">
                <div class="h-16 border-b border-slate-800 px-6 flex items-center gap-2">
                    <div class="h-8 w-8 rounded-xl bg-gradient-to-br from-blue-500 to-cyan-400 shadow-lg shadow-blue-500/40" />
                    <div>
                        <div class="text-sm font-semibold tracking-tight">"TrainStream"</div>
                        <div class="text-xs text-slate-500">"Course & trainer management"</div>
                    </div>
                </div>

                <nav class="flex-1 px-3 py-4 space-y-1">
                    {NAV_ITEMS.into_iter().map(|(href, label)| view! {
                        <A
                            href=href
                            exact=(href == "/")
                            class="flex items-center px-3 py-2 rounded-xl text-sm font-medium transition text-slate-200 hover:bg-slate-800 hover:text-white"
                            active_class="bg-slate-100 text-slate-900"
                        >
                            <span>{label}</span>
                        </A>
                    }).collect_view()}
                </nav>

                <div class="px-6 py-4 border-t border-slate-800 text-xs text-slate-500">
                    <div class="font-medium text-slate-300">{display_name}</div>
                    <div class="mb-2">"TrainStream v3 • Local"</div>
                    <button
                        on:click=move |_| session.logout()
                        class="w-full rounded-lg bg-slate-800 hover:bg-slate-700 text-slate-100 text-xs font-medium py-1.5"
                    >
                        "Log out"
                    </button>
                </div>
            </aside>

            <main class="flex-1 flex flex-col bg-slate-50">
                <header class="h-14 border-b border-slate-200 bg-white/70 backdrop-blur flex items-center justify-between px-6">
                    <div class="text-sm text-slate-500">
                        {move || page_title(&location.pathname.get())}
                    </div>
                    <div class="text-xs text-slate-400">
                        "Signed in as "
                        <span class="font-medium text-slate-700">{display_name}</span>
                    </div>
                </header>

                <div class="flex-1 p-6">
                    <div class="mx-auto max-w-6xl">
                        <Routes>
                            <Route path="/" view=Dashboard />
                            <Route path="/courses" view=Courses />
                            <Route path="/courses/:id" view=CourseDetail />
                            <Route path="/trainers" view=Trainers />
                            <Route path="/venues" view=Venues />
                            <Route path="/settings" view=Settings />
                            <Route path="/*any" view=|| view! { <Redirect path="/" /> } />
                        </Routes>
                    </div>
                </div>
            </main>
        </div>
    }
}

/// Top-bar title derived from the first path segment.
fn page_title(path: &str) -> String {
    match path.trim_start_matches('/').split('/').next() {
        None | Some("") => "Dashboard".to_string(),
        Some(segment) => {
            let mut chars = segment.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => "Dashboard".to_string(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_title_capitalizes_the_first_segment() {
        assert_eq!(page_title("/"), "Dashboard");
        assert_eq!(page_title("/courses"), "Courses");
        assert_eq!(page_title("/courses/12"), "Courses");
        assert_eq!(page_title("/settings"), "Settings");
    }
}
