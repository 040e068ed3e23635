//! Login Page

use leptos::*;

use crate::api::{self, LoginError};
use crate::state::session::{Session, SessionStore};

/// Credential form shown to signed-out visitors. On success the session
/// store is populated and the auth gate routes into the app; on failure no
/// token is stored and no navigation happens.
#[component]
pub fn Login() -> impl IntoView {
    let session = use_context::<SessionStore>().expect("SessionStore not found");

    let (username, set_username) = create_signal(String::new());
    let (password, set_password) = create_signal(String::new());
    let (error, set_error) = create_signal(None::<String>);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        set_error.set(None);

        let username = username.get();
        let password = password.get();
        spawn_local(async move {
            match api::login(&username, &password).await {
                Ok(data) => {
                    session.login(Session {
                        token: data.access_token,
                        username: data.username,
                    });
                }
                Err(LoginError::Rejected) => {
                    set_error.set(Some("Invalid login. Please try again.".to_string()));
                }
                Err(LoginError::Server) => {
                    set_error.set(Some("Server error. Check backend is running.".to_string()));
                }
            }
        });
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-slate-100">
            <div class="bg-white shadow-xl rounded-2xl p-10 w-full max-w-md">
                <h1 class="text-2xl font-semibold text-slate-800 mb-3 text-center">
                    "TrainStream Login"
                </h1>
                <p class="text-sm text-slate-500 mb-6 text-center">
                    "Enter your credentials to continue."
                </p>

                <form on:submit=on_submit class="space-y-4">
                    <input
                        type="text"
                        placeholder="Username"
                        prop:value=move || username.get()
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                        class="w-full px-4 py-2 border rounded-lg focus:ring focus:ring-blue-300"
                    />

                    <input
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                        class="w-full px-4 py-2 border rounded-lg focus:ring focus:ring-blue-300"
                    />

                    {move || {
                        error.get().map(|message| view! {
                            <div class="text-red-600 text-sm text-center">{message}</div>
                        })
                    }}

                    <button
                        type="submit"
                        class="w-full py-2 bg-blue-600 hover:bg-blue-700 text-white rounded-lg font-medium"
                    >
                        "Log In"
                    </button>
                </form>
            </div>
        </div>
    }
}
