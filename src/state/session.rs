//! Session Context
//!
//! Owns the signed-in session: restored from browser storage once at
//! startup, written on login, cleared on logout. The auth gate, the shell,
//! and the API client all go through this store instead of reading storage
//! ad hoc.

use leptos::*;

/// localStorage keys, shared with earlier releases of the app.
const TOKEN_KEY: &str = "ts_token";
const USER_KEY: &str = "ts_user";

/// An authenticated session. The token is opaque; it is trusted until the
/// remote API rejects it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub token: String,
    pub username: String,
}

/// Reactive handle to the current session, provided app-wide via context.
#[derive(Clone, Copy)]
pub struct SessionStore {
    current: RwSignal<Option<Session>>,
}

impl SessionStore {
    /// Restore the session persisted by a previous visit, if any.
    pub fn restore() -> Self {
        let current = local_storage().and_then(|storage| {
            let token = storage.get_item(TOKEN_KEY).ok().flatten()?;
            let username = storage.get_item(USER_KEY).ok().flatten().unwrap_or_default();
            Some(Session { token, username })
        });
        Self {
            current: create_rw_signal(current),
        }
    }

    /// Whether a token is present. Reactive, so the auth gate re-evaluates
    /// on login and logout.
    pub fn is_authenticated(&self) -> bool {
        self.current.get().is_some()
    }

    /// Display name of the signed-in user.
    pub fn username(&self) -> Option<String> {
        self.current.get().map(|session| session.username)
    }

    /// Current token for request headers. Untracked: issuing a request must
    /// not subscribe the caller to session changes.
    pub fn token(&self) -> Option<String> {
        self.current.get_untracked().map(|session| session.token)
    }

    /// Persist and publish a freshly created session.
    pub fn login(&self, session: Session) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(TOKEN_KEY, &session.token);
            let _ = storage.set_item(USER_KEY, &session.username);
        }
        self.current.set(Some(session));
    }

    /// Clear the stored token and username.
    pub fn logout(&self) {
        if let Some(storage) = local_storage() {
            let _ = storage.remove_item(TOKEN_KEY);
            let _ = storage.remove_item(USER_KEY);
        }
        self.current.set(None);
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}
