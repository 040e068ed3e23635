//! HTTP API Client
//!
//! Thin wrapper over the TrainStream REST API. Every request carries JSON
//! headers; non-2xx responses surface as human-readable messages for the
//! page-level error banners.

use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::types::{
    Course, CourseTemplate, LoginResponse, NewCourse, NewParticipant, NewTemplate, NewUser,
    Participant, ParticipantUpdate, User, UserUpdate, Venue,
};
use crate::state::session::SessionStore;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:8000";

/// Base URL of the remote API, overridable at build time via
/// `TRAINSTREAM_API_URL`.
pub fn api_base() -> &'static str {
    option_env!("TRAINSTREAM_API_URL")
        .unwrap_or(DEFAULT_API_BASE)
        .trim_end_matches('/')
}

/// Error body shape the backend uses for rejected requests.
#[derive(serde::Deserialize)]
struct ErrorBody {
    detail: String,
}

/// Login failures are the one place a caller distinguishes an unreachable
/// server from rejected credentials.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoginError {
    Server,
    Rejected,
}

/// Authenticate against the API. No session exists yet, so this lives
/// outside [`Api`].
pub async fn login(username: &str, password: &str) -> Result<LoginResponse, LoginError> {
    #[derive(Serialize)]
    struct LoginRequest<'a> {
        username: &'a str,
        password: &'a str,
    }

    let response = Request::post(&format!("{}/api/auth/login", api_base()))
        .json(&LoginRequest { username, password })
        .map_err(|_| LoginError::Server)?
        .send()
        .await
        .map_err(|_| LoginError::Server)?;

    if !response.ok() {
        return Err(LoginError::Rejected);
    }

    response.json().await.map_err(|_| LoginError::Server)
}

/// Handle to the remote API, carrying the session so every request can be
/// authorized. Cheap to copy; provided app-wide via context.
#[derive(Clone, Copy)]
pub struct Api {
    session: SessionStore,
}

impl Api {
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }

    // ============ Courses ============

    pub async fn fetch_courses(&self) -> Result<Vec<Course>, String> {
        self.get_json("/api/courses").await
    }

    pub async fn create_course(&self, payload: &NewCourse) -> Result<Course, String> {
        self.post_json("/api/courses", payload).await
    }

    pub async fn fetch_course(&self, id: i64) -> Result<Course, String> {
        self.get_json(&format!("/api/courses/{id}")).await
    }

    // ============ Participants ============

    pub async fn fetch_participants(&self, course_id: i64) -> Result<Vec<Participant>, String> {
        self.get_json(&format!("/api/participants/by-course/{course_id}"))
            .await
    }

    pub async fn create_participant(
        &self,
        course_id: i64,
        payload: &NewParticipant,
    ) -> Result<Participant, String> {
        self.post_json(&format!("/api/participants/by-course/{course_id}"), payload)
            .await
    }

    pub async fn update_participant(
        &self,
        id: i64,
        update: &ParticipantUpdate,
    ) -> Result<Participant, String> {
        self.put_json(&format!("/api/participants/{id}"), update)
            .await
    }

    pub async fn delete_participant(&self, id: i64) -> Result<(), String> {
        let response = self
            .authorize(Request::delete(&format!(
                "{}/api/participants/{id}",
                api_base()
            )))
            .send()
            .await
            .map_err(|e| format!("Network error: {e}"))?;

        if !response.ok() {
            return Err(error_message(response).await);
        }
        Ok(())
    }

    // ============ Templates, venues, users ============

    pub async fn fetch_templates(&self) -> Result<Vec<CourseTemplate>, String> {
        self.get_json("/api/course-templates").await
    }

    pub async fn create_template(&self, payload: &NewTemplate) -> Result<CourseTemplate, String> {
        self.post_json("/api/course-templates", payload).await
    }

    pub async fn fetch_venues(&self) -> Result<Vec<Venue>, String> {
        self.get_json("/api/venues").await
    }

    pub async fn fetch_users(&self) -> Result<Vec<User>, String> {
        self.get_json("/api/users").await
    }

    pub async fn create_user(&self, payload: &NewUser) -> Result<User, String> {
        self.post_json("/api/users", payload).await
    }

    pub async fn update_user(&self, id: i64, update: &UserUpdate) -> Result<User, String> {
        self.put_json(&format!("/api/users/{id}"), update).await
    }

    // ============ Request plumbing ============

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => builder.header("Authorization", &format!("Bearer {token}")),
            None => builder,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, String> {
        let response = self
            .authorize(Request::get(&format!("{}{}", api_base(), path)))
            .send()
            .await
            .map_err(|e| format!("Network error: {e}"))?;
        read_json(response).await
    }

    async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, String>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let response = self
            .authorize(Request::post(&format!("{}{}", api_base(), path)))
            .json(body)
            .map_err(|e| format!("Request build error: {e}"))?
            .send()
            .await
            .map_err(|e| format!("Network error: {e}"))?;
        read_json(response).await
    }

    async fn put_json<T, B>(&self, path: &str, body: &B) -> Result<T, String>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let response = self
            .authorize(Request::put(&format!("{}{}", api_base(), path)))
            .json(body)
            .map_err(|e| format!("Request build error: {e}"))?
            .send()
            .await
            .map_err(|e| format!("Network error: {e}"))?;
        read_json(response).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        return Err(error_message(response).await);
    }
    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {e}"))
}

/// The backend's `detail` message when the body parses, otherwise a uniform
/// status line. 4xx and 5xx are not distinguished.
async fn error_message(response: Response) -> String {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => body.detail,
        Err(_) => format!("API error {status}"),
    }
}
