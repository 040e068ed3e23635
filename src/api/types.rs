//! Wire records for the TrainStream API.
//!
//! Every entity is owned by the remote system; these are transient copies
//! fetched per page view and discarded on navigation. Missing optional
//! fields deserialize to defaults rather than failing.

use serde::{Deserialize, Serialize};

use crate::state::collection::HasId;

/// Successful login body.
#[derive(Clone, Debug, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    #[serde(default)]
    pub username: String,
}

/// A scheduled course, denormalized with trainer and venue names.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub code: String,
    #[serde(default)]
    pub course_type: Option<String>,
    #[serde(default)]
    pub provider_type: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub trainer_name: String,
    #[serde(default)]
    pub venue_name: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub capacity: Option<i64>,
}

impl Course {
    /// "12/03/2026" or "12/03/2026 – 14/03/2026" for the list table.
    /// Unparseable dates render as sent.
    pub fn date_label(&self) -> String {
        let start = self.start_date.as_deref().map(format_date);
        let end = self.end_date.as_deref().map(format_date);
        match (start, end) {
            (Some(start), Some(end)) => format!("{start} – {end}"),
            (Some(start), None) => start,
            (None, _) => "-".to_string(),
        }
    }
}

fn format_date(raw: &str) -> String {
    chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map(|date| date.format("%d/%m/%Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Canonical statuses offered by the course creation form. The wire field
/// stays free text because the server owns the value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CourseStatus {
    Planned,
    Running,
    Completed,
    Cancelled,
}

impl CourseStatus {
    pub const ALL: [Self; 4] = [Self::Planned, Self::Running, Self::Completed, Self::Cancelled];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Planned => "Planned",
            Self::Running => "Running",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// A learner registered on a course.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub id: i64,
    pub course_id: i64,
    pub first_name: String,
    pub surname: String,
    #[serde(default)]
    pub contact_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub payment_status: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub joining_sent: bool,
}

/// Reusable preset used to pre-fill course creation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CourseTemplate {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub course_type: Option<String>,
    #[serde(default)]
    pub course_title: Option<String>,
    #[serde(default)]
    pub provider_type: Option<String>,
    #[serde(default)]
    pub default_capacity: Option<i64>,
    #[serde(default)]
    pub validity_months: Option<i64>,
    #[serde(default)]
    pub cpd_hours: Option<f64>,
}

/// A training location.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Venue {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address1: Option<String>,
    #[serde(default)]
    pub address2: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub postcode: Option<String>,
}

impl Venue {
    /// "City • Postcode", or a dash when neither is set.
    pub fn location_label(&self) -> String {
        join_parts(&[&self.city, &self.postcode], " • ")
    }

    /// Address lines joined with a comma, or a dash when none are set.
    pub fn address_label(&self) -> String {
        join_parts(&[&self.address1, &self.address2], ", ")
    }
}

fn join_parts(parts: &[&Option<String>], separator: &str) -> String {
    let present: Vec<&str> = parts
        .iter()
        .filter_map(|part| part.as_deref())
        .filter(|part| !part.is_empty())
        .collect();
    if present.is_empty() {
        "—".to_string()
    } else {
        present.join(separator)
    }
}

/// An account that can sign in to the admin console.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub surname: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub must_change_password: bool,
}

impl User {
    /// Server-provided full name, falling back to the name parts.
    pub fn display_name(&self) -> String {
        if self.full_name.is_empty() {
            format!("{} {}", self.first_name, self.surname)
        } else {
            self.full_name.clone()
        }
    }
}

/// Canonical roles offered by the user creation form.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserRole {
    Admin,
    TrainingAdmin,
    Trainer,
}

impl UserRole {
    pub const ALL: [Self; 3] = [Self::Admin, Self::TrainingAdmin, Self::Trainer];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::TrainingAdmin => "Training Admin",
            Self::Trainer => "Trainer",
        }
    }
}

impl HasId for Course {
    fn id(&self) -> i64 {
        self.id
    }
}

impl HasId for Participant {
    fn id(&self) -> i64 {
        self.id
    }
}

impl HasId for CourseTemplate {
    fn id(&self) -> i64 {
        self.id
    }
}

impl HasId for Venue {
    fn id(&self) -> i64 {
        self.id
    }
}

impl HasId for User {
    fn id(&self) -> i64 {
        self.id
    }
}

// ============ Request payloads ============

/// Body for POST /api/courses. A missing venue is sent as an explicit null.
#[derive(Clone, Debug, Serialize)]
pub struct NewCourse {
    pub template_id: i64,
    pub course_date: String,
    pub venue_id: Option<i64>,
    pub trainer: String,
    pub capacity: i64,
    pub status: String,
}

/// Body for POST /api/participants/by-course/{id}.
#[derive(Clone, Debug, Serialize)]
pub struct NewParticipant {
    pub first_name: String,
    pub surname: String,
    pub email: Option<String>,
    pub contact_number: Option<String>,
    pub payment_status: Option<String>,
    pub notes: Option<String>,
    pub joining_sent: bool,
}

/// Partial body for PUT /api/participants/{id}; unset fields are omitted.
#[derive(Clone, Debug, Default, Serialize)]
pub struct ParticipantUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub joining_sent: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_status: Option<String>,
}

/// Body for POST /api/course-templates.
#[derive(Clone, Debug, Serialize)]
pub struct NewTemplate {
    pub name: String,
    pub course_type: Option<String>,
    pub course_title: Option<String>,
    pub provider_type: Option<String>,
    pub default_capacity: Option<i64>,
    pub validity_months: Option<i64>,
    pub cpd_hours: Option<f64>,
}

/// Body for POST /api/users.
#[derive(Clone, Debug, Serialize)]
pub struct NewUser {
    pub first_name: String,
    pub surname: String,
    pub role: String,
    pub email: Option<String>,
    pub password: String,
}

/// Partial body for PUT /api/users/{id}; unset fields are omitted.
#[derive(Clone, Debug, Default, Serialize)]
pub struct UserUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub must_change_password: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn course(start: Option<&str>, end: Option<&str>) -> Course {
        Course {
            id: 1,
            title: "FREC 3".to_string(),
            code: "FREC3-001".to_string(),
            course_type: None,
            provider_type: None,
            start_date: start.map(String::from),
            end_date: end.map(String::from),
            trainer_name: String::new(),
            venue_name: String::new(),
            status: "Planned".to_string(),
            capacity: None,
        }
    }

    #[test]
    fn date_label_formats_single_and_ranged_dates() {
        assert_eq!(course(Some("2026-03-12"), None).date_label(), "12/03/2026");
        assert_eq!(
            course(Some("2026-03-12"), Some("2026-03-14")).date_label(),
            "12/03/2026 – 14/03/2026"
        );
        assert_eq!(course(None, None).date_label(), "-");
    }

    #[test]
    fn date_label_passes_unparseable_dates_through() {
        assert_eq!(course(Some("next week"), None).date_label(), "next week");
    }

    #[test]
    fn course_deserializes_with_missing_optional_fields() {
        let course: Course = serde_json::from_value(json!({ "id": 7 })).unwrap();
        assert_eq!(course.id, 7);
        assert!(course.title.is_empty());
        assert!(course.status.is_empty());
        assert_eq!(course.capacity, None);
    }

    #[test]
    fn venue_labels_join_present_parts() {
        let venue = Venue {
            id: 1,
            name: "Harbour House".to_string(),
            address1: Some("1 Quay Street".to_string()),
            address2: None,
            city: Some("Bristol".to_string()),
            postcode: Some("BS1 4DB".to_string()),
        };
        assert_eq!(venue.location_label(), "Bristol • BS1 4DB");
        assert_eq!(venue.address_label(), "1 Quay Street");
    }

    #[test]
    fn venue_labels_fall_back_to_a_dash() {
        let venue = Venue {
            id: 2,
            name: "TBC".to_string(),
            address1: None,
            address2: None,
            city: None,
            postcode: None,
        };
        assert_eq!(venue.location_label(), "—");
        assert_eq!(venue.address_label(), "—");
    }

    #[test]
    fn display_name_prefers_the_server_full_name() {
        let user: User = serde_json::from_value(json!({
            "id": 1,
            "first_name": "Ross",
            "surname": "Stevenson",
            "full_name": "Ross Stevenson",
            "role": "Trainer",
            "must_change_password": false
        }))
        .unwrap();
        assert_eq!(user.display_name(), "Ross Stevenson");

        let bare: User = serde_json::from_value(json!({
            "id": 2,
            "first_name": "Amy",
            "surname": "Field"
        }))
        .unwrap();
        assert_eq!(bare.display_name(), "Amy Field");
    }

    #[test]
    fn participant_update_serializes_only_set_fields() {
        let update = ParticipantUpdate {
            joining_sent: Some(true),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({ "joining_sent": true })
        );
    }

    #[test]
    fn user_update_serializes_only_set_fields() {
        let update = UserUpdate {
            must_change_password: Some(false),
        };
        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({ "must_change_password": false })
        );
    }

    #[test]
    fn new_course_sends_a_missing_venue_as_null() {
        let payload = NewCourse {
            template_id: 3,
            course_date: "2026-03-12".to_string(),
            venue_id: None,
            trainer: String::new(),
            capacity: 12,
            status: "Planned".to_string(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("venue_id").unwrap().is_null());
        assert_eq!(value.get("capacity").unwrap(), 12);
    }
}
