//! Pages
//!
//! Top-level page components for each route.

pub mod course_detail;
pub mod courses;
pub mod dashboard;
pub mod login;
pub mod settings;
pub mod trainers;
pub mod venues;

pub use course_detail::CourseDetail;
pub use courses::Courses;
pub use dashboard::Dashboard;
pub use login::Login;
pub use settings::Settings;
pub use trainers::Trainers;
pub use venues::Venues;
