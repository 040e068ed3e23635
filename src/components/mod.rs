//! UI Components
//!
//! Reusable Leptos components for the admin screens.

pub mod badge;
pub mod banner;
pub mod loading;
pub mod modal;

pub use badge::{PaymentBadge, StatusBadge};
pub use banner::ErrorBanner;
pub use loading::Loading;
pub use modal::Modal;
