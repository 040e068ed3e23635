//! HTTP API
//!
//! Client helper and wire records for the TrainStream REST API.

pub mod client;
pub mod types;

pub use client::{login, Api, LoginError};
