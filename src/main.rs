//! TrainStream Admin
//!
//! Single-page admin console for training course and trainer management,
//! built with Leptos (WASM).
//!
//! # Features
//!
//! - Course scheduling from reusable templates
//! - Participant rosters with joining-instruction tracking
//! - Venue and user administration
//! - Client-side authenticated session
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. It renders CRUD views backed by the TrainStream REST API
//! over HTTP/JSON; all records remain owned by the remote system.

use leptos::*;

mod api;
mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
