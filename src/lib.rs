//! # defecttrack-client
//!
//! Leptos + WASM frontend for the DefectTrack project/defect-tracking
//! application. Covers session management (login, logout, profile refresh
//! backed by `localStorage`), role-based route guarding, and thin REST
//! service wrappers for projects, defects, comments, and users.
//!
//! The backend is a plain JSON-over-HTTP API reached via relative paths;
//! authenticated calls carry a bearer token persisted alongside the
//! serialized identity.

pub mod app;
pub mod components;
pub mod guard;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;

/// Browser entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(App);
}
