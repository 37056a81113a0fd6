//! # octofit-ui
//!
//! Leptos + WASM frontend for the OctoFit fitness tracker. Replaces the
//! React `frontend/` with a Rust-native UI layer.
//!
//! Five list views (users, teams, activities, workouts, leaderboard)
//! share one fetch-on-mount lifecycle; the users view adds an inline edit
//! workflow backed by a small state machine. The REST backend is an
//! external collaborator reached through `net::api`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: install the panic hook and console logger, then
/// hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
