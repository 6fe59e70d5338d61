//! # connect-signup
//!
//! Leptos + WASM signup page for Connect: an account form with client-side
//! validation and a mocked support chat widget.
//!
//! The decision-making lives in framework-agnostic modules (`state`,
//! `util::validation`, `services`) that run natively under test. Components
//! and pages are thin Leptos wiring over them.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod services;
pub mod state;
pub mod util;

/// Browser entry point: hydrate the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
