//! # client
//!
//! Leptos + WASM frontend for the Clean India complaint reporting service.
//!
//! Citizens photograph garbage and submit geotagged complaints, staff triage
//! them, and citizens later upload proof-of-cleanup video. Every durable
//! operation is delegated to the external backend REST API; this crate owns
//! routing, forms, the session store and the role policy that gates views.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered shell.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
