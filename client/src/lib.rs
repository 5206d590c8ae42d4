//! # client
//!
//! Leptos frontend for the portfolio site. Rendered on the server with the
//! `ssr` feature and hydrated in the browser with the `hydrate` feature.
//!
//! The only stateful piece is the light/dark theme (`state::theme`); the rest
//! of the page renders the static records in `state::content`.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging and hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
