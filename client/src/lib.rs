//! # client
//!
//! Leptos + WASM frontend for the ProbY problem/solution platform.
//!
//! This crate contains pages, components, and application state. Catalog
//! data, filtering, and form rules come from the `catalog` crate; this crate
//! only wires them to signals, renders them, and adapts browser
//! `localStorage` to `catalog::KeyValueStore`.

pub mod app;
pub mod components;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
