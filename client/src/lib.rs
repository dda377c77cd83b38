//! # client
//!
//! Leptos + WASM frontend for the marketplace: catalog browsing, the owner's
//! listing manager, the new-listing form, and the profile editor.
//!
//! Page state wraps the plain state types from the `market` crate in
//! `RwSignal`s; this crate only adds rendering, routing, and the `net::api`
//! boundary to the server.

pub mod app;
pub mod components;
pub mod net;
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
