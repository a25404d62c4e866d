//! # portal-client
//!
//! Leptos + WASM frontend for the device portal. Replaces the React login
//! surface with a Rust-native UI layer.
//!
//! This crate contains pages, components, application state, the wire types
//! for the authentication endpoint, and the key-value storage capabilities
//! used to persist the signed-in session.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install logging/panic hooks and hydrate the app.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::App;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    leptos::mount::hydrate_body(App);
}
