//! # client
//!
//! Leptos + WASM frontend for the notes application.
//!
//! This crate contains pages, components, session state, the REST client for
//! the remote notes service, and the route gate that keeps protected views
//! behind a valid token. The `notes-web` host binary server-renders `App`;
//! the `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// Browser entry point: installs logging and hydrates the server-rendered body.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
