//! # slowlog-client
//!
//! Leptos + WASM frontend for the slow-query monitoring console.
//!
//! This crate contains pages, components, application state, REST types, and
//! the HTTP wrapper that talks to the slow-query service. The `server` crate
//! renders it with SSR; the `hydrate` feature builds the browser bundle.

pub mod app;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: install panic/console hooks and hydrate the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
