//! # client
//!
//! Leptos + WASM frontend for the blog platform: signup/signin forms, the
//! session store, and the blog listing and post pages.
//!
//! The `hydrate` feature compiles the browser build (real HTTP calls,
//! `localStorage`, timers). The `ssr` feature is used by the `blogweb` host to
//! render the shell; browser-only paths no-op there.

pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod net;
pub mod pages;
pub mod session;
pub mod state;
pub mod util;

/// WASM entry point: installs console logging and hydrates the SSR markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        leptos::logging::warn!("console logger already installed: {e}");
    }
    leptos::mount::hydrate_body(app::App);
}
