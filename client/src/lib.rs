//! # client
//!
//! Leptos + WASM front-end for the profile portal: sign-up, sign-in and a
//! profile page with an edit modal, backed by a remote GraphQL account API.
//!
//! Session, validation and wire types live in the `account` crate; this crate
//! supplies the pages, the browser `localStorage` backend and the `gloo-net`
//! transport.

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
    let _ = console_log::init_with_level(log::Level::Info);
    leptos::mount::hydrate_body(app::App);
}
