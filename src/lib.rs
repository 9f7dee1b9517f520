//! # study-client
//!
//! Leptos + WASM helpers for the study/quiz pages of the web application.
//!
//! This crate contains the anonymous (logged-out) progress store backed by
//! `localStorage`, the `SeoHead` component that registers page metadata with
//! `leptos_meta`, and the search query normaliser. Host pages import these
//! directly; the crate owns no routes.

rust_i18n::i18n!("locales", fallback = "en");

pub mod components;
pub mod state;
pub mod util;

/// Install console logging and the panic hook for the browser build.
///
/// Safe to call more than once; later calls are ignored.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn init_console() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
}
