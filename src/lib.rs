//! Teacher Session - login widget for the activities page
//!
//! Switches between the teacher login form and the signed-in teacher panel,
//! keeping the session in localStorage. Built with Leptos and WebAssembly.

pub mod app;
pub mod core;
pub mod ui;

#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    use crate::app::*;
    console_error_panic_hook::set_once();
    leptos::mount::hydrate_body(App);
}
