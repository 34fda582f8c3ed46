//! YoungchaPedia - movie review front end
//!
//! Navigation bar and the combined login / sign-up form, built with Leptos and
//! WebAssembly. The credential form logic lives in [`core`] and runs natively,
//! so it is tested without a browser.

#![recursion_limit = "4096"]

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
