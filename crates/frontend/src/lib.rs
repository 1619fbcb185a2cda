//! Leptos storefront frontend.
//!
//! Browser-only presentation layer: the modules below compile for wasm32;
//! native builds produce an empty rlib.

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod viewport;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// WASM entry point for the frontend.
/// This is called automatically when the WASM module loads.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn main() {
    // Surface panics in the browser console.
    console_error_panic_hook::set_once();

    leptos::mount_to_body(app::App);
}
