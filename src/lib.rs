//! NexGen AI Tech marketing site
//!
//! Leptos web application with server-side rendering and a WebAssembly
//! client. The client side carries the session & engagement tracker that
//! feeds the analytics spreadsheet.

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
