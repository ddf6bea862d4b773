//! Marketing Site Frontend
//!
//! Leptos-based WASM frontend: landing page, pricing with the ROI
//! calculator, and the template catalog browser.

mod analytics;
mod app;
mod calculator;
mod components;
mod pages;
mod preview;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
