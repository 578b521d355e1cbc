//! Schoolpal AI Web Frontend
//!
//! Leptos-based WASM frontend rendering the landing page and dashboard stub.

mod api;
mod app;
mod components;
mod head;
mod nav;
mod pages;
mod sections;

pub use app::App;

use wasm_bindgen::prelude::*;

/// WASM entry point
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(App);
}
