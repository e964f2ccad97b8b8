//! Supabase WordPress Bridge - bilingual landing site
//!
//! A client-rendered Leptos app served by a small axum host. The visitor's
//! language lives in localStorage; switching it tears the page down and
//! renders it again from the other string table.

#![recursion_limit = "4096"]

pub mod app;
pub mod core;
#[cfg(feature = "ssr")]
pub mod server;
pub mod ui;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() -> Result<(), wasm_bindgen::JsValue> {
    console_error_panic_hook::set_once();
    ui::console::init();
    ui::mount::mount_app().map_err(|err| wasm_bindgen::JsValue::from_str(&err.to_string()))
}
