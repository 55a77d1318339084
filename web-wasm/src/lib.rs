//! PDF Extractor Web App (Leptos + WASM)

mod app;
mod components;
mod api;
mod config;
mod download;
mod logger;
mod service_worker;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Debug);
    service_worker::register();
    leptos::mount::mount_to_body(app::App);
}
