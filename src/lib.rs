pub mod types;
pub mod config;
pub mod validate;
pub mod format;
pub mod dom;
pub mod state;
pub mod components;
pub mod upload_zone;
pub mod form_guard;
pub mod tooltip;
pub mod animation;
pub mod clipboard;
pub mod chart;
pub mod api;
pub mod bootstrap;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    if let Err(e) = bootstrap::on_ready(bootstrap::init_page) {
        log::error!("UI init not scheduled: {e}");
    }
}
