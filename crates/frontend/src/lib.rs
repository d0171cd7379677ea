pub mod app;
pub mod app_shell;
pub mod dashboards;
pub mod domain;
pub mod layout;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen]
pub fn hydrate() {
    // initializes logging using the `log` crate; the logger must exist
    // before the config is parsed so its warnings reach the console
    _ = console_log::init_with_level(log::Level::Trace);
    console_error_panic_hook::set_once();
    log::set_max_level(shared::config::config().logging.level_filter());
    log::info!("order admin starting, api base {}", shared::api_utils::api_base());

    leptos::mount::mount_to_body(app::App);
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
