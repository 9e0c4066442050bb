use log::{info, Level};

mod api;
mod components;
pub mod config;
mod pages;
mod router;
mod state;
#[cfg(test)]
mod test_support;
pub mod utils;

#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(Level::Debug);
    info!("Starting HRM frontend");

    // window.__HRM_ENV (env.js) takes precedence over ./config.json.
    leptos::spawn_local(async move {
        let config = config::init().await;
        info!("Runtime config initialized: {}", config.api_base_url);
    });

    router::mount_app();
}
