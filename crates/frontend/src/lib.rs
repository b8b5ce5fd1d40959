pub mod app;
pub mod domain;
pub mod layout;
pub mod routes;
pub mod shared;
pub mod system;

use shared::config::AppConfig;
use wasm_bindgen::prelude::wasm_bindgen;

#[wasm_bindgen(start)]
pub fn start() {
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    let config = AppConfig::load();
    log::info!(
        "AgroMarEC client: api={}, paypal client id configured={}",
        config.api_base_url,
        config.paypal_client_id.is_some()
    );

    leptos::mount::mount_to_body(move || leptos::view! { <app::App config=config.clone() /> });
}
