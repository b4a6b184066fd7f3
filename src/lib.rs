pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod time_utils;

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod global_state;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

/// Browser entry point: wire up logging and mount the dashboard.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();

    let console_logger = Box::new(infrastructure::services::ConsoleLogger::new_development());
    domain::logging::init_logger(console_logger);

    let browser_time_provider = Box::new(infrastructure::services::BrowserTimeProvider::new());
    domain::logging::init_time_provider(browser_time_provider);

    domain::logging::get_logger().info(
        domain::logging::LogComponent::Presentation("Initialize"),
        "🚀 ATR chart dashboard starting",
    );

    leptos::mount_to_body(app::App);
}
