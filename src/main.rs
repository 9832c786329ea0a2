//! Todo Pager Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod storage;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    // Installed before the config is read so override warnings reach the console
    let _ = console_log::init_with_level(log::Level::Info);

    let config = AppConfig::load();
    log::set_max_level(config.level_filter());

    mount_to_body(move || view! { <App config=config.clone() /> });
}
