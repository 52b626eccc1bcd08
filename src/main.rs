//! Kesher Admin Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod crud;
mod dashboard;
mod error;
mod format;
mod models;
mod pages;
mod services;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;
use rolling_logger::LoggerConfig;

fn main() {
    console_error_panic_hook::set_once();

    let config = config::AppConfig::load();
    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    let logger = LoggerConfig {
        capacity: config.log_capacity,
        level,
        echo: true,
    };
    match rolling_logger::init_logger(logger) {
        Ok(()) => {
            let _ = rolling_logger::info(&format!("Kesher admin starting, backend {}", config.api_base_url));
        }
        Err(err) => web_sys::console::error_1(&format!("Logger setup failed: {}", err).into()),
    }

    mount_to_body(App);
}
