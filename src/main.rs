#![allow(warnings)]
//! Trip Planner Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod dnd;
mod logging;
mod store;

use app::App;
use config::PlannerConfig;
use leptos::prelude::*;
use log::{info, warn};

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = PlannerConfig::load();
    let logger = logging::init(&config);
    if let Some(e) = config_error {
        warn!("[CONFIG] planner.json is invalid, using defaults: {}", e);
    }
    info!("[APP] Starting trip planner ({:?})", config);

    mount_to_body(move || view! { <App config=config.clone() logger=logger /> });
}
