// src/main.rs
use anyhow::Result;
use eframe::egui;

mod api;
mod app;
mod model;
mod settings;
mod state;
mod storage;
mod ui;

use app::GuidanceApp;

fn main() -> Result<()> {
    // Initialize logging (reads RUST_LOG env var)
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let settings = settings::Settings::load()?;
    log::info!("guidance dashboard starting against {}", settings.api_base_url);

    let api = api::ApiClient::new(&settings.api_base_url)?;
    let store = storage::SessionStore::new();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1180.0, 780.0])
            .with_title("Guidance"),
        ..Default::default()
    };

    eframe::run_native(
        "Guidance",
        options,
        Box::new(move |_cc| Box::new(GuidanceApp::new(api, store))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run application: {}", e))
}
