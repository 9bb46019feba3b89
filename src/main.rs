#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod config;
mod error;
mod io;
mod model;
mod store;
mod ui;

use tracing_subscriber::EnvFilter;

fn main() -> eframe::Result<()> {
    let settings_store = config::SettingsStore::discover();
    let settings = settings_store.load();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(&settings.log_filter))
                .unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        settings = %settings_store.path().display(),
        "starting Site Progress"
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 680.0])
            .with_min_inner_size([760.0, 420.0])
            .with_title("Site Progress"),
        ..Default::default()
    };

    eframe::run_native(
        "Site Progress",
        options,
        Box::new(|cc| Ok(Box::new(app::SiteProgressApp::new(cc, settings_store, settings)))),
    )
}
