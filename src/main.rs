use eframe::egui;
use tracing_subscriber::EnvFilter;

use rosterview::RosterApp;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("rosterview=info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 600.0])
            .with_min_inner_size([480.0, 320.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Rosterview - User Directory",
        options,
        Box::new(|cc| Ok(Box::new(RosterApp::new(cc)?))),
    )
}
