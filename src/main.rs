//! Üç Taş GUI
//!
//! Play against the computer. Set `RUST_LOG=uctas=debug` to trace its moves.

use tracing_subscriber::EnvFilter;
use uctas::ui::UcTasApp;

fn main() -> Result<(), eframe::Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([600.0, 640.0])
            .with_min_inner_size([400.0, 440.0])
            .with_title("Üç Taş – Minimax AI"),
        ..Default::default()
    };

    eframe::run_native(
        "Üç Taş",
        options,
        Box::new(|cc| Ok(Box::new(UcTasApp::new(cc)))),
    )
}
