//! CSV Data Visualizer
//!
//! Loads a CSV file, previews its first rows and plots two selected columns
//! as a line, bar or pie chart.

mod charts;
mod data;
mod gui;

use eframe::egui;
use gui::CsvVisualizerApp;

const WINDOW_TITLE: &str = "CSV Data Visualizer";

fn main() -> eframe::Result<()> {
    // Log to stderr (enable with `RUST_LOG=debug`)
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([900.0, 700.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title(WINDOW_TITLE),
        ..Default::default()
    };

    log::info!("starting {}", WINDOW_TITLE);

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(CsvVisualizerApp::new(cc)))),
    )
}
