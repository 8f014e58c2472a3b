//! GUI module - User interface components

mod app;
mod chart_viewer;
mod control_panel;
mod data_preview;
mod dialogs;
mod state;

pub use app::CsvVisualizerApp;
pub use chart_viewer::ChartViewer;
pub use control_panel::{ControlPanel, ControlPanelAction};
pub use data_preview::DataPreview;
