//! CSV Visualizer Main Application
//! Main window: toolbar, data preview, plotting controls and chart region.

use crate::gui::dialogs;
use crate::gui::state::AppState;
use crate::gui::{ChartViewer, ControlPanel, ControlPanelAction, DataPreview};

/// Main application window.
pub struct CsvVisualizerApp {
    state: AppState,
}

impl CsvVisualizerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            state: AppState::new(),
        }
    }

    /// Ask for a CSV file and load it; failures are reported in a dialog.
    fn handle_load_csv(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("CSV Files", &["csv"])
            .add_filter("All Files", &["*"])
            .pick_file()
        else {
            log::debug!("file dialog cancelled");
            return;
        };

        if let Err(e) = self.state.load_path(&path) {
            dialogs::show_error(&e);
        }
    }

    fn handle_plot(&mut self) {
        if let Err(e) = self.state.render() {
            dialogs::show_error(&e);
        }
    }
}

impl eframe::App for CsvVisualizerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut action = ControlPanelAction::None;

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.add_space(5.0);
            action = ControlPanel::show_toolbar(ui, self.state.file_path(), self.state.status());
            ui.add_space(5.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            DataPreview::show(ui, self.state.columns(), self.state.preview());
            ui.add_space(10.0);

            let columns = self.state.columns().to_vec();
            let panel_action = ControlPanel::show(ui, &columns, &mut self.state.selection);
            if panel_action != ControlPanelAction::None {
                action = panel_action;
            }

            ui.add_space(10.0);
            ui.separator();
            ChartViewer::show(ui, self.state.surface());
        });

        match action {
            ControlPanelAction::LoadCsv => self.handle_load_csv(),
            ControlPanelAction::Plot => self.handle_plot(),
            ControlPanelAction::None => {}
        }
    }
}
