//! Control Panel Widget
//! Load button and status line, column selectors, chart-type selector and
//! the plot button.

use crate::charts::ChartKind;
use crate::gui::state::{Selection, Status, StatusKind};
use egui::{Color32, ComboBox, RichText};
use std::path::Path;

const COLUMN_COMBO_WIDTH: f32 = 150.0;
const KIND_COMBO_WIDTH: f32 = 100.0;

/// Load and plotting controls.
pub struct ControlPanel;

impl ControlPanel {
    /// Draw the load button with the current file name and status line.
    pub fn show_toolbar(
        ui: &mut egui::Ui,
        file: Option<&Path>,
        status: &Status,
    ) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.horizontal(|ui| {
            let button = egui::Button::new(RichText::new("📂 Load CSV").size(14.0))
                .fill(Color32::from_rgb(100, 149, 237))
                .min_size(egui::vec2(110.0, 26.0));
            if ui.add(button).clicked() {
                action = ControlPanelAction::LoadCsv;
            }

            let file_text = file
                .and_then(|p| p.file_name())
                .map(|n| n.to_string_lossy().to_string())
                .unwrap_or_else(|| "No file selected".to_string());
            ui.label(RichText::new(file_text).size(12.0));
        });

        let status_color = match status.kind {
            StatusKind::Error => Color32::from_rgb(220, 53, 69),
            StatusKind::Warning => Color32::from_rgb(243, 156, 18),
            StatusKind::Success => Color32::from_rgb(40, 167, 69),
            StatusKind::Idle => Color32::GRAY,
        };
        ui.label(RichText::new(&status.text).size(11.0).color(status_color));

        action
    }

    /// Draw the controls. Selector options are re-bound to `columns` on every
    /// frame, so a new table's columns show up as soon as it is loaded.
    pub fn show(
        ui: &mut egui::Ui,
        columns: &[String],
        selection: &mut Selection,
    ) -> ControlPanelAction {
        let mut action = ControlPanelAction::None;

        ui.horizontal(|ui| {
            ui.label("X-axis:");
            Self::column_combo(ui, "x_col", columns, &mut selection.x_col);

            ui.add_space(8.0);
            ui.label("Y-axis:");
            Self::column_combo(ui, "y_col", columns, &mut selection.y_col);

            ui.add_space(8.0);
            ui.label("Chart Type:");
            ComboBox::from_id_salt("chart_kind")
                .width(KIND_COMBO_WIDTH)
                .selected_text(selection.kind.label())
                .show_ui(ui, |ui| {
                    for kind in ChartKind::ALL {
                        ui.selectable_value(&mut selection.kind, kind, kind.label());
                    }
                });

            ui.add_space(8.0);
            let button = egui::Button::new(RichText::new("📈 Plot Graph").size(14.0))
                .min_size(egui::vec2(110.0, 24.0));
            if ui.add(button).clicked() {
                action = ControlPanelAction::Plot;
            }
        });

        action
    }

    fn column_combo(ui: &mut egui::Ui, id: &str, columns: &[String], selected: &mut String) {
        ComboBox::from_id_salt(id)
            .width(COLUMN_COMBO_WIDTH)
            .selected_text(selected.as_str())
            .show_ui(ui, |ui| {
                for col in columns {
                    if ui.selectable_label(*selected == *col, col).clicked() {
                        *selected = col.clone();
                    }
                }
            });
    }
}

/// Actions triggered by the controls
#[derive(Debug, Clone, PartialEq)]
pub enum ControlPanelAction {
    None,
    LoadCsv,
    Plot,
}
