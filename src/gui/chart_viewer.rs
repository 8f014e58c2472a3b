//! Chart Viewer Widget
//! Chart display region showing the current chart surface, if any.

use crate::charts::{ChartPlotter, ChartSurface};
use egui::RichText;

pub struct ChartViewer;

impl ChartViewer {
    pub fn show(ui: &mut egui::Ui, surface: Option<&ChartSurface>) {
        match surface {
            Some(surface) => ChartPlotter::draw(ui, surface),
            None => {
                ui.centered_and_justified(|ui| {
                    ui.label(RichText::new("No Chart").size(20.0).color(egui::Color32::GRAY));
                });
            }
        }
    }
}
