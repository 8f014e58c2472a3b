//! Data Preview Widget
//! Scrollable grid with column headings and the first rows of the table.

use egui::{RichText, ScrollArea};

const PREVIEW_HEIGHT: f32 = 200.0;

pub struct DataPreview;

impl DataPreview {
    pub fn show(ui: &mut egui::Ui, columns: &[String], rows: &[Vec<String>]) {
        egui::Frame::none()
            .fill(ui.visuals().widgets.noninteractive.bg_fill)
            .rounding(5.0)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ScrollArea::both()
                    .id_salt("data_preview_scroll")
                    .max_height(PREVIEW_HEIGHT)
                    .auto_shrink([false, true])
                    .show(ui, |ui| {
                        if columns.is_empty() {
                            ui.label(RichText::new("No file loaded").color(egui::Color32::GRAY));
                            return;
                        }

                        egui::Grid::new("data_preview")
                            .striped(true)
                            .min_col_width(60.0)
                            .spacing([12.0, 4.0])
                            .show(ui, |ui| {
                                for col in columns {
                                    ui.label(RichText::new(col).strong());
                                }
                                ui.end_row();

                                for row in rows {
                                    for cell in row {
                                        ui.label(cell);
                                    }
                                    ui.end_row();
                                }
                            });
                    });
            });
    }
}
