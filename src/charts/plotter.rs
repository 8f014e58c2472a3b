//! Chart Plotter Module
//! Draws a `ChartSurface` with egui_plot.

use crate::charts::{ChartBody, ChartKind, ChartSurface, PieSlice};
use egui::{Color32, RichText};
use egui_plot::{Bar, BarChart, Line, Plot, PlotPoint, PlotPoints, Points, Polygon, Text};

pub const SERIES_COLOR: Color32 = Color32::from_rgb(52, 152, 219); // Blue

pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(52, 152, 219),  // Blue
    Color32::from_rgb(243, 156, 18),  // Orange
    Color32::from_rgb(46, 204, 113),  // Green
    Color32::from_rgb(231, 76, 60),   // Red
    Color32::from_rgb(155, 89, 182),  // Purple
    Color32::from_rgb(121, 85, 72),   // Brown
    Color32::from_rgb(233, 30, 99),   // Pink
    Color32::from_rgb(96, 125, 139),  // Blue Grey
    Color32::from_rgb(205, 220, 57),  // Lime
    Color32::from_rgb(0, 188, 212),   // Cyan
];

/// Arc segments per full turn of a pie slice outline.
const PIE_SEGMENTS: f64 = 180.0;
const LABEL_RADIUS: f64 = 1.1;
const PERCENT_RADIUS: f64 = 0.6;
/// Widest wedge (degrees) that is still convex.
const MAX_WEDGE_SWEEP: f64 = 180.0;

/// Draws chart surfaces using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Point on a circle of `radius` at `angle_deg`, counter-clockwise from +x.
    pub fn polar(radius: f64, angle_deg: f64) -> [f64; 2] {
        let rad = angle_deg.to_radians();
        [radius * rad.cos(), radius * rad.sin()]
    }

    /// Closed outline of a unit-radius wedge: centre, then the arc.
    pub fn wedge_outline(start_angle: f64, sweep: f64) -> Vec<[f64; 2]> {
        let steps = ((sweep / 360.0 * PIE_SEGMENTS).ceil() as usize).max(1);
        let mut outline = Vec::with_capacity(steps + 2);
        outline.push([0.0, 0.0]);
        for i in 0..=steps {
            let angle = start_angle + sweep * i as f64 / steps as f64;
            outline.push(Self::polar(1.0, angle));
        }
        outline
    }

    /// Outlines covering a slice, each wedge at most `MAX_WEDGE_SWEEP` wide.
    ///
    /// egui_plot fills polygons as convex shapes, which a wedge wider than
    /// a half turn is not.
    pub fn slice_outlines(slice: &PieSlice) -> Vec<Vec<[f64; 2]>> {
        let pieces = ((slice.sweep / MAX_WEDGE_SWEEP).ceil() as usize).max(1);
        let sweep = slice.sweep / pieces as f64;

        (0..pieces)
            .map(|i| Self::wedge_outline(slice.start_angle + sweep * i as f64, sweep))
            .collect()
    }

    /// Draw the surface into the remaining space of `ui`.
    pub fn draw(ui: &mut egui::Ui, surface: &ChartSurface) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&surface.title).size(16.0).strong());
        });
        ui.add_space(4.0);

        match &surface.body {
            ChartBody::Series { points, categories } => {
                Self::draw_series(ui, surface, points, categories.as_deref())
            }
            ChartBody::Pie { slices } => Self::draw_pie(ui, surface.generation, slices),
        }
    }

    fn draw_series(
        ui: &mut egui::Ui,
        surface: &ChartSurface,
        points: &[[f64; 2]],
        categories: Option<&[String]>,
    ) {
        let mut plot = Plot::new(format!("chart_surface_{}", surface.generation))
            .show_grid(surface.show_grid)
            .x_axis_label(surface.x_label.clone().unwrap_or_default())
            .y_axis_label(surface.y_label.clone().unwrap_or_default());

        if let Some(categories) = categories {
            let labels = categories.to_vec();
            plot = plot.x_axis_formatter(move |mark, _range| {
                let idx = mark.value.round();
                if idx < 0.0 || (mark.value - idx).abs() > 1e-6 {
                    return String::new();
                }
                labels.get(idx as usize).cloned().unwrap_or_default()
            });
        }

        let name = surface.y_label.clone().unwrap_or_default();
        let bar_width = surface.bar_width();

        plot.show(ui, |plot_ui| match surface.kind {
            ChartKind::Bar => {
                let bars = points
                    .iter()
                    .map(|&[x, y]| Bar::new(x, y).width(bar_width).fill(SERIES_COLOR))
                    .collect();
                plot_ui.bar_chart(BarChart::new(bars).color(SERIES_COLOR).name(&name));
            }
            _ => {
                plot_ui.line(
                    Line::new(PlotPoints::from_iter(points.iter().copied()))
                        .color(SERIES_COLOR)
                        .width(1.5)
                        .name(&name),
                );
                plot_ui.points(
                    Points::new(PlotPoints::from_iter(points.iter().copied()))
                        .radius(3.0)
                        .color(SERIES_COLOR),
                );
            }
        });
    }

    fn draw_pie(ui: &mut egui::Ui, generation: u64, slices: &[PieSlice]) {
        Plot::new(format!("chart_surface_pie_{}", generation))
            .data_aspect(1.0)
            .show_axes(false)
            .show_grid(false)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .include_x(-1.4)
            .include_x(1.4)
            .include_y(-1.3)
            .include_y(1.3)
            .show(ui, |plot_ui| {
                for (i, slice) in slices.iter().enumerate() {
                    let color = PALETTE[i % PALETTE.len()];

                    let name = format!("{}: {}", slice.label, slice.value);

                    for outline in Self::slice_outlines(slice) {
                        plot_ui.polygon(
                            Polygon::new(PlotPoints::from(outline))
                                .fill_color(color)
                                .stroke(egui::Stroke::new(1.0, color))
                                .name(&name),
                        );
                    }

                    let [lx, ly] = Self::polar(LABEL_RADIUS, slice.mid_angle());
                    plot_ui.text(Text::new(
                        PlotPoint::new(lx, ly),
                        RichText::new(&slice.label).size(12.0),
                    ));

                    let [px, py] = Self::polar(PERCENT_RADIUS, slice.mid_angle());
                    plot_ui.text(Text::new(
                        PlotPoint::new(px, py),
                        RichText::new(slice.percent_label())
                            .size(11.0)
                            .color(Color32::BLACK),
                    ));
                }
            });
    }
}
