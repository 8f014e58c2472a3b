//! Chart Surface Module
//! Turns two selected table columns into a renderable chart description.
//!
//! Each `ChartKind` has its own build strategy; the result is a
//! `ChartSurface` holding everything the plotter needs (title, axis labels,
//! grid flag and the plotted geometry) without touching any UI state.

use crate::data::Table;
use polars::prelude::PolarsError;
use std::fmt;
use thiserror::Error;

/// Angle (degrees) at which the first pie slice starts.
pub const PIE_START_ANGLE: f64 = 90.0;

/// Fraction of the slot width a bar occupies.
const BAR_WIDTH_RATIO: f64 = 0.8;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("column '{0}' not found")]
    ColumnNotFound(String),
    #[error("column '{0}' is not numeric")]
    NonNumeric(String),
    #[error("cannot draw a pie chart of '{0}': values must be non-negative with a positive total")]
    InvalidPieValues(String),
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// Chart type selected in the chart-type dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
    Pie,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Line, ChartKind::Bar, ChartKind::Pie];

    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Line => "Line",
            ChartKind::Bar => "Bar",
            ChartKind::Pie => "Pie",
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One slice of a pie chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    pub value: f64,
    /// Share of the total, in `0.0..=1.0`.
    pub fraction: f64,
    /// Start angle in degrees, counter-clockwise from the positive x axis.
    pub start_angle: f64,
    /// Angular extent in degrees.
    pub sweep: f64,
}

impl PieSlice {
    /// Percentage annotation, e.g. `"16.7%"`.
    pub fn percent_label(&self) -> String {
        format!("{:.1}%", self.fraction * 100.0)
    }

    pub fn mid_angle(&self) -> f64 {
        self.start_angle + self.sweep / 2.0
    }
}

/// Plotted geometry of a chart.
#[derive(Debug, Clone, PartialEq)]
pub enum ChartBody {
    /// Line or bar data: one `[x, y]` per row with a non-null value.
    /// `categories` holds tick labels when X is not numeric and rows are
    /// placed at positions 0, 1, 2, ...
    Series {
        points: Vec<[f64; 2]>,
        categories: Option<Vec<String>>,
    },
    Pie { slices: Vec<PieSlice> },
}

/// The rendered chart currently shown in the chart region.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSurface {
    pub kind: ChartKind,
    pub title: String,
    pub x_label: Option<String>,
    pub y_label: Option<String>,
    pub show_grid: bool,
    pub body: ChartBody,
    /// Render counter stamped by the controller. Keys the plot's stored
    /// view state, so a new chart never reuses an old chart's zoom or pan.
    pub generation: u64,
}

impl ChartSurface {
    /// Build a chart of `y_col` against `x_col` using the strategy for `kind`.
    pub fn build(
        kind: ChartKind,
        table: &Table,
        x_col: &str,
        y_col: &str,
    ) -> Result<Self, RenderError> {
        match kind {
            ChartKind::Line => build_line(table, x_col, y_col),
            ChartKind::Bar => build_bar(table, x_col, y_col),
            ChartKind::Pie => build_pie(table, x_col, y_col),
        }
    }

    /// Bar width in data units: a fixed share of the smallest gap between
    /// distinct x positions.
    pub fn bar_width(&self) -> f64 {
        let ChartBody::Series { points, .. } = &self.body else {
            return BAR_WIDTH_RATIO;
        };

        let mut xs: Vec<f64> = points.iter().map(|p| p[0]).collect();
        xs.sort_by(|a, b| a.total_cmp(b));
        xs.dedup();

        xs.windows(2)
            .map(|w| w[1] - w[0])
            .filter(|gap| *gap > 0.0)
            .fold(None, |min: Option<f64>, gap| {
                Some(min.map_or(gap, |m| m.min(gap)))
            })
            .map_or(BAR_WIDTH_RATIO, |gap| gap * BAR_WIDTH_RATIO)
    }
}

fn build_line(table: &Table, x_col: &str, y_col: &str) -> Result<ChartSurface, RenderError> {
    let body = xy_series(table, x_col, y_col)?;
    Ok(axis_chart(ChartKind::Line, x_col, y_col, body))
}

fn build_bar(table: &Table, x_col: &str, y_col: &str) -> Result<ChartSurface, RenderError> {
    let body = xy_series(table, x_col, y_col)?;
    Ok(axis_chart(ChartKind::Bar, x_col, y_col, body))
}

/// Y values are slice magnitudes; X values label the slices, falling back to
/// row indices when X is not a column of the table.
fn build_pie(table: &Table, x_col: &str, y_col: &str) -> Result<ChartSurface, RenderError> {
    let values = numeric_column(table, y_col)?;

    let labels: Vec<String> = if table.has_column(x_col) {
        table.text_values(x_col)?
    } else {
        (0..values.len()).map(|i| i.to_string()).collect()
    };

    let rows: Vec<(String, f64)> = labels
        .into_iter()
        .zip(values)
        .filter_map(|(label, value)| value.map(|v| (label, v)))
        .collect();

    let total: f64 = rows.iter().map(|(_, v)| v).sum();
    if rows.iter().any(|(_, v)| *v < 0.0 || !v.is_finite()) || total <= 0.0 {
        return Err(RenderError::InvalidPieValues(y_col.to_string()));
    }

    let mut angle = PIE_START_ANGLE;
    let slices = rows
        .into_iter()
        .map(|(label, value)| {
            let fraction = value / total;
            let slice = PieSlice {
                label,
                value,
                fraction,
                start_angle: angle,
                sweep: fraction * 360.0,
            };
            angle += slice.sweep;
            slice
        })
        .collect();

    Ok(ChartSurface {
        kind: ChartKind::Pie,
        title: format!("Pie chart of {}", y_col),
        x_label: None,
        y_label: None,
        show_grid: false,
        body: ChartBody::Pie { slices },
        generation: 0,
    })
}

fn axis_chart(kind: ChartKind, x_col: &str, y_col: &str, body: ChartBody) -> ChartSurface {
    ChartSurface {
        kind,
        title: format!("{} vs {}", y_col, x_col),
        x_label: Some(x_col.to_string()),
        y_label: Some(y_col.to_string()),
        show_grid: true,
        body,
        generation: 0,
    }
}

fn numeric_column(table: &Table, name: &str) -> Result<Vec<Option<f64>>, RenderError> {
    if !table.has_column(name) {
        return Err(RenderError::ColumnNotFound(name.to_string()));
    }
    if !table.is_numeric(name) {
        return Err(RenderError::NonNumeric(name.to_string()));
    }
    Ok(table.f64_values(name)?)
}

fn xy_series(table: &Table, x_col: &str, y_col: &str) -> Result<ChartBody, RenderError> {
    if !table.has_column(x_col) {
        return Err(RenderError::ColumnNotFound(x_col.to_string()));
    }
    let ys = numeric_column(table, y_col)?;

    if table.is_numeric(x_col) {
        let xs = table.f64_values(x_col)?;
        let points = xs
            .into_iter()
            .zip(ys)
            .filter_map(|(x, y)| Some([x?, y?]))
            .collect();
        return Ok(ChartBody::Series {
            points,
            categories: None,
        });
    }

    // Non-numeric X: categorical axis
    let categories = table.text_values(x_col)?;
    let points = ys
        .into_iter()
        .enumerate()
        .filter_map(|(i, y)| y.map(|y| [i as f64, y]))
        .collect();

    Ok(ChartBody::Series {
        points,
        categories: Some(categories),
    })
}
