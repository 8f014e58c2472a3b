//! Charts module - Chart building and drawing

mod plotter;
mod surface;

pub use plotter::ChartPlotter;
pub use surface::{ChartBody, ChartKind, ChartSurface, PieSlice, RenderError};
