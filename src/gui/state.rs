//! Application State
//! Owns the loaded table, the current column selection and the chart surface,
//! and implements the two user actions: load a file and render a chart.

use crate::charts::{ChartKind, ChartSurface, RenderError};
use crate::data::{DataLoader, LoadError, Table, PREVIEW_ROWS};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Failed to load CSV: {0}")]
    Load(#[from] LoadError),
    #[error("Load a CSV file first.")]
    NoData,
    #[error("Select valid columns for X and Y axes.")]
    InvalidColumn,
    #[error("Failed to plot graph: {0}")]
    Render(#[from] RenderError),
}

impl AppError {
    /// Warnings are shown with a warning dialog, everything else as an error.
    pub fn is_warning(&self) -> bool {
        matches!(self, AppError::NoData)
    }
}

/// Columns and chart type picked in the control panel.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    pub x_col: String,
    pub y_col: String,
    pub kind: ChartKind,
}

/// Outcome of the last action, used to colour the status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Idle,
    Success,
    Warning,
    Error,
}

/// Status line text with its kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Status {
    pub kind: StatusKind,
    pub text: String,
}

impl Status {
    pub fn new(kind: StatusKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    fn from_error(err: &AppError) -> Self {
        let kind = if err.is_warning() {
            StatusKind::Warning
        } else {
            StatusKind::Error
        };
        Self::new(kind, err.to_string())
    }
}

/// Application controller state, independent of any UI toolkit.
pub struct AppState {
    table: Option<Table>,
    file_path: Option<PathBuf>,
    preview: Vec<Vec<String>>,
    surface: Option<ChartSurface>,
    renders: u64,
    pub selection: Selection,
    status: Status,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            table: None,
            file_path: None,
            preview: Vec::new(),
            surface: None,
            renders: 0,
            selection: Selection::default(),
            status: Status::new(StatusKind::Idle, "Ready"),
        }
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Column names offered by both column selectors.
    pub fn columns(&self) -> &[String] {
        self.table.as_ref().map(Table::columns).unwrap_or_default()
    }

    /// Rows shown in the preview grid.
    pub fn preview(&self) -> &[Vec<String>] {
        &self.preview
    }

    pub fn surface(&self) -> Option<&ChartSurface> {
        self.surface.as_ref()
    }

    pub fn file_path(&self) -> Option<&Path> {
        self.file_path.as_deref()
    }

    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Load a CSV file, replacing the current table only on success.
    pub fn load_path(&mut self, path: &Path) -> Result<(), AppError> {
        let table = match DataLoader::load_csv(path) {
            Ok(table) => table,
            Err(e) => {
                log::error!("failed to load {}: {}", path.display(), e);
                let err = AppError::from(e);
                self.status = Status::from_error(&err);
                return Err(err);
            }
        };

        self.preview = table.preview(PREVIEW_ROWS);

        // Keep selections that still name a column
        if !table.has_column(&self.selection.x_col) {
            self.selection.x_col.clear();
        }
        if !table.has_column(&self.selection.y_col) {
            self.selection.y_col.clear();
        }

        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());
        let text = format!(
            "Loaded {} rows, {} columns from {}",
            table.row_count(),
            table.column_count(),
            file_name
        );
        log::info!("{}", text);
        self.status = Status::new(StatusKind::Success, text);

        self.table = Some(table);
        self.file_path = Some(path.to_path_buf());
        Ok(())
    }

    /// Render the selected columns, replacing any existing chart surface.
    pub fn render(&mut self) -> Result<(), AppError> {
        let Some(table) = self.table.as_ref() else {
            log::warn!("render requested before any file was loaded");
            self.status = Status::from_error(&AppError::NoData);
            return Err(AppError::NoData);
        };

        let Selection {
            x_col,
            y_col,
            kind,
        } = &self.selection;

        // An unknown Y only blocks line and bar charts here; the pie
        // strategy reports it itself.
        if !table.has_column(x_col) || (!table.has_column(y_col) && *kind != ChartKind::Pie) {
            log::warn!("invalid column selection x='{}' y='{}'", x_col, y_col);
            self.status = Status::from_error(&AppError::InvalidColumn);
            return Err(AppError::InvalidColumn);
        }

        self.surface = None;

        match ChartSurface::build(*kind, table, x_col, y_col) {
            Ok(mut surface) => {
                self.renders += 1;
                surface.generation = self.renders;
                log::info!("rendered {} chart '{}'", kind, surface.title);
                self.status =
                    Status::new(StatusKind::Success, format!("Plotted {}", surface.title));
                self.surface = Some(surface);
                Ok(())
            }
            Err(e) => {
                log::error!("failed to render {} chart: {}", kind, e);
                let err = AppError::from(e);
                self.status = Status::from_error(&err);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charts::ChartBody;
    use std::fs;
    use tempfile::TempDir;

    struct Fixture {
        dir: TempDir,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                dir: TempDir::new().unwrap(),
            }
        }

        fn csv(&self, name: &str, contents: &str) -> PathBuf {
            let path = self.dir.path().join(name);
            fs::write(&path, contents).unwrap();
            path
        }
    }

    fn select(state: &mut AppState, x: &str, y: &str, kind: ChartKind) {
        state.selection = Selection {
            x_col: x.to_string(),
            y_col: y.to_string(),
            kind,
        };
    }

    #[test]
    fn load_populates_preview_and_columns() {
        let fx = Fixture::new();
        let path = fx.csv("ab.csv", "A,B\n1,4\n2,5\n3,6\n");
        let mut state = AppState::new();

        state.load_path(&path).unwrap();

        assert_eq!(state.preview().len(), 3);
        assert_eq!(state.columns(), ["A", "B"]);
        assert_eq!(state.file_path(), Some(path.as_path()));
        assert_eq!(
            state.status(),
            &Status::new(StatusKind::Success, "Loaded 3 rows, 2 columns from ab.csv")
        );
    }

    #[test]
    fn failed_load_keeps_previous_table() {
        let fx = Fixture::new();
        let good = fx.csv("good.csv", "A,B\n1,2\n");
        let mut state = AppState::new();
        state.load_path(&good).unwrap();

        let err = state
            .load_path(&fx.dir.path().join("missing.csv"))
            .unwrap_err();

        assert!(matches!(err, AppError::Load(_)));
        assert!(!err.is_warning());
        assert!(err.to_string().starts_with("Failed to load CSV: "));
        assert_eq!(state.status().kind, StatusKind::Error);
        assert_eq!(state.status().text, err.to_string());
        assert_eq!(state.columns(), ["A", "B"]);
        assert_eq!(state.preview().len(), 1);
        assert_eq!(state.file_path(), Some(good.as_path()));
    }

    #[test]
    fn load_keeps_only_surviving_selections() {
        let fx = Fixture::new();
        let mut state = AppState::new();
        state.load_path(&fx.csv("one.csv", "A,B\n1,2\n")).unwrap();
        select(&mut state, "A", "B", ChartKind::Bar);

        state.load_path(&fx.csv("two.csv", "A,C\n1,2\n")).unwrap();

        assert_eq!(state.selection.x_col, "A");
        assert_eq!(state.selection.y_col, "");
        assert_eq!(state.selection.kind, ChartKind::Bar);
    }

    #[test]
    fn render_without_data_warns() {
        let mut state = AppState::new();

        let err = state.render().unwrap_err();

        assert!(matches!(err, AppError::NoData));
        assert!(err.is_warning());
        assert!(state.surface().is_none());
        assert_eq!(
            state.status(),
            &Status::new(StatusKind::Warning, "Load a CSV file first.")
        );
    }

    #[test]
    fn line_and_bar_titles() {
        let fx = Fixture::new();
        let mut state = AppState::new();
        state.load_path(&fx.csv("ab.csv", "A,B\n1,4\n2,5\n3,6\n")).unwrap();

        for kind in [ChartKind::Line, ChartKind::Bar] {
            select(&mut state, "A", "B", kind);
            state.render().unwrap();

            let surface = state.surface().unwrap();
            assert_eq!(surface.kind, kind);
            assert_eq!(surface.title, "B vs A");
            assert_eq!(surface.x_label.as_deref(), Some("A"));
            assert_eq!(surface.y_label.as_deref(), Some("B"));
        }
    }

    #[test]
    fn pie_from_loaded_file() {
        let fx = Fixture::new();
        let mut state = AppState::new();
        state
            .load_path(&fx.csv("pie.csv", "label,value\na,10\nb,20\nc,30\n"))
            .unwrap();
        select(&mut state, "label", "value", ChartKind::Pie);

        state.render().unwrap();

        let Some(ChartBody::Pie { slices }) = state.surface().map(|s| &s.body) else {
            panic!("expected a pie surface");
        };
        let labels: Vec<&str> = slices.iter().map(|s| s.label.as_str()).collect();
        let percents: Vec<String> = slices.iter().map(|s| s.percent_label()).collect();
        assert_eq!(labels, ["a", "b", "c"]);
        assert_eq!(percents, ["16.7%", "33.3%", "50.0%"]);
    }

    #[test]
    fn rerender_replaces_the_surface() {
        let fx = Fixture::new();
        let mut state = AppState::new();
        state.load_path(&fx.csv("ab.csv", "A,B\n1,4\n2,5\n")).unwrap();

        select(&mut state, "A", "B", ChartKind::Line);
        state.render().unwrap();
        let first = state.surface().unwrap().generation;

        // same selection again still yields a fresh surface
        state.render().unwrap();
        let second = state.surface().unwrap().generation;

        select(&mut state, "B", "A", ChartKind::Bar);
        state.render().unwrap();

        let surface = state.surface().unwrap();
        assert_eq!(surface.kind, ChartKind::Bar);
        assert_eq!(surface.title, "A vs B");
        assert_ne!(first, second);
        assert_ne!(second, surface.generation);
        assert_eq!(state.status().kind, StatusKind::Success);
    }

    #[test]
    fn invalid_x_is_rejected_for_every_kind() {
        let fx = Fixture::new();
        let mut state = AppState::new();
        state.load_path(&fx.csv("ab.csv", "A,B\n1,4\n")).unwrap();
        select(&mut state, "A", "B", ChartKind::Line);
        state.render().unwrap();

        for kind in ChartKind::ALL {
            select(&mut state, "nope", "B", kind);
            let err = state.render().unwrap_err();
            assert!(matches!(err, AppError::InvalidColumn));
            assert_eq!(state.status().kind, StatusKind::Error);
            // previous chart stays on screen
            assert_eq!(state.surface().map(|s| s.title.as_str()), Some("B vs A"));
        }
    }

    #[test]
    fn invalid_y_is_rejected_for_line_and_bar() {
        let fx = Fixture::new();
        let mut state = AppState::new();
        state.load_path(&fx.csv("ab.csv", "A,B\n1,4\n")).unwrap();

        for kind in [ChartKind::Line, ChartKind::Bar] {
            select(&mut state, "A", "nope", kind);
            assert!(matches!(state.render(), Err(AppError::InvalidColumn)));
        }
    }

    #[test]
    fn invalid_y_for_pie_passes_validation_and_fails_in_renderer() {
        let fx = Fixture::new();
        let mut state = AppState::new();
        state.load_path(&fx.csv("ab.csv", "A,B\n1,4\n")).unwrap();
        select(&mut state, "A", "B", ChartKind::Line);
        state.render().unwrap();

        select(&mut state, "A", "nope", ChartKind::Pie);
        let err = state.render().unwrap_err();

        assert!(matches!(
            err,
            AppError::Render(RenderError::ColumnNotFound(ref c)) if c == "nope"
        ));
        assert!(state.surface().is_none());
    }
}
