//! CSV Data Loader Module
//! Parses CSV files into a `Table` using Polars and exposes column access.

use polars::prelude::*;
use std::path::Path;
use thiserror::Error;

/// Maximum number of rows shown in the preview grid.
pub const PREVIEW_ROWS: usize = 50;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("{0}")]
    Csv(#[from] PolarsError),
    #[error("the file contains no columns")]
    Empty,
}

/// A loaded dataset: rows x named columns.
///
/// Always holds at least one column.
#[derive(Debug, Clone)]
pub struct Table {
    df: DataFrame,
    columns: Vec<String>,
}

impl Table {
    /// Wrap a DataFrame, rejecting frames without columns.
    pub fn new(df: DataFrame) -> Result<Self, LoadError> {
        if df.width() == 0 {
            return Err(LoadError::Empty);
        }

        let columns = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        Ok(Self { df, columns })
    }

    /// Column names in file order.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c == name)
    }

    pub fn row_count(&self) -> usize {
        self.df.height()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Whether a column holds integer or float values.
    pub fn is_numeric(&self, name: &str) -> bool {
        self.df
            .column(name)
            .map(|col| {
                matches!(
                    col.dtype(),
                    DataType::Float32
                        | DataType::Float64
                        | DataType::Int8
                        | DataType::Int16
                        | DataType::Int32
                        | DataType::Int64
                        | DataType::UInt8
                        | DataType::UInt16
                        | DataType::UInt32
                        | DataType::UInt64
                )
            })
            .unwrap_or(false)
    }

    /// Values of a column cast to f64, nulls kept as `None`.
    pub fn f64_values(&self, name: &str) -> PolarsResult<Vec<Option<f64>>> {
        let col = self.df.column(name)?.cast(&DataType::Float64)?;
        Ok(col.f64()?.into_iter().collect())
    }

    /// Display text of every value in a column.
    pub fn text_values(&self, name: &str) -> PolarsResult<Vec<String>> {
        let col = self.df.column(name)?;
        (0..col.len())
            .map(|i| col.get(i).map(cell_text))
            .collect()
    }

    /// Display text of the first `limit` rows, one `Vec` per row.
    pub fn preview(&self, limit: usize) -> Vec<Vec<String>> {
        let head = self.df.head(Some(limit));
        let columns = head.get_columns();

        (0..head.height())
            .map(|row| {
                columns
                    .iter()
                    .map(|col| col.get(row).map(cell_text).unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}

/// Render a cell without the quotes Polars puts around strings.
fn cell_text(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => other.to_string(),
    }
}

/// Handles CSV file loading with Polars.
pub struct DataLoader;

impl DataLoader {
    /// Parse a CSV file (header row = column names) into a new `Table`.
    ///
    /// Column types are inferred from every row, so a value that only
    /// widens a column late in the file still loads. Malformed rows are an
    /// error rather than silently skipped.
    pub fn load_csv(path: &Path) -> Result<Table, LoadError> {
        let df = LazyCsvReader::new(path)
            .with_has_header(true)
            .with_infer_schema_length(None)
            .finish()?
            .collect()?;

        Table::new(df)
    }
}
