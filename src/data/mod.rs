//! Data module - CSV loading and column access

mod loader;

pub use loader::{DataLoader, LoadError, Table, PREVIEW_ROWS};
