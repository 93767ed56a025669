//! Error types for the I/O and rendering layers.
//!
//! The parsing and aggregation core never fails; only reading the source file,
//! writing exports and drawing charts can.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    /// The CSV source could not be read.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A chart could not be drawn or written.
    #[error("Failed to render chart '{chart}': {message}")]
    Render { chart: String, message: String },

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;
