// src/error.rs

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type used throughout the viewer
pub type ViewerResult<T> = Result<T, ViewerError>;

/// Errors that abort a visualization run.
#[derive(Error, Debug)]
pub enum ViewerError {
    /// Input or mask file does not exist
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A token in the matrix file is not a number
    #[error("{}:{line}:{column}: cannot parse '{token}' as a number", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        token: String,
    },

    #[error("{}:{line}: expected {expected} columns, found {found}", path.display())]
    RaggedRow {
        path: PathBuf,
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("{} contains no data rows", .0.display())]
    EmptyMatrix(PathBuf),

    /// Range image and mask of one test case differ in dimensions
    #[error("'{title}': range image is {range:?} but mask is {mask:?}")]
    ShapeMismatch {
        title: String,
        range: (usize, usize),
        mask: (usize, usize),
    },

    #[error("Rendering failed: {0}")]
    Render(String),

    #[error("Display failed: {0}")]
    Display(String),
}

impl<E: std::error::Error + Send + Sync> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for ViewerError
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        ViewerError::Render(err.to_string())
    }
}

impl From<eframe::Error> for ViewerError {
    fn from(err: eframe::Error) -> Self {
        ViewerError::Display(err.to_string())
    }
}
