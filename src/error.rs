use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the classifier core and its data loaders.
#[derive(Debug, Error)]
pub enum Error {
    /// Parameter initialization was asked for a zero-length weight vector.
    #[error("invalid dimension: {dim} (feature count must be positive)")]
    InvalidDimension { dim: usize },

    /// Two arrays that must line up (w vs X, X vs Y) do not, or a batch is empty.
    #[error("shape mismatch in {context}: expected {expected}, got {got}")]
    ShapeMismatch {
        context: &'static str,
        expected: String,
        got: String,
    },

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A label outside {0, 1}.
    #[error("invalid label {value} at index {index} (expected 0 or 1)")]
    InvalidLabel { index: usize, value: u8 },

    #[error("no examples found under {}", path.display())]
    EmptyDataset { path: PathBuf },

    /// Binary classification needs exactly two class folders.
    #[error("expected 2 class folders under {}, found {found}", path.display())]
    ClassCount { path: PathBuf, found: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Image(#[from] image::ImageError),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Builds a `ShapeMismatch` from two `(rows, cols)` pairs.
    pub(crate) fn shape(context: &'static str, expected: (usize, usize), got: (usize, usize)) -> Error {
        Error::ShapeMismatch {
            context,
            expected: format!("{}x{}", expected.0, expected.1),
            got: format!("{}x{}", got.0, got.1),
        }
    }
}
