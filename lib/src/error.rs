use polars::error::PolarsError;
use std::io::Error as IoError;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),

    #[error("IO error: {0}")]
    Io(#[from] IoError),

    #[error("Required dataset file missing: {}", .0.display())]
    DataUnavailable(PathBuf),

    #[error("Selection does not match a unique record: {0}")]
    SelectionNotFound(String),

    #[error("Tracking subset has no renderable frames")]
    EmptyAnimationInput,
}
