use std::io;

/// Errors surfaced by sequence mutation, document assembly and CSV export
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),

    #[error("GPX parsing error: {0}")]
    GpxError(#[from] gpx::errors::GpxError),

    #[error("CSV writing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Timestamp formatting error: {0}")]
    TimeFormatError(#[from] time::error::Format),

    #[error("Point not found in sequence")]
    PointNotFound,

    #[error("Sequence contains no points")]
    EmptySequence,
}

pub type Result<T> = std::result::Result<T, Error>;
