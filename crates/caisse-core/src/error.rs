use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("spreadsheet reading failed: {0}")]
    Reader(#[from] caisse_reader::ReaderError),

    #[error("polars operation failed: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("expected column '{0}' is missing from the input sheet")]
    Schema(String),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
