use crate::formats::FormatError;
use crate::model::ModelError;
use crate::workflow::BenchError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    #[error("file format error: {0}")]
    Format(#[from] FormatError),

    #[error("benchmark error: {0}")]
    Bench(#[from] BenchError),
}
