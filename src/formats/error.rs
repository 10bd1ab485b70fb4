use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FormatError>;

#[derive(Debug, Error)]
pub enum FormatError {
    #[error("cannot open `{path}`: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O failure: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV failure: {0}")]
    Csv(#[from] csv::Error),

    #[error("missing column `{column}` in {table} header")]
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },

    #[error("chart font failure: {0}")]
    Font(#[from] ab_glyph::InvalidFont),

    #[error("chart encode failure: {0}")]
    Image(#[from] image::ImageError),
}
