use std::fs::File;
use std::path::Path;

use csv::StringRecord;

use super::{FormatError, Result};

pub(crate) fn open(path: &Path) -> Result<File> {
    File::open(path).map_err(|source| FormatError::Open {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn create(path: &Path) -> Result<File> {
    File::create(path).map_err(|source| FormatError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Fails on the first required column absent from `headers`.
pub(crate) fn require_columns(
    table: &'static str,
    headers: &StringRecord,
    required: &[&'static str],
) -> Result<()> {
    for &column in required {
        if !headers.iter().any(|header| header == column) {
            return Err(FormatError::MissingColumn { table, column });
        }
    }
    Ok(())
}
