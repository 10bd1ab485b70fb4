use std::path::Path;

use log::info;

use crate::formats::{read_phases, read_results, write_results};
use crate::model::{HardwareMatrix, Phase, PhaseResult, ResultRow};
use crate::workflow::{load_matrix, save_matrix};

use super::Result;

#[derive(Debug, Default, Clone, Copy)]
pub struct IoService;

impl IoService {
    pub fn read_phases(&self, path: impl AsRef<Path>) -> Result<Vec<Phase>> {
        let path = path.as_ref();
        let phases = read_phases(path)?;
        info!(
            "read {} phase(s) with {} step(s) from {}",
            phases.len(),
            phases.iter().map(|phase| phase.steps.len()).sum::<usize>(),
            path.display()
        );
        Ok(phases)
    }

    pub fn write_results(&self, path: impl AsRef<Path>, results: &[PhaseResult]) -> Result<usize> {
        let path = path.as_ref();
        let rows = write_results(path, results)?;
        info!("wrote {rows} result row(s) to {}", path.display());
        Ok(rows)
    }

    pub fn read_results(&self, path: impl AsRef<Path>) -> Result<Vec<ResultRow>> {
        let path = path.as_ref();
        let rows = read_results(path)?;
        info!("read {} result row(s) from {}", rows.len(), path.display());
        Ok(rows)
    }

    /// The given matrix file, or the default label table when `path` is `None`.
    pub fn matrix(&self, path: Option<&Path>) -> Result<HardwareMatrix> {
        match path {
            Some(path) => {
                let matrix = load_matrix(path)?;
                info!("loaded hardware matrix from {}", path.display());
                Ok(matrix)
            }
            None => Ok(HardwareMatrix::default()),
        }
    }

    pub fn save_matrix(&self, path: impl AsRef<Path>, matrix: &HardwareMatrix) -> Result<()> {
        save_matrix(path, matrix)?;
        Ok(())
    }
}
