use serde::{Deserialize, Serialize};

use crate::model::{HardwareMatrix, Phase};

use super::Result;

/// How the sweep treats the hardware labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SweepMode {
    /// Execute every phase again for each configuration.
    #[default]
    Rerun,
    /// Execute every phase once and copy the measurements to each configuration.
    Replicate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchPlan {
    pub phases: Vec<Phase>,
    #[serde(default)]
    pub matrix: HardwareMatrix,
    #[serde(default)]
    pub mode: SweepMode,
}

impl BenchPlan {
    pub fn new(phases: Vec<Phase>, matrix: HardwareMatrix) -> Self {
        Self {
            phases,
            matrix,
            mode: SweepMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: SweepMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn validate(&self) -> Result<()> {
        for phase in &self.phases {
            phase.validate()?;
        }
        self.matrix.validate()?;
        Ok(())
    }
}
