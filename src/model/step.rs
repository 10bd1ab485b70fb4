use serde::{Deserialize, Serialize};

use super::{ModelError, Result};

/// Synthetic megabytes attributed to each photo of a step.
pub const MB_PER_PHOTO: f64 = 10.0;

/// Per-iteration primitive call counts of a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StepCounts {
    pub generate_timestamp: u32,
    pub generate_random: u32,
    pub hash: u32,
    pub encrypt: u32,
    pub photos: u32,
}

impl StepCounts {
    pub fn size_mb(&self) -> f64 {
        f64::from(self.photos) * MB_PER_PHOTO
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    pub name: String,
    pub counts: StepCounts,
    pub num_operations: u32,
}

impl Step {
    /// Steps read from an input file always run a single operation.
    pub fn new(name: impl Into<String>, counts: StepCounts) -> Self {
        Self {
            name: name.into(),
            counts,
            num_operations: 1,
        }
    }

    pub fn with_operations(mut self, num_operations: u32) -> Self {
        self.num_operations = num_operations;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_operations == 0 {
            return Err(ModelError::NoOperations {
                step: self.name.clone(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    pub name: String,
    pub steps: Vec<Step>,
}

impl Phase {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            steps: Vec::new(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.steps.is_empty() {
            return Err(ModelError::EmptyPhase(self.name.clone()));
        }
        for step in &self.steps {
            step.validate()?;
        }
        Ok(())
    }

    /// Groups `(phase_name, step)` pairs into phases, keeping phases in
    /// first-appearance order and steps in input order.
    pub fn group(rows: impl IntoIterator<Item = (String, Step)>) -> Vec<Phase> {
        let mut phases: Vec<Phase> = Vec::new();
        for (phase_name, step) in rows {
            match phases.iter_mut().find(|phase| phase.name == phase_name) {
                Some(phase) => phase.steps.push(step),
                None => {
                    let mut phase = Phase::new(phase_name);
                    phase.steps.push(step);
                    phases.push(phase);
                }
            }
        }
        phases
    }
}
