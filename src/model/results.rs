use serde::{Deserialize, Serialize};

use super::{Configuration, StepCounts};

/// Timed outcome of one iteration of a step's primitive loop.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OperationRecord {
    pub counts: StepCounts,
    /// Elapsed wall-clock seconds.
    pub time: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StepResult {
    pub step: String,
    pub operations: Vec<OperationRecord>,
    pub total_time: f64,
    pub total_size_mb: f64,
}

impl StepResult {
    pub fn new(step: impl Into<String>) -> Self {
        Self {
            step: step.into(),
            operations: Vec::new(),
            total_time: 0.0,
            total_size_mb: 0.0,
        }
    }

    pub fn push(&mut self, record: OperationRecord) {
        self.total_time += record.time;
        self.total_size_mb += record.counts.size_mb();
        self.operations.push(record);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhaseResult {
    pub phase_name: String,
    pub configuration: Configuration,
    pub total_time: f64,
    pub total_size_mb: f64,
    pub steps: Vec<StepResult>,
}

impl PhaseResult {
    pub fn new(phase_name: impl Into<String>, configuration: Configuration) -> Self {
        Self {
            phase_name: phase_name.into(),
            configuration,
            total_time: 0.0,
            total_size_mb: 0.0,
            steps: Vec::new(),
        }
    }

    pub fn push(&mut self, step: StepResult) {
        self.total_time += step.total_time;
        self.total_size_mb += step.total_size_mb;
        self.steps.push(step);
    }

    /// Same measurements under another label.
    pub fn relabeled(&self, configuration: Configuration) -> Self {
        Self {
            configuration,
            ..self.clone()
        }
    }
}
