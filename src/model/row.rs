use serde::{Deserialize, Serialize, Serializer};

use super::PhaseResult;

fn fixed6<S: Serializer>(value: &f64, serializer: S) -> std::result::Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{value:.6}"))
}

/// One line of the detailed results file.
///
/// Field order is the column order of the file. `total_time` and
/// `total_size_mb` repeat the owning step's totals on every row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultRow {
    pub phase_name: String,
    pub step: String,
    pub generate_timestamp: u32,
    pub generate_random: u32,
    pub hash: u32,
    pub encrypt: u32,
    pub photos: u32,
    #[serde(serialize_with = "fixed6")]
    pub time: f64,
    #[serde(serialize_with = "fixed6")]
    pub total_time: f64,
    #[serde(serialize_with = "fixed6")]
    pub total_size_mb: f64,
    pub ram: u32,
    pub cpu_cores: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    pub phase_name: String,
    pub ram: u32,
    pub cpu_cores: u32,
    #[serde(serialize_with = "fixed6")]
    pub total_time: f64,
}

/// One row per operation record, in phase, step, operation order.
pub fn flatten_results(results: &[PhaseResult]) -> Vec<ResultRow> {
    let mut rows = Vec::new();
    for phase in results {
        for step in &phase.steps {
            for operation in &step.operations {
                rows.push(ResultRow {
                    phase_name: phase.phase_name.clone(),
                    step: step.step.clone(),
                    generate_timestamp: operation.counts.generate_timestamp,
                    generate_random: operation.counts.generate_random,
                    hash: operation.counts.hash,
                    encrypt: operation.counts.encrypt,
                    photos: operation.counts.photos,
                    time: operation.time,
                    total_time: step.total_time,
                    total_size_mb: step.total_size_mb,
                    ram: phase.configuration.ram_gb,
                    cpu_cores: phase.configuration.cpu_cores,
                });
            }
        }
    }
    rows
}
