use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::{ModelError, Result};

/// Descriptive hardware labels attached to a phase run. Nothing is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Configuration {
    pub ram_gb: u32,
    pub cpu_cores: u32,
}

impl Configuration {
    pub fn new(ram_gb: u32, cpu_cores: u32) -> Self {
        Self { ram_gb, cpu_cores }
    }
}

/// RAM values charted when a matrix does not list its own.
const CHARTED_RAM_GB: [u32; 4] = [1, 2, 4, 8];

/// Label table shared by the sweep, the summary and the chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "MatrixFile")]
pub struct HardwareMatrix {
    pub ram_gb: Vec<u32>,
    pub cpu_cores: Vec<u32>,
    /// RAM values that get a chart panel; each must also appear in `ram_gb`.
    pub chart_ram_gb: Vec<u32>,
}

/// On-disk shape of a matrix, where the chart labels are optional.
#[derive(Deserialize)]
struct MatrixFile {
    ram_gb: Vec<u32>,
    cpu_cores: Vec<u32>,
    chart_ram_gb: Option<Vec<u32>>,
}

impl From<MatrixFile> for HardwareMatrix {
    fn from(file: MatrixFile) -> Self {
        let chart_ram_gb = file
            .chart_ram_gb
            .unwrap_or_else(|| default_chart_ram_gb(&file.ram_gb));
        Self {
            ram_gb: file.ram_gb,
            cpu_cores: file.cpu_cores,
            chart_ram_gb,
        }
    }
}

/// The swept RAM values that are also in [`CHARTED_RAM_GB`], or every swept
/// value when none are.
fn default_chart_ram_gb(ram_gb: &[u32]) -> Vec<u32> {
    let charted = ram_gb
        .iter()
        .copied()
        .filter(|ram| CHARTED_RAM_GB.contains(ram))
        .collect::<Vec<_>>();
    if charted.is_empty() {
        ram_gb.to_vec()
    } else {
        charted
    }
}

impl Default for HardwareMatrix {
    fn default() -> Self {
        let ram_gb = vec![1, 2, 4, 8, 16];
        Self {
            chart_ram_gb: default_chart_ram_gb(&ram_gb),
            ram_gb,
            cpu_cores: vec![1, 2, 4, 8],
        }
    }
}

impl HardwareMatrix {
    pub fn single(configuration: Configuration) -> Self {
        Self {
            ram_gb: vec![configuration.ram_gb],
            cpu_cores: vec![configuration.cpu_cores],
            chart_ram_gb: vec![configuration.ram_gb],
        }
    }

    /// Cross product with RAM as the outer loop and cores as the inner one.
    pub fn configurations(&self) -> impl Iterator<Item = Configuration> + '_ {
        self.ram_gb.iter().flat_map(move |&ram_gb| {
            self.cpu_cores
                .iter()
                .map(move |&cpu_cores| Configuration::new(ram_gb, cpu_cores))
        })
    }

    pub fn len(&self) -> usize {
        self.ram_gb.len() * self.cpu_cores.len()
    }

    pub fn validate(&self) -> Result<()> {
        check_labels("ram_gb", &self.ram_gb)?;
        check_labels("cpu_cores", &self.cpu_cores)?;
        check_labels("chart_ram_gb", &self.chart_ram_gb)?;
        if let Some(missing) = self
            .chart_ram_gb
            .iter()
            .find(|ram| !self.ram_gb.contains(ram))
        {
            return Err(ModelError::InvalidMatrix(format!(
                "chart_ram_gb value {missing} is not part of ram_gb {:?}",
                self.ram_gb
            )));
        }
        Ok(())
    }
}

fn check_labels(field: &str, labels: &[u32]) -> Result<()> {
    if labels.is_empty() {
        return Err(ModelError::InvalidMatrix(format!("`{field}` must not be empty")));
    }
    if labels.contains(&0) {
        return Err(ModelError::InvalidMatrix(format!(
            "`{field}` labels must be positive"
        )));
    }
    let unique = labels.iter().collect::<BTreeSet<_>>();
    if unique.len() != labels.len() {
        return Err(ModelError::InvalidMatrix(format!(
            "`{field}` contains duplicate labels: {labels:?}"
        )));
    }
    Ok(())
}
