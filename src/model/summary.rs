use ndarray::Array3;

use super::SummaryRow;

/// Dense (phase, ram, cores) table of summed total time.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryGrid {
    pub phases: Vec<String>,
    pub ram_gb: Vec<u32>,
    pub cpu_cores: Vec<u32>,
    pub totals: Array3<f64>,
}

impl SummaryGrid {
    pub fn zeros(phases: Vec<String>, ram_gb: Vec<u32>, cpu_cores: Vec<u32>) -> Self {
        let totals = Array3::zeros((phases.len(), ram_gb.len(), cpu_cores.len()));
        Self {
            phases,
            ram_gb,
            cpu_cores,
            totals,
        }
    }

    fn index(&self, phase: &str, ram_gb: u32, cpu_cores: u32) -> Option<(usize, usize, usize)> {
        let p = self.phases.iter().position(|name| name == phase)?;
        let r = self.ram_gb.iter().position(|&ram| ram == ram_gb)?;
        let c = self.cpu_cores.iter().position(|&cores| cores == cpu_cores)?;
        Some((p, r, c))
    }

    /// Adds `seconds` to a cell. Returns `false` when the labels are not on the grid.
    pub fn add(&mut self, phase: &str, ram_gb: u32, cpu_cores: u32, seconds: f64) -> bool {
        match self.index(phase, ram_gb, cpu_cores) {
            Some(index) => {
                self.totals[index] += seconds;
                true
            }
            None => false,
        }
    }

    /// Summed seconds for a triple, 0 when the triple is not on the grid.
    pub fn get(&self, phase: &str, ram_gb: u32, cpu_cores: u32) -> f64 {
        self.index(phase, ram_gb, cpu_cores)
            .map(|index| self.totals[index])
            .unwrap_or(0.0)
    }

    /// Values across the core axis for one phase and RAM label.
    pub fn series(&self, phase: &str, ram_gb: u32) -> Vec<f64> {
        self.cpu_cores
            .iter()
            .map(|&cores| self.get(phase, ram_gb, cores))
            .collect()
    }

    pub fn max_total(&self) -> f64 {
        self.totals.iter().copied().fold(0.0, f64::max)
    }

    /// Phase-major, then RAM, then cores.
    pub fn rows(&self) -> Vec<SummaryRow> {
        let mut rows = Vec::with_capacity(self.totals.len());
        for (p, phase) in self.phases.iter().enumerate() {
            for (r, &ram) in self.ram_gb.iter().enumerate() {
                for (c, &cpu_cores) in self.cpu_cores.iter().enumerate() {
                    rows.push(SummaryRow {
                        phase_name: phase.clone(),
                        ram,
                        cpu_cores,
                        total_time: self.totals[(p, r, c)],
                    });
                }
            }
        }
        rows
    }
}
