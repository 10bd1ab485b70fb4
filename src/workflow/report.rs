use std::collections::BTreeSet;

use log::warn;

use crate::model::{HardwareMatrix, ResultRow, SummaryGrid};

/// Sums `total_time` per (phase, ram, cores).
///
/// The phase axis is the sorted set of phase names found in `rows`; the
/// label axes come from `matrix`. Rows labelled outside the matrix are
/// dropped with a warning.
pub fn group_results(rows: &[ResultRow], matrix: &HardwareMatrix) -> SummaryGrid {
    let phases = rows
        .iter()
        .map(|row| row.phase_name.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect::<Vec<_>>();
    let mut grid = SummaryGrid::zeros(phases, matrix.ram_gb.clone(), matrix.cpu_cores.clone());

    let mut skipped = 0usize;
    for row in rows {
        if !grid.add(&row.phase_name, row.ram, row.cpu_cores, row.total_time) {
            skipped += 1;
        }
    }
    if skipped > 0 {
        warn!("{skipped} result row(s) are labelled outside the hardware matrix and were not summed");
    }
    grid
}
