use std::path::Path;

use log::info;

use crate::formats::{ChartLayout, render_chart, write_summary};
use crate::model::{HardwareMatrix, ResultRow, SummaryGrid};
use crate::workflow::group_results;

use super::Result;

#[derive(Debug, Clone)]
pub struct ReportOutcome {
    pub grid: SummaryGrid,
    pub summary_rows: usize,
}

#[derive(Debug, Clone, Default)]
pub struct ReportService {
    layout: ChartLayout,
}

impl ReportService {
    pub fn with_layout(layout: ChartLayout) -> Self {
        Self { layout }
    }

    /// Groups the flat result rows, renders the chart, then writes the summary.
    pub fn report(
        &self,
        rows: &[ResultRow],
        matrix: &HardwareMatrix,
        summary_path: impl AsRef<Path>,
        chart_path: impl AsRef<Path>,
    ) -> Result<ReportOutcome> {
        matrix.validate()?;
        let grid = group_results(rows, matrix);

        let chart_path = chart_path.as_ref();
        render_chart(chart_path, &grid, &matrix.chart_ram_gb, &self.layout)?;
        info!(
            "rendered {} chart panel(s) with {} phase(s) to {}",
            matrix.chart_ram_gb.len(),
            grid.phases.len(),
            chart_path.display()
        );

        let summary_path = summary_path.as_ref();
        let summary_rows = write_summary(summary_path, &grid)?;
        info!(
            "wrote {summary_rows} summary row(s) to {}",
            summary_path.display()
        );

        Ok(ReportOutcome { grid, summary_rows })
    }
}
