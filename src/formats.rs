mod chart;
mod csv_io;
mod draw;
mod error;
mod text;
mod util;

#[cfg(test)]
mod tests;

pub use chart::{ChartLayout, draw_chart, phase_color, render_chart};
pub use csv_io::{
    INPUT_COLUMNS, RESULT_COLUMNS, SUMMARY_COLUMNS, read_phases, read_phases_from, read_results,
    read_results_from, write_result_rows, write_results, write_summary, write_summary_to,
};
pub use error::{FormatError, Result};
