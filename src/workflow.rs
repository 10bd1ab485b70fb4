mod error;
mod execute;
mod io;
mod plan;
mod report;


pub use error::{BenchError, Result};
pub use execute::{PAYLOAD_LEN, RANDOM_LEN, run_phase, run_step, run_sweep};
pub use io::{load_matrix, save_matrix};
pub use plan::{BenchPlan, SweepMode};
pub use report::group_results;
