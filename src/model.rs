mod error;
mod hardware;
mod results;
mod row;
mod step;
mod summary;


pub use error::{ModelError, Result};
pub use hardware::{Configuration, HardwareMatrix};
pub use results::{OperationRecord, PhaseResult, StepResult};
pub use row::{ResultRow, SummaryRow, flatten_results};
pub use step::{Phase, Step, StepCounts};
pub use summary::SummaryGrid;
