mod bench_service;
mod context;
mod error;
mod io_service;
mod report_service;


pub use bench_service::BenchService;
pub use context::AppContext;
pub use error::{AppError, Result};
pub use io_service::IoService;
pub use report_service::{ReportOutcome, ReportService};
