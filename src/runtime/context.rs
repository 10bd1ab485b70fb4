use super::{BenchService, IoService, ReportService};

#[derive(Debug, Clone, Default)]
pub struct AppContext {
    io_service: IoService,
    bench_service: BenchService,
    report_service: ReportService,
}

impl AppContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn io_service(&self) -> &IoService {
        &self.io_service
    }

    pub fn bench_service(&self) -> &BenchService {
        &self.bench_service
    }

    pub fn report_service(&self) -> &ReportService {
        &self.report_service
    }
}
