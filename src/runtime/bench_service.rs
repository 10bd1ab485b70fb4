use crate::model::PhaseResult;
use crate::primitives::SystemPrimitives;
use crate::workflow::{BenchPlan, run_sweep};

use super::Result;

#[derive(Debug, Default, Clone, Copy)]
pub struct BenchService {
    primitives: SystemPrimitives,
}

impl BenchService {
    pub fn run(&self, plan: &BenchPlan) -> Result<Vec<PhaseResult>> {
        let mut primitives = self.primitives;
        Ok(run_sweep(plan, &mut primitives)?)
    }
}
