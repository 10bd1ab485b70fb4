use std::hint::black_box;
use std::time::Instant;

use log::{debug, info};

use crate::model::{Configuration, OperationRecord, Phase, PhaseResult, Step, StepResult};
use crate::primitives::Primitives;

use super::{BenchPlan, Result, SweepMode};

/// Bytes drawn by each `generate_random` call.
pub const RANDOM_LEN: usize = 16;
/// Bytes hashed or encrypted by each `hash` / `encrypt` call.
pub const PAYLOAD_LEN: usize = 1024;

/// Runs `step.num_operations` iterations, each timed as a single interval.
///
/// Within an iteration the primitives run in a fixed order: timestamps,
/// random draws, hashes, encryptions. The payloads for hashing and
/// encryption are drawn inside the timed interval.
pub fn run_step<P: Primitives + ?Sized>(step: &Step, primitives: &mut P) -> Result<StepResult> {
    let counts = step.counts;
    let mut result = StepResult::new(&step.name);

    for _ in 0..step.num_operations {
        let started = Instant::now();

        for _ in 0..counts.generate_timestamp {
            black_box(primitives.timestamp());
        }
        for _ in 0..counts.generate_random {
            black_box(primitives.random_bytes(RANDOM_LEN)?);
        }
        for _ in 0..counts.hash {
            let data = primitives.random_bytes(PAYLOAD_LEN)?;
            black_box(primitives.hash(&data));
        }
        for _ in 0..counts.encrypt {
            let data = primitives.random_bytes(PAYLOAD_LEN)?;
            black_box(primitives.encrypt(&data)?);
        }

        result.push(OperationRecord {
            counts,
            time: started.elapsed().as_secs_f64(),
        });
    }

    debug!(
        "step `{}`: {} operation(s) in {:.6}s",
        result.step,
        result.operations.len(),
        result.total_time
    );
    Ok(result)
}

pub fn run_phase<P: Primitives + ?Sized>(
    phase: &Phase,
    configuration: Configuration,
    primitives: &mut P,
) -> Result<PhaseResult> {
    let mut result = PhaseResult::new(&phase.name, configuration);
    for step in &phase.steps {
        result.push(run_step(step, primitives)?);
    }
    Ok(result)
}

/// Runs every phase under every configuration of the plan's matrix.
///
/// Results are ordered configuration-major (RAM, then cores), then by
/// phase in plan order.
pub fn run_sweep<P: Primitives + ?Sized>(
    plan: &BenchPlan,
    primitives: &mut P,
) -> Result<Vec<PhaseResult>> {
    plan.validate()?;
    let total = plan.matrix.len();
    let mut results = Vec::with_capacity(total * plan.phases.len());

    match plan.mode {
        SweepMode::Rerun => {
            for (index, configuration) in plan.matrix.configurations().enumerate() {
                info!(
                    "configuration {}/{total}: ram={}GB cores={}",
                    index + 1,
                    configuration.ram_gb,
                    configuration.cpu_cores
                );
                for phase in &plan.phases {
                    results.push(run_phase(phase, configuration, primitives)?);
                }
            }
        }
        SweepMode::Replicate => {
            let mut configurations = plan.matrix.configurations();
            let Some(first) = configurations.next() else {
                return Ok(results);
            };
            info!(
                "measuring {} phase(s) once and replicating across {total} configuration(s)",
                plan.phases.len()
            );
            let measured = plan
                .phases
                .iter()
                .map(|phase| run_phase(phase, first, primitives))
                .collect::<Result<Vec<_>>>()?;
            results.extend(measured.iter().cloned());
            for configuration in configurations {
                results.extend(
                    measured
                        .iter()
                        .map(|phase| phase.relabeled(configuration)),
                );
            }
        }
    }

    Ok(results)
}
