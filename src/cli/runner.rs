use clap::Parser;

use crate::model::HardwareMatrix;
use crate::primitives::list_primitives;
use crate::runtime::{AppContext, Result};
use crate::workflow::{BenchPlan, SweepMode};

use super::types::{Cli, Commands, PrimitivesCommand, ReportArgs, RunArgs};

pub fn run_cli() -> std::result::Result<(), String> {
    let cli = Cli::parse();
    let app = AppContext::new();

    match cli.command.unwrap_or_else(|| Commands::Run(RunArgs::default())) {
        Commands::Run(args) => {
            run(&app, &args).map_err(|error| error.to_string())?;
            println!(
                "Results were written to '{}' and the charts to '{}'.",
                args.report.results.display(),
                args.report.chart.display()
            );
            println!(
                "The result summary was written to '{}'.",
                args.report.summary.display()
            );
            show_if_requested(&args.report)?;
        }
        Commands::Report(args) => {
            report(&app, &args).map_err(|error| error.to_string())?;
            println!(
                "Charts were written to '{}' from '{}'.",
                args.chart.display(),
                args.results.display()
            );
            println!(
                "The result summary was written to '{}'.",
                args.summary.display()
            );
            show_if_requested(&args)?;
        }
        Commands::Primitives { command } => match command {
            PrimitivesCommand::List => {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&list_primitives())
                        .map_err(|error| error.to_string())?
                );
            }
        },
        Commands::Matrix { output } => {
            let matrix = HardwareMatrix::default();
            match output {
                Some(path) => {
                    app.io_service()
                        .save_matrix(&path, &matrix)
                        .map_err(|error| error.to_string())?;
                    println!("Hardware matrix written to '{}'.", path.display());
                }
                None => print!(
                    "{}",
                    serde_yaml::to_string(&matrix).map_err(|error| error.to_string())?
                ),
            }
        }
        Commands::View { chart } => crate::ui::run(&chart)?,
    }

    Ok(())
}

/// Sweep, write the results file, then report from what was written.
fn run(app: &AppContext, args: &RunArgs) -> Result<()> {
    let matrix = app.io_service().matrix(args.report.matrix.as_deref())?;
    let phases = app.io_service().read_phases(&args.input)?;
    let mode = if args.replicate {
        SweepMode::Replicate
    } else {
        SweepMode::Rerun
    };
    let plan = BenchPlan::new(phases, matrix).with_mode(mode);
    let results = app.bench_service().run(&plan)?;
    app.io_service()
        .write_results(&args.report.results, &results)?;

    let rows = app.io_service().read_results(&args.report.results)?;
    app.report_service().report(
        &rows,
        &plan.matrix,
        &args.report.summary,
        &args.report.chart,
    )?;
    Ok(())
}

fn report(app: &AppContext, args: &ReportArgs) -> Result<()> {
    let matrix = app.io_service().matrix(args.matrix.as_deref())?;
    let rows = app.io_service().read_results(&args.results)?;
    app.report_service()
        .report(&rows, &matrix, &args.summary, &args.chart)?;
    Ok(())
}

fn show_if_requested(args: &ReportArgs) -> std::result::Result<(), String> {
    if args.show {
        crate::ui::run(&args.chart)?;
    }
    Ok(())
}
