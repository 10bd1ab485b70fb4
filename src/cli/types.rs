use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub(super) const DEFAULT_INPUT: &str = "input.csv";
pub(super) const DEFAULT_RESULTS: &str = "results.csv";
pub(super) const DEFAULT_SUMMARY: &str = "summary_results.csv";
pub(super) const DEFAULT_CHART: &str = "total_time_by_phase_and_configuration.png";

#[derive(Debug, Parser)]
#[command(
    name = "phasebench",
    version,
    about = "Phase/step microbenchmark harness for timestamp, RNG, SHA-1 and AES-CBC workloads"
)]
pub(super) struct Cli {
    /// Defaults to `run` with the standard file names.
    #[command(subcommand)]
    pub(super) command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub(super) enum Commands {
    /// Runs every phase under every hardware configuration, then reports.
    Run(RunArgs),
    /// Rebuilds the summary and chart from an existing results file.
    Report(ReportArgs),
    Primitives {
        #[command(subcommand)]
        command: PrimitivesCommand,
    },
    /// Prints the default hardware matrix, or writes it to `--output`.
    Matrix {
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Opens a chart image in a native window.
    View { chart: PathBuf },
}

#[derive(Debug, Subcommand)]
pub(super) enum PrimitivesCommand {
    List,
}

#[derive(Debug, Clone, Args)]
pub(super) struct RunArgs {
    #[arg(long, default_value = DEFAULT_INPUT)]
    pub(super) input: PathBuf,
    /// Measure each phase once and copy it to every configuration.
    #[arg(long)]
    pub(super) replicate: bool,
    #[command(flatten)]
    pub(super) report: ReportArgs,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            replicate: false,
            report: ReportArgs::default(),
        }
    }
}

#[derive(Debug, Clone, Args)]
pub(super) struct ReportArgs {
    #[arg(long, default_value = DEFAULT_RESULTS)]
    pub(super) results: PathBuf,
    #[arg(long, default_value = DEFAULT_SUMMARY)]
    pub(super) summary: PathBuf,
    #[arg(long, default_value = DEFAULT_CHART)]
    pub(super) chart: PathBuf,
    /// YAML or JSON hardware matrix; the built-in label table otherwise.
    #[arg(long)]
    pub(super) matrix: Option<PathBuf>,
    /// Open the chart in a window once it is written.
    #[arg(long)]
    pub(super) show: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            results: PathBuf::from(DEFAULT_RESULTS),
            summary: PathBuf::from(DEFAULT_SUMMARY),
            chart: PathBuf::from(DEFAULT_CHART),
            matrix: None,
            show: false,
        }
    }
}
