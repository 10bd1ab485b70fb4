use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, Trim, WriterBuilder};
use serde::{Deserialize, Deserializer};

use crate::model::{Phase, PhaseResult, ResultRow, Step, StepCounts, SummaryGrid, flatten_results};

use super::Result;
use super::util::{create, open, require_columns};

pub const INPUT_COLUMNS: [&str; 7] = [
    "phase_name",
    "step",
    "generate_timestamp",
    "generate_random",
    "hash",
    "encrypt",
    "photos",
];

pub const RESULT_COLUMNS: [&str; 12] = [
    "phase_name",
    "step",
    "generate_timestamp",
    "generate_random",
    "hash",
    "encrypt",
    "photos",
    "time",
    "total_time",
    "total_size_mb",
    "ram",
    "cpu_cores",
];

pub const SUMMARY_COLUMNS: [&str; 4] = ["phase_name", "ram", "cpu_cores", "total_time"];

/// Count column that tolerates surrounding spaces. Names are kept verbatim.
fn padded_count<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<u32, D::Error> {
    let raw = String::deserialize(deserializer)?;
    raw.trim().parse().map_err(serde::de::Error::custom)
}

#[derive(Debug, Deserialize)]
struct InputRow {
    phase_name: String,
    step: String,
    #[serde(deserialize_with = "padded_count")]
    generate_timestamp: u32,
    #[serde(deserialize_with = "padded_count")]
    generate_random: u32,
    #[serde(deserialize_with = "padded_count")]
    hash: u32,
    #[serde(deserialize_with = "padded_count")]
    encrypt: u32,
    #[serde(deserialize_with = "padded_count")]
    photos: u32,
}

pub fn read_phases(path: impl AsRef<Path>) -> Result<Vec<Phase>> {
    read_phases_from(open(path.as_ref())?)
}

/// Parses the phase/step table. Every row is parsed before any phase is
/// returned, so a bad row yields no partial plan.
pub fn read_phases_from<R: Read>(input: R) -> Result<Vec<Phase>> {
    let mut reader = ReaderBuilder::new().trim(Trim::Headers).from_reader(input);
    require_columns("input", reader.headers()?, &INPUT_COLUMNS)?;

    let mut rows = Vec::new();
    for record in reader.deserialize::<InputRow>() {
        let row = record?;
        let counts = StepCounts {
            generate_timestamp: row.generate_timestamp,
            generate_random: row.generate_random,
            hash: row.hash,
            encrypt: row.encrypt,
            photos: row.photos,
        };
        rows.push((row.phase_name, Step::new(row.step, counts)));
    }
    Ok(Phase::group(rows))
}

/// Writes one row per operation record. Returns the number of data rows.
pub fn write_results(path: impl AsRef<Path>, results: &[PhaseResult]) -> Result<usize> {
    let rows = flatten_results(results);
    write_result_rows(create(path.as_ref())?, &rows)?;
    Ok(rows.len())
}

pub fn write_result_rows<W: Write>(output: W, rows: &[ResultRow]) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(output);
    writer.write_record(RESULT_COLUMNS)?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn read_results(path: impl AsRef<Path>) -> Result<Vec<ResultRow>> {
    read_results_from(open(path.as_ref())?)
}

pub fn read_results_from<R: Read>(input: R) -> Result<Vec<ResultRow>> {
    let mut reader = ReaderBuilder::new().trim(Trim::Headers).from_reader(input);
    require_columns("results", reader.headers()?, &RESULT_COLUMNS)?;
    let rows = reader
        .deserialize::<ResultRow>()
        .collect::<std::result::Result<Vec<_>, _>>()?;
    Ok(rows)
}

/// Writes every cell of the grid. Returns the number of data rows.
pub fn write_summary(path: impl AsRef<Path>, grid: &SummaryGrid) -> Result<usize> {
    write_summary_to(create(path.as_ref())?, grid)
}

pub fn write_summary_to<W: Write>(output: W, grid: &SummaryGrid) -> Result<usize> {
    let rows = grid.rows();
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(output);
    writer.write_record(SUMMARY_COLUMNS)?;
    for row in &rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    Ok(rows.len())
}
