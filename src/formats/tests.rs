use image::Rgb;
use tempfile::tempdir;

use super::{
    ChartLayout, FormatError, draw_chart, phase_color, read_phases, read_phases_from,
    read_results, read_results_from, render_chart, write_result_rows, write_results,
    write_summary, write_summary_to,
};
use crate::model::{
    Configuration, OperationRecord, PhaseResult, ResultRow, StepCounts, StepResult, SummaryGrid,
};

const INPUT: &str = "\
phase_name,step,generate_timestamp,generate_random,hash,encrypt,photos
capture,shoot,2,0,0,0,1
upload,prepare,0,1,1,0,0
capture,store,0,0,1,1,3
";

#[test]
fn input_rows_group_into_phases() {
    let phases = read_phases_from(INPUT.as_bytes()).expect("parse");
    assert_eq!(phases.len(), 2);
    assert_eq!(phases[0].name, "capture");
    assert_eq!(phases[0].steps.len(), 2);
    assert_eq!(phases[0].steps[0].name, "shoot");
    assert_eq!(phases[0].steps[0].counts.generate_timestamp, 2);
    assert_eq!(phases[0].steps[1].counts.photos, 3);
    assert!(
        phases
            .iter()
            .flat_map(|phase| &phase.steps)
            .all(|step| step.num_operations == 1)
    );
    assert_eq!(phases[1].name, "upload");
}

#[test]
fn input_without_photos_column_fails_before_any_row() {
    let input = "phase_name,step,generate_timestamp,generate_random,hash,encrypt\n\
                 capture,shoot,2,0,0,0\n";
    let err = read_phases_from(input.as_bytes()).expect_err("must fail");
    assert!(matches!(
        err,
        FormatError::MissingColumn {
            column: "photos",
            ..
        }
    ));
    assert!(err.to_string().contains("missing column `photos`"));
}

#[test]
fn non_numeric_count_is_rejected() {
    let input = "phase_name,step,generate_timestamp,generate_random,hash,encrypt,photos\n\
                 capture,shoot,two,0,0,0,1\n";
    let err = read_phases_from(input.as_bytes()).expect_err("must fail");
    assert!(matches!(err, FormatError::Csv(_)));
}

#[test]
fn names_keep_their_spacing_and_counts_allow_padding() {
    let input = "phase_name,step,generate_timestamp,generate_random,hash,encrypt,photos\n\
                 capture,shoot, 2,0,0,0,1\n\
                 \"capture \",shoot,1,0,0,0, 3\n";
    let phases = read_phases_from(input.as_bytes()).expect("parse");
    assert_eq!(phases.len(), 2);
    assert_eq!(phases[0].name, "capture");
    assert_eq!(phases[0].steps[0].counts.generate_timestamp, 2);
    assert_eq!(phases[1].name, "capture ");
    assert_eq!(phases[1].steps[0].counts.photos, 3);
}

#[test]
fn header_only_input_has_no_phases() {
    let input = "phase_name,step,generate_timestamp,generate_random,hash,encrypt,photos\n";
    assert!(read_phases_from(input.as_bytes()).expect("parse").is_empty());
}

#[test]
fn empty_step_name_is_read() {
    let input = "phase_name,step,generate_timestamp,generate_random,hash,encrypt,photos\n\
                 capture,,1,0,0,0,0\n";
    let phases = read_phases_from(input.as_bytes()).expect("parse");
    assert_eq!(phases[0].steps[0].name, "");
}

#[test]
fn missing_input_file_names_the_path() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("input.csv");
    let err = read_phases(&path).expect_err("must fail");
    assert!(matches!(err, FormatError::Open { .. }));
    assert!(err.to_string().contains("input.csv"));
}

fn sample_results() -> Vec<PhaseResult> {
    let mut step = StepResult::new("shoot");
    step.push(OperationRecord {
        counts: StepCounts {
            generate_timestamp: 2,
            photos: 1,
            ..StepCounts::default()
        },
        time: 0.000_123_4,
    });
    let mut phase = PhaseResult::new("capture", Configuration::new(16, 8));
    phase.push(step);
    vec![phase]
}

#[test]
fn results_file_uses_fixed_columns_and_precision() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("results.csv");
    let written = write_results(&path, &sample_results()).expect("write");
    assert_eq!(written, 1);

    let text = std::fs::read_to_string(&path).expect("read");
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some(
            "phase_name,step,generate_timestamp,generate_random,hash,encrypt,photos,time,total_time,total_size_mb,ram,cpu_cores"
        )
    );
    assert_eq!(
        lines.next(),
        Some("capture,shoot,2,0,0,0,1,0.000123,0.000123,10.000000,16,8")
    );
    assert_eq!(lines.next(), None);
}

#[test]
fn results_roundtrip_is_byte_exact() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("results.csv");
    write_results(&path, &sample_results()).expect("write");
    let original = std::fs::read(&path).expect("read");

    let rows = read_results(&path).expect("parse");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].time, 0.000123);
    assert_eq!(rows[0].ram, 16);

    let mut rewritten = Vec::new();
    write_result_rows(&mut rewritten, &rows).expect("rewrite");
    assert_eq!(rewritten, original);
    let reparsed: Vec<ResultRow> = read_results_from(rewritten.as_slice()).expect("reparse");
    assert_eq!(reparsed, rows);
}

#[test]
fn empty_results_still_carry_header() {
    let mut output = Vec::new();
    write_result_rows(&mut output, &[]).expect("write");
    let text = String::from_utf8(output).expect("utf8");
    assert_eq!(text.lines().count(), 1);
    assert!(read_results_from(text.as_bytes()).expect("parse").is_empty());
}

#[test]
fn summary_has_one_row_per_triple_with_zero_fill() {
    let mut grid = SummaryGrid::zeros(
        vec!["capture".into(), "upload".into()],
        vec![1, 2, 4, 8, 16],
        vec![1, 2, 4, 8],
    );
    grid.add("upload", 16, 8, 0.5);

    let mut output = Vec::new();
    let written = write_summary_to(&mut output, &grid).expect("write");
    assert_eq!(written, 2 * 5 * 4);
    let text = String::from_utf8(output).expect("utf8");
    let lines = text.lines().collect::<Vec<_>>();
    assert_eq!(lines.len(), 1 + 40);
    assert_eq!(lines[0], "phase_name,ram,cpu_cores,total_time");
    assert_eq!(lines[1], "capture,1,1,0.000000");
    assert_eq!(lines[40], "upload,16,8,0.500000");
}

#[test]
fn summary_file_is_written_to_disk() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("summary_results.csv");
    let grid = SummaryGrid::zeros(vec!["capture".into()], vec![1], vec![1, 2]);
    assert_eq!(write_summary(&path, &grid).expect("write"), 2);
    assert!(path.exists());
}

fn count_color(image: &image::RgbImage, color: Rgb<u8>) -> usize {
    image.pixels().filter(|pixel| **pixel == color).count()
}

#[test]
fn chart_draws_phase_lines_in_palette_colors() {
    let mut grid = SummaryGrid::zeros(
        vec!["capture".into(), "upload".into()],
        vec![1, 2, 4, 8, 16],
        vec![1, 2, 4, 8],
    );
    grid.add("capture", 1, 1, 1.0);
    grid.add("capture", 1, 8, 2.0);
    grid.add("upload", 4, 2, 0.5);

    let layout = ChartLayout::default();
    let image = draw_chart(&grid, &[1, 2, 4, 8], &layout).expect("draw");
    assert_eq!(image.dimensions(), (1600, 1200));
    assert!(count_color(&image, phase_color(0)) > 0);
    assert!(count_color(&image, phase_color(1)) > 0);
    assert_eq!(count_color(&image, phase_color(2)), 0);
}

#[test]
fn chart_without_phases_has_no_series() {
    let grid = SummaryGrid::zeros(Vec::new(), vec![1], vec![1, 2]);
    let image = draw_chart(&grid, &[1], &ChartLayout::default()).expect("draw");
    assert_eq!(count_color(&image, phase_color(0)), 0);
}

fn differing_pixels(left: &image::RgbImage, right: &image::RgbImage) -> usize {
    left.pixels()
        .zip(right.pixels())
        .filter(|(a, b)| a != b)
        .count()
}

#[test]
fn legend_names_each_phase() {
    let layout = ChartLayout::default();
    let capture = SummaryGrid::zeros(vec!["capture".into()], vec![1], vec![1, 2]);
    let upload = SummaryGrid::zeros(vec!["upload".into()], vec![1], vec![1, 2]);
    let left = draw_chart(&capture, &[1], &layout).expect("draw");
    let right = draw_chart(&upload, &[1], &layout).expect("draw");
    assert!(differing_pixels(&left, &right) > 0);
}

#[test]
fn panels_are_titled_by_ram_and_ticked_by_cores() {
    let layout = ChartLayout::default();
    let grid = SummaryGrid::zeros(vec!["capture".into()], vec![1, 2], vec![1, 2]);
    let one = draw_chart(&grid, &[1], &layout).expect("draw");
    let two = draw_chart(&grid, &[2], &layout).expect("draw");
    assert!(differing_pixels(&one, &two) > 0);

    let other_cores = SummaryGrid::zeros(vec!["capture".into()], vec![1, 2], vec![4, 8]);
    let relabelled = draw_chart(&other_cores, &[1], &layout).expect("draw");
    assert!(differing_pixels(&one, &relabelled) > 0);
}

#[test]
fn y_axis_values_follow_the_data() {
    let layout = ChartLayout::default();
    let mut small = SummaryGrid::zeros(vec!["capture".into()], vec![1], vec![1]);
    small.add("capture", 1, 1, 1.0);
    let mut large = small.clone();
    large.add("capture", 1, 1, 99.0);
    // A single core slot sits mid-axis and the series scales to the same
    // height, so only the tick labels differ.
    let left = draw_chart(&small, &[1], &layout).expect("draw");
    let right = draw_chart(&large, &[1], &layout).expect("draw");
    assert!(differing_pixels(&left, &right) > 0);
}

#[test]
fn labels_darken_the_background() {
    let grid = SummaryGrid::zeros(vec!["capture".into()], vec![1], vec![1, 2]);
    let image = draw_chart(&grid, &[1], &ChartLayout::default()).expect("draw");
    // The panel title band sits above the plot and holds only text.
    let title_ink = (30..1550)
        .flat_map(|x| (30..52).map(move |y| (x, y)))
        .filter(|&(x, y)| image.get_pixel(x, y).0[0] < 200)
        .count();
    assert!(title_ink > 50);
}

#[test]
fn chart_is_saved_as_png() {
    let dir = tempdir().expect("tempdir");
    let path = dir.path().join("chart.png");
    let grid = SummaryGrid::zeros(vec!["capture".into()], vec![1, 2], vec![1, 2]);
    let layout = ChartLayout {
        width: 400,
        height: 300,
        columns: 2,
    };
    render_chart(&path, &grid, &[1, 2], &layout).expect("render");
    let decoded = image::open(&path).expect("decode");
    assert_eq!((decoded.width(), decoded.height()), (400, 300));
}
