// tests/pipeline_test.rs

use std::error::Error;
use std::io::Write;
use std::path::Path;

use rms_timing_plot::data_analysis::row_mask::valid_time1_mask;
use rms_timing_plot::data_analysis::task_activity::analyze_task_activity;
use rms_timing_plot::data_input::table_parser::parse_sample_table;
use rms_timing_plot::error::LoadError;
use rms_timing_plot::plot_framework::StackedPlotConfig;
use rms_timing_plot::plot_functions::plot_rms_timing::{build_rms_timing_figure, plot_rms_timing};
use tempfile::NamedTempFile;

fn write_csv(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

fn load_figure(path: &Path) -> Result<StackedPlotConfig, Box<dyn Error>> {
    let table = parse_sample_table(path)?;
    let mask = valid_time1_mask(&table);
    build_rms_timing_figure(&table, &mask)
}

#[test]
fn test_sentinel_rows_are_not_plotted() {
    let csv = write_csv("time,level,time1,level1\n0,1,0,5\n1,0,3,7\n2,1,0,9\n");
    let figure = load_figure(csv.path()).unwrap();

    assert_eq!(figure.upper.series[0].segments, vec![vec![(3.0, 7.0)]]);
}

#[test]
fn test_reference_series_keeps_every_row() {
    let csv = write_csv("time,level,time1,level1\n0,1,0,0\n1,0,0,0\n2,1,5,1\n");
    let figure = load_figure(csv.path()).unwrap();

    let lower: Vec<(f64, f64)> = figure.lower.series[0].points().collect();
    // Staircase vertices: first point plus two per following row.
    assert_eq!(lower.len(), 5);
    for point in [(0.0, 1.0), (1.0, 0.0), (2.0, 1.0)] {
        assert!(lower.contains(&point), "missing {point:?}");
    }
}

#[test]
fn test_header_only_file_renders_two_empty_areas() {
    let csv = write_csv("time,level,time1,level1\n");
    let figure = load_figure(csv.path()).unwrap();

    assert!(figure.upper.series[0].is_empty());
    assert!(figure.lower.series[0].is_empty());
    // Legends are still attached to empty series.
    assert_eq!(figure.upper.series[0].label, "RMS_1");
    assert_eq!(figure.lower.series[0].label, "RMS_0");
}

#[test]
fn test_header_only_file_writes_png() {
    let csv = write_csv("time,level,time1,level1\n");
    let out_dir = tempfile::tempdir().unwrap();
    let output_file = out_dir.path().join("empty_RMS_stacked.png");

    let table = parse_sample_table(csv.path()).unwrap();
    let mask = valid_time1_mask(&table);
    plot_rms_timing(&table, &mask, &output_file).unwrap();

    assert!(output_file.is_file());
}

#[test]
fn test_sentinel_example_writes_png() {
    let csv = write_csv("time,level,time1,level1\n0,1,0,5\n1,0,3,7\n2,1,0,9\n");
    let out_dir = tempfile::tempdir().unwrap();
    let output_file = out_dir.path().join("three_rows_RMS_stacked.png");

    let table = parse_sample_table(csv.path()).unwrap();
    let mask = valid_time1_mask(&table);
    plot_rms_timing(&table, &mask, &output_file).unwrap();

    assert!(output_file.is_file());
}

#[test]
fn test_gap_in_capture_writes_png() {
    // Blank level and a short row leave gaps in both lines.
    let csv = write_csv("time,level,time1,level1\n0,1,5,1\n1,,6,0\n2,0\n3,1,8,1\n");
    let out_dir = tempfile::tempdir().unwrap();
    let output_file = out_dir.path().join("gaps_RMS_stacked.png");

    let table = parse_sample_table(csv.path()).unwrap();
    let mask = valid_time1_mask(&table);
    plot_rms_timing(&table, &mask, &output_file).unwrap();

    assert!(output_file.is_file());
}

#[test]
fn test_all_sentinel_rows_leave_upper_area_empty() {
    let csv = write_csv("time,level,time1,level1\n10,1,0,1\n12,0,0,0\n");
    let figure = load_figure(csv.path()).unwrap();

    assert!(figure.upper.series[0].is_empty());
    assert_eq!(figure.lower.series[0].points().count(), 3);
}

#[test]
fn test_missing_level1_fails_before_rendering() {
    let csv = write_csv("time,level,time1\n0,1,0\n");
    let out_dir = tempfile::tempdir().unwrap();
    let output_file = out_dir.path().join("out.png");

    let result: Result<(), Box<dyn Error>> = (|| {
        let table = parse_sample_table(csv.path())?;
        let mask = valid_time1_mask(&table);
        plot_rms_timing(&table, &mask, &output_file)
    })();

    let err = result.unwrap_err();
    match err.downcast_ref::<LoadError>() {
        Some(LoadError::MissingColumn(name)) => assert_eq!(name, "level1"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(!output_file.exists());
}

#[test]
fn test_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = parse_sample_table(&dir.path().join("timing_test")).unwrap_err();
    assert!(matches!(err, LoadError::Csv(_)));
}

#[test]
fn test_rerun_produces_identical_figure() {
    let csv = write_csv("time,level,time1,level1\n100, 1, 0, 1\n103, 0, 0, 0\n300, 1, 250, 1\n303, 0, 320, 0\n");

    let first = load_figure(csv.path()).unwrap();
    let second = load_figure(csv.path()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_firmware_capture_activity() {
    let csv = write_csv(
        "time,level,time1,level1\n\
         100, 1, 0, 1\n\
         103, 0, 0, 0\n\
         300, 1, 250, 1\n\
         303, 0, 320, 0\n\
         500, 1, 0, 1\n\
         503, 0, 0, 0\n",
    );
    let table = parse_sample_table(csv.path()).unwrap();
    let mask = valid_time1_mask(&table);
    let report = analyze_task_activity(&table, &mask).unwrap();

    assert_eq!(report.rms_0.activations, 3);
    assert_eq!(report.rms_0.mean_busy, Some(3.0));
    assert_eq!(report.rms_1.activations, 1);
    assert_eq!(report.preemptions, 1);
}
