// src/plot_functions/plot_rms_timing.rs

use std::error::Error;
use std::path::{Path, PathBuf};

use crate::constants::{
    COLOR_RMS_0, COLOR_RMS_1, LABEL_RMS_0, LABEL_RMS_1, LINE_WIDTH_PLOT, OUTPUT_FILE_SUFFIX,
    X_DESC_TIME, Y_DESC_RMS_0, Y_DESC_RMS_1,
};
use crate::data_analysis::step_series::step_post_segments;
use crate::data_input::sample_table::SampleTable;
use crate::plot_framework::{
    draw_two_row_stacked_plot, padded_axis_range, PlotConfig, PlotSeries, StackedPlotConfig,
};

/// Output image path: `<input stem>_RMS_stacked.png` next to the input file.
pub fn output_file_for(input_file: &Path) -> PathBuf {
    let stem = input_file.file_stem().unwrap_or_default().to_string_lossy();
    input_file.with_file_name(format!("{stem}{OUTPUT_FILE_SUFFIX}"))
}

/// Builds the RMS_1 (upper) over RMS_0 (lower) step figure.
///
/// RMS_0 uses every row, RMS_1 only the rows selected by `mask`. Both areas
/// share the x range spanning whatever either series draws.
pub fn build_rms_timing_figure(
    table: &SampleTable,
    mask: &[bool],
) -> Result<StackedPlotConfig, Box<dyn Error>> {
    let rms_1_points = table.secondary_points(mask)?;

    let rms_0 = PlotSeries {
        segments: step_post_segments(&table.reference_points()),
        label: LABEL_RMS_0.to_string(),
        color: COLOR_RMS_0,
        stroke_width: LINE_WIDTH_PLOT,
    };
    let rms_1 = PlotSeries {
        segments: step_post_segments(&rms_1_points),
        label: LABEL_RMS_1.to_string(),
        color: *COLOR_RMS_1,
        stroke_width: LINE_WIDTH_PLOT,
    };
    if rms_1.is_empty() {
        log::warn!("No drawable {} samples; upper plot is empty.", LABEL_RMS_1);
    }

    let x_range = padded_axis_range(rms_0.x_values().chain(rms_1.x_values()));

    let upper = PlotConfig {
        x_range: x_range.clone(),
        y_range: padded_axis_range(rms_1.y_values()),
        series: vec![rms_1],
        x_label: None,
        y_label: Y_DESC_RMS_1.to_string(),
        show_x_tick_labels: false,
    };
    let lower = PlotConfig {
        x_range,
        y_range: padded_axis_range(rms_0.y_values()),
        series: vec![rms_0],
        x_label: Some(X_DESC_TIME.to_string()),
        y_label: Y_DESC_RMS_0.to_string(),
        show_x_tick_labels: true,
    };

    Ok(StackedPlotConfig { upper, lower })
}

/// Generates the stacked RMS_0 / RMS_1 step plot and writes it to `output_file`.
pub fn plot_rms_timing(
    table: &SampleTable,
    mask: &[bool],
    output_file: &Path,
) -> Result<(), Box<dyn Error>> {
    let figure = build_rms_timing_figure(table, mask)?;
    draw_two_row_stacked_plot(output_file, &figure)
}
